//! Repository trait for task entities.
//!
//! Handlers only see this trait (behind `Arc<dyn TaskRepository>`), so a
//! real storage engine can replace the mock without touching the request
//! pipelines. Every operation takes validated value objects and answers with
//! a `Result` in the application error taxonomy.

use crate::domain::{AppError, NewTask, Task, TaskId, TaskUpdate};

/// Domain label attached to errors raised by repositories.
pub const REPOSITORY_DOMAIN: &str = "TaskRepository";

/// Repository trait for Task entities.
pub trait TaskRepository: Send + Sync {
    /// Finds a task by its ID.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no task has this ID, or a `Database`
    /// error if the backing store fails.
    fn find_by_id(&self, id: &TaskId) -> Result<Task, AppError>;

    /// Lists all tasks.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the backing store fails.
    fn find_all(&self) -> Result<Vec<Task>, AppError>;

    /// Creates a task with a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the backing store fails.
    fn create(&self, task: NewTask) -> Result<Task, AppError>;

    /// Replaces every field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no task has the update's ID, or a
    /// `Database` error if the backing store fails.
    fn update(&self, update: TaskUpdate) -> Result<Task, AppError>;
}
