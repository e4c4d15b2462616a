//! Task domain model.
//!
//! A task is a plain record of four newtyped fields. The newtypes carry no
//! validation of their own: request validators in `crate::api::request`
//! decide what may reach the domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Value Objects - Newtypes
// =============================================================================

/// Unique identifier for a task.
///
/// This is a newtype wrapper around UUID to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Generates a new `TaskId` with a randomly generated UUID (v4).
    ///
    /// **Note**: This is an impure function (side effect: random number generation).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// The title of a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskTitle(String);

impl TaskTitle {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskTitle {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Free-text description of a task. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskDescription(String);

impl TaskDescription {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TaskDescription {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Completion flag of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskCompleted(bool);

impl TaskCompleted {
    #[must_use]
    pub const fn new(completed: bool) -> Self {
        Self(completed)
    }

    #[must_use]
    pub const fn as_bool(self) -> bool {
        self.0
    }
}

impl From<bool> for TaskCompleted {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

// =============================================================================
// Task Entity
// =============================================================================

/// A task entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub task_id: TaskId,
    pub title: TaskTitle,
    pub description: TaskDescription,
    pub completed: TaskCompleted,
}

impl Task {
    /// Creates a task that has not been completed yet.
    #[must_use]
    pub const fn new(task_id: TaskId, title: TaskTitle, description: TaskDescription) -> Self {
        Self {
            task_id,
            title,
            description,
            completed: TaskCompleted::new(false),
        }
    }

    /// Returns a copy of this task with the given completion flag.
    #[must_use]
    pub fn with_completed(self, completed: TaskCompleted) -> Self {
        Self { completed, ..self }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Fields of a task that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: TaskTitle,
    pub description: TaskDescription,
}

/// Full replacement of an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub task_id: TaskId,
    pub title: TaskTitle,
    pub description: TaskDescription,
    pub completed: TaskCompleted,
}

impl From<TaskUpdate> for Task {
    fn from(update: TaskUpdate) -> Self {
        Self {
            task_id: update.task_id,
            title: update.title,
            description: update.description,
            completed: update.completed,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
