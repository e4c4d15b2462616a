//! Domain module for task management.
//!
//! This module contains the task model and the application error taxonomy.

pub mod error;
pub mod task;

pub use error::{AppError, BoxedCause, ErrorKind};
pub use task::{NewTask, Task, TaskCompleted, TaskDescription, TaskId, TaskTitle, TaskUpdate};
