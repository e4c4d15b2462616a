//! Mock implementation of [`TaskRepository`].
//!
//! Answers every call with canned or freshly generated records and keeps
//! no state between calls: a created task cannot be fetched afterwards and
//! an update is simply echoed back.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{
    AppError, NewTask, Task, TaskCompleted, TaskDescription, TaskId, TaskTitle, TaskUpdate,
};
use crate::infrastructure::{REPOSITORY_DOMAIN, TaskRepository};
use crate::pipeline::combine;

const SAMPLE_TITLE: &str = "Sample Task";
const SAMPLE_DESCRIPTION: &str = "This is a sample task description.";

/// A record returned by [`TaskRepository::find_all`].
struct CannedTask {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    completed: bool,
}

impl CannedTask {
    fn to_task(&self) -> Result<Task, AppError> {
        let uuid = Uuid::parse_str(self.id).map_err(|error| {
            AppError::internal(
                format!("canned task id '{}' is not a UUID: {error}", self.id),
                REPOSITORY_DOMAIN,
            )
        })?;

        Ok(Task::new(
            TaskId::from_uuid(uuid),
            TaskTitle::new(self.title),
            TaskDescription::new(self.description),
        )
        .with_completed(TaskCompleted::new(self.completed)))
    }
}

static CANNED_TASKS: [CannedTask; 3] = [
    CannedTask {
        id: "3f1c2b9e-7d4a-4c8e-9b1a-2e5f6d7c8a90",
        title: "Write project proposal",
        description: "Draft the proposal and circulate it for review.",
        completed: true,
    },
    CannedTask {
        id: "8a7b6c5d-4e3f-4a1b-8c2d-9e0f1a2b3c4d",
        title: "Review pull requests",
        description: "",
        completed: false,
    },
    CannedTask {
        id: "c0ffee00-1234-4abc-8def-0123456789ab",
        title: "Plan sprint",
        description: "Pick the stories for the next two weeks.",
        completed: false,
    },
];

/// Stateless stand-in for a storage engine.
#[derive(Debug, Clone, Default)]
pub struct MockTaskRepository {
    missing: HashSet<TaskId>,
}

impl MockTaskRepository {
    /// Creates a mock that finds every task it is asked for.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that answers `NotFound` for the given IDs.
    #[must_use]
    pub fn with_missing(ids: impl IntoIterator<Item = TaskId>) -> Self {
        Self {
            missing: ids.into_iter().collect(),
        }
    }
}

impl TaskRepository for MockTaskRepository {
    fn find_by_id(&self, id: &TaskId) -> Result<Task, AppError> {
        if self.missing.contains(id) {
            return Err(AppError::not_found(
                format!("task {id} not found"),
                REPOSITORY_DOMAIN,
            ));
        }

        tracing::debug!(task_id = %id, "Serving canned task");
        Ok(Task::new(
            *id,
            TaskTitle::new(SAMPLE_TITLE),
            TaskDescription::new(SAMPLE_DESCRIPTION),
        ))
    }

    fn find_all(&self) -> Result<Vec<Task>, AppError> {
        combine(CANNED_TASKS.iter().map(CannedTask::to_task))
    }

    fn create(&self, task: NewTask) -> Result<Task, AppError> {
        let task = Task::new(TaskId::generate(), task.title, task.description);
        tracing::debug!(task_id = %task.task_id, "Generated task");
        Ok(task)
    }

    fn update(&self, update: TaskUpdate) -> Result<Task, AppError> {
        if self.missing.contains(&update.task_id) {
            return Err(AppError::not_found(
                format!("task {} not found", update.task_id),
                REPOSITORY_DOMAIN,
            ));
        }

        Ok(Task::from(update))
    }
}

// =============================================================================
// Tests
// =============================================================================
