//! Response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// JSON view of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.task_id.to_string(),
            title: task.title.to_string(),
            description: task.description.to_string(),
            completed: task.completed.as_bool(),
        }
    }
}

/// JSON body of `GET /api/v1/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
}

impl From<Vec<Task>> for TaskListResponse {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(TaskResponse::from).collect(),
        }
    }
}
