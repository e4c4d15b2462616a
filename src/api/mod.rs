//! HTTP layer: request validation, handlers, response writing and routing.

pub mod dto;
pub mod handlers;
pub mod request;
pub mod response;
pub mod routes;
pub mod sanitize;

pub use dto::{TaskListResponse, TaskResponse};
pub use handlers::AppState;
pub use request::{
    CreateTaskRequest, FieldError, FieldErrors, GetTaskRequest, ListTasksQuery, ListTasksRequest,
    UpdateTaskRequest,
};
pub use response::{ErrorResponse, status_for_error_type};
pub use routes::create_router;
