//! HTTP handlers for the Task API.
//!
//! Each handler is one `Result` pipeline: validate the raw input, call the
//! repository, shape the view model, then fold both channels into a
//! response. Errors are never recovered inside the chain; they reach the
//! fold unchanged and are rendered by `AppError`'s `IntoResponse`.

use std::sync::Arc;

use axum::{
    Form,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, PathRejection, QueryRejection},
    },
    http::Uri,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use super::dto::{TaskListResponse, TaskResponse};
use super::request::{CreateTaskRequest, GetTaskRequest, ListTasksRequest, UpdateTaskRequest};
use super::response;
use crate::domain::{AppError, TaskId, TaskUpdate};
use crate::infrastructure::{MockTaskRepository, TaskRepository};
use crate::pipeline::{ResultPipeline, pipe3, pipe4};

/// Domain label of errors raised by routing itself.
pub const ROUTER_DOMAIN: &str = "Router";

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TaskRepository + Send + Sync>,
}

impl AppState {
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// State backed by a [`MockTaskRepository`].
    #[must_use]
    pub fn with_mock_repository() -> Self {
        Self::new(Arc::new(MockTaskRepository::new()))
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/v1/tasks`
///
/// The query must validate even though the listing ignores it.
#[allow(clippy::unused_async)]
pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListTasksRequest>, QueryRejection>,
) -> Response {
    pipe3(
        rejected_as_bad_request(query, ListTasksRequest::DOMAIN),
        |Query(request)| request.validate(),
        |_query| state.repository.find_all(),
        TaskListResponse::from,
    )
    .fold(response::ok, IntoResponse::into_response)
}

/// `GET /api/v1/tasks/{id}`
#[allow(clippy::unused_async)]
pub async fn get_task(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    rejected_as_bad_request(path, GetTaskRequest::DOMAIN)
        .flat_map(|Path(id)| GetTaskRequest::new(id).validate())
        .flat_map(|task_id| state.repository.find_by_id(&task_id))
        .map(TaskResponse::from)
        .fold(response::ok, IntoResponse::into_response)
}

/// `POST /api/v1/tasks`
#[allow(clippy::unused_async)]
pub async fn create_task(
    State(state): State<AppState>,
    form: Result<Form<CreateTaskRequest>, FormRejection>,
) -> Response {
    pipe3(
        rejected_as_bad_request(form, CreateTaskRequest::DOMAIN),
        |Form(request)| request.validate(),
        |new_task| state.repository.create(new_task),
        TaskResponse::from,
    )
    .fold(response::created, IntoResponse::into_response)
}

/// `PUT /api/v1/tasks/{id}`
///
/// The form must carry the same id as the path.
#[allow(clippy::unused_async)]
pub async fn update_task(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    form: Result<Form<UpdateTaskRequest>, FormRejection>,
) -> Response {
    let input = rejected_as_bad_request(path, UpdateTaskRequest::DOMAIN).flat_map(|Path(id)| {
        rejected_as_bad_request(form, UpdateTaskRequest::DOMAIN)
            .map(|Form(request)| (id, request))
    });

    pipe4(
        input,
        |(id, request)| request.validate().map(|update| (id, update)),
        |(id, update)| ensure_path_matches(&id, update),
        |update| state.repository.update(update),
        TaskResponse::from,
    )
    .fold(response::ok, IntoResponse::into_response)
}

/// `PUT /api/v1/tasks`
///
/// The form id is authoritative.
#[allow(clippy::unused_async)]
pub async fn update_task_from_form(
    State(state): State<AppState>,
    form: Result<Form<UpdateTaskRequest>, FormRejection>,
) -> Response {
    pipe3(
        rejected_as_bad_request(form, UpdateTaskRequest::DOMAIN),
        |Form(request)| request.validate(),
        |update| state.repository.update(update),
        TaskResponse::from,
    )
    .fold(response::ok, IntoResponse::into_response)
}

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health_check() -> &'static str {
    "OK"
}

/// Answers requests that match no route.
#[allow(clippy::unused_async)]
pub async fn route_not_found(uri: Uri) -> Response {
    AppError::not_found(format!("no route for {}", uri.path()), ROUTER_DOMAIN).into_response()
}

/// Turns an extractor rejection into a BadRequest error for `domain`.
fn rejected_as_bad_request<T, R>(extraction: Result<T, R>, domain: &str) -> Result<T, AppError>
where
    R: std::error::Error + Send + Sync + 'static,
{
    extraction.map_err(|rejection| AppError::bad_request(rejection, domain))
}

fn ensure_path_matches(path_id: &str, update: TaskUpdate) -> Result<TaskUpdate, AppError> {
    let path_task_id = Uuid::parse_str(path_id).ok().map(TaskId::from_uuid);

    if path_task_id == Some(update.task_id) {
        Ok(update)
    } else {
        Err(AppError::bad_request(
            format!(
                "path id '{path_id}' does not match form id '{}'",
                update.task_id
            ),
            UpdateTaskRequest::DOMAIN,
        ))
    }
}
