//! Response writer.
//!
//! Success bodies are serialized as JSON with the status chosen by the
//! handler. Errors become [`ErrorResponse`] bodies whose status is decided
//! by the error kind alone.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, ErrorKind};

/// Message reported for error type names outside the known set.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "unexpected error";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub domain: String,
}

impl ErrorResponse {
    /// Status for this body's `type`; unknown names map to 500.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        status_for_error_type(&self.error_type)
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            message: error.message(),
            error_type: error.kind().type_name().to_string(),
            domain: error.domain().to_string(),
        }
    }
}

/// Resolves the status for an error type name.
///
/// # Examples
///
/// ```rust
/// use axum::http::StatusCode;
/// use task_api::api::response::status_for_error_type;
///
/// assert_eq!(status_for_error_type("NotFoundError"), StatusCode::NOT_FOUND);
/// assert_eq!(status_for_error_type("TeapotError"), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[must_use]
pub fn status_for_error_type(name: &str) -> StatusCode {
    ErrorKind::from_type_name(name).map_or(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::status)
}

/// Builds the error body for a type name that may be outside the known set.
#[must_use]
pub fn error_body_for_type(name: &str, domain: &str) -> ErrorResponse {
    let message = ErrorKind::from_type_name(name)
        .map_or(UNEXPECTED_ERROR_MESSAGE, ErrorKind::default_message);
    ErrorResponse {
        message: message.to_string(),
        error_type: name.to_string(),
        domain: domain.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse::from(&self);

        if status.is_server_error() {
            tracing::error!(
                error.kind = %self.kind(),
                error.domain = %self.domain(),
                error.message = %body.message,
                "Request failed"
            );
        } else {
            tracing::debug!(
                error.kind = %self.kind(),
                error.domain = %self.domain(),
                error.message = %body.message,
                "Request rejected"
            );
        }

        (status, Json(body)).into_response()
    }
}

/// 200 with a JSON body.
pub fn ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// 201 with a JSON body.
pub fn created<T: Serialize>(body: T) -> Response {
    (StatusCode::CREATED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case("ValidationError", StatusCode::BAD_REQUEST)]
    #[case("BadRequestError", StatusCode::BAD_REQUEST)]
    #[case("NotFoundError", StatusCode::NOT_FOUND)]
    #[case("UnauthorizedError", StatusCode::UNAUTHORIZED)]
    #[case("ForbiddenError", StatusCode::FORBIDDEN)]
    #[case("ConflictError", StatusCode::CONFLICT)]
    #[case("DatabaseError", StatusCode::INTERNAL_SERVER_ERROR)]
    #[case("InternalServerError", StatusCode::INTERNAL_SERVER_ERROR)]
    #[case("TeapotError", StatusCode::INTERNAL_SERVER_ERROR)]
    #[case("", StatusCode::INTERNAL_SERVER_ERROR)]
    fn type_names_map_to_status(#[case] name: &str, #[case] expected: StatusCode) {
        assert_eq!(status_for_error_type(name), expected);
        assert_eq!(error_body_for_type(name, "Test").status(), expected);
    }

    #[rstest]
    fn unknown_type_gets_unexpected_message() {
        let body = error_body_for_type("TeapotError", "Brewer");

        assert_eq!(body.message, UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(body.error_type, "TeapotError");
        assert_eq!(body.domain, "Brewer");
    }

    #[rstest]
    #[tokio::test]
    async fn app_error_renders_structured_body() {
        let response = AppError::not_found("task 42 not found", "TaskRepository").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "message": "task 42 not found",
                "type": "NotFoundError",
                "domain": "TaskRepository",
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn error_without_cause_uses_default_message() {
        let response = AppError::new(ErrorKind::Database, "TaskRepository").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "database error");
        assert_eq!(body["type"], "DatabaseError");
    }

    #[rstest]
    #[tokio::test]
    async fn created_sets_status_and_content_type() {
        let response = created(serde_json::json!({ "id": "abc" }));

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(body_json(response).await["id"], "abc");
    }
}
