//! Routing definitions for the Task API.

use std::time::Duration;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, ROUTER_DOMAIN, create_task, get_task, health_check, list_tasks, route_not_found,
    update_task, update_task_from_form,
};
use crate::domain::AppError;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the router with every route and middleware layer.
///
/// Requests running longer than `request_timeout` are answered with
/// `408 Request Timeout`. Unknown paths and handler panics are answered with
/// the JSON error body. Every response carries an `x-request-id` header,
/// copied from the request or generated as a UUID.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use task_api::api::{AppState, create_router};
///
/// let router = create_router(AppState::with_mock_repository(), Duration::from_secs(15));
/// # let _ = router;
/// ```
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let api_v1 = Router::new()
        .route(
            "/tasks",
            get(list_tasks).post(create_task).put(update_task_from_form),
        )
        .route("/tasks/{id}", get(get_task).put(update_task));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1)
        .fallback(route_not_found)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(create_cors_layer())
        .with_state(state)
}

fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "Request handler panicked");

    AppError::internal("request handler panicked", ROUTER_DOMAIN).into_response()
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn router() -> Router {
        create_router(AppState::with_mock_repository(), Duration::from_secs(5))
    }

    async fn explode() -> &'static str {
        panic!("exploded on purpose")
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = router()
            .oneshot(Request::get("/api/v2/tasks").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["type"], "NotFoundError");
        assert_eq!(body["domain"], ROUTER_DOMAIN);
    }

    #[rstest]
    #[tokio::test]
    async fn handler_panic_renders_internal_error_body() {
        let router = Router::new()
            .route("/explode", get(explode))
            .layer(CatchPanicLayer::custom(panic_response));

        let response = router
            .oneshot(Request::get("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "message": "request handler panicked",
                "type": "InternalServerError",
                "domain": "Router",
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let response = router()
            .oneshot(
                Request::delete("/api/v1/tasks/550e8400-e29b-41d4-a716-446655440000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[rstest]
    #[tokio::test]
    async fn caller_request_id_is_propagated() {
        let response = router()
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "trace-me-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "trace-me-42");
    }
}
