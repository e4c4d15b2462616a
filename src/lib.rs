//! # task-api
//!
//! A small task-management HTTP API whose handlers are built as `Result`
//! pipelines: validate the raw request, call the repository, shape the
//! response body, then fold success and failure into an HTTP response.
//!
//! ## Modules
//!
//! - [`pipeline`]: `flat_map` / `fold`, `combine` and the `pipe2`..`pipe5`
//!   helpers over the standard `Result`
//! - [`domain`]: the task model and the closed [`domain::ErrorKind`] taxonomy
//! - [`infrastructure`]: the [`infrastructure::TaskRepository`] trait and its mock
//! - [`api`]: sanitization, request validation, handlers, response writing
//!   and routing
//! - [`config`], [`telemetry`], [`server`]: start-up glue for the binary
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use task_api::api::{AppState, create_router};
//!
//! let router = create_router(AppState::with_mock_repository(), Duration::from_secs(15));
//! # let _ = router;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod pipeline;
pub mod server;
pub mod telemetry;

pub use api::{AppState, create_router};
pub use config::{AppConfig, ConfigError, LogFormat, ServerConfig};
pub use domain::{AppError, ErrorKind};
pub use server::{Server, ServerError};
