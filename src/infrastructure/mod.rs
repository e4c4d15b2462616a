//! Infrastructure module for data access.
//!
//! This module contains the repository trait consumed by the request
//! pipelines and the mock implementation served by default.

pub mod mock;
pub mod repository;

pub use mock::MockTaskRepository;
pub use repository::{REPOSITORY_DOMAIN, TaskRepository};
