//! Request shapes and their validation.
//!
//! Every shape deserializes with all fields defaulted to the empty string so
//! that a missing field is reported by validation, not by the extractor.
//! `validate` sanitizes free text first, checks every field, and reports all
//! violations at once as a Validation [`AppError`] labelled with the shape name.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::sanitize;
use crate::domain::{
    AppError, NewTask, TaskCompleted, TaskDescription, TaskId, TaskTitle, TaskUpdate,
};

/// Minimum title length, in characters.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Canonical lowercase hyphenated UUID, version 4, RFC 4122 variant.
static UUID_V4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("Invalid UUID v4 regex pattern")
});

// =============================================================================
// Field Errors
// =============================================================================

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in one request shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", render(.0))]
pub struct FieldErrors(Vec<FieldError>);

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records the error of a failed check and passes a successful value on.
    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.0.push(error);
                None
            }
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `validated` if no check failed, or a Validation error for
    /// `domain` carrying every recorded violation.
    ///
    /// # Errors
    ///
    /// Returns a Validation [`AppError`] if any check failed.
    pub fn finish<T>(self, domain: &str, validated: Option<T>) -> Result<T, AppError> {
        match validated {
            Some(value) if self.is_empty() => Ok(value),
            _ => Err(AppError::validation(self, domain)),
        }
    }
}

// =============================================================================
// Field Rules
// =============================================================================

/// Validates a sanitized title: required, between 3 and 100 characters.
///
/// # Errors
///
/// Returns a [`FieldError`] for `title` if a rule is violated.
pub fn validate_title(title: String) -> Result<TaskTitle, FieldError> {
    let length = title.chars().count();

    if title.is_empty() {
        Err(FieldError::new("title", "is required"))
    } else if length < TITLE_MIN_CHARS {
        Err(FieldError::new(
            "title",
            format!("must be at least {TITLE_MIN_CHARS} characters"),
        ))
    } else if length > TITLE_MAX_CHARS {
        Err(FieldError::new(
            "title",
            format!("must not exceed {TITLE_MAX_CHARS} characters"),
        ))
    } else {
        Ok(TaskTitle::new(title))
    }
}

/// Validates a sanitized description: at most 500 characters, may be empty.
///
/// # Errors
///
/// Returns a [`FieldError`] for `description` if it is too long.
pub fn validate_description(description: String) -> Result<TaskDescription, FieldError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(FieldError::new(
            "description",
            format!("must not exceed {DESCRIPTION_MAX_CHARS} characters"),
        ));
    }
    Ok(TaskDescription::new(description))
}

/// Validates a task identifier: required, a version 4 UUID.
///
/// Only the canonical lowercase hyphenated form is accepted, so the
/// validated id renders back exactly as it was sent.
///
/// # Errors
///
/// Returns a [`FieldError`] for `id` if it is missing or not a v4 UUID.
pub fn validate_task_id(id: &str) -> Result<TaskId, FieldError> {
    if id.is_empty() {
        return Err(FieldError::new("id", "is required"));
    }

    Some(id)
        .filter(|id| UUID_V4_PATTERN.is_match(id))
        .and_then(|id| Uuid::parse_str(id).ok())
        .map(TaskId::from_uuid)
        .ok_or_else(|| FieldError::new("id", "must be a valid UUID v4"))
}

/// Interprets a completion flag: only the literal `"true"` is true.
#[must_use]
pub fn parse_completed(completed: &str) -> TaskCompleted {
    TaskCompleted::new(completed == "true")
}

// =============================================================================
// Request Shapes
// =============================================================================

/// Path input of `GET /api/v1/tasks/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetTaskRequest {
    pub id: String,
}

impl GetTaskRequest {
    pub const DOMAIN: &'static str = "GetTaskRequest";

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// # Errors
    ///
    /// Returns a Validation [`AppError`] if `id` is not a v4 UUID.
    pub fn validate(self) -> Result<TaskId, AppError> {
        let mut errors = FieldErrors::new();
        let task_id = errors.check(validate_task_id(&self.id));
        errors.finish(Self::DOMAIN, task_id)
    }
}

/// Query input of `GET /api/v1/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListTasksRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: String,
}

/// A validated list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTasksQuery {
    pub task_id: TaskId,
    pub title: TaskTitle,
    pub description: TaskDescription,
    pub completed: TaskCompleted,
}

impl ListTasksRequest {
    pub const DOMAIN: &'static str = "ListTasksRequest";

    /// # Errors
    ///
    /// Returns a Validation [`AppError`] listing every violated field.
    pub fn validate(self) -> Result<ListTasksQuery, AppError> {
        let mut errors = FieldErrors::new();
        let task_id = errors.check(validate_task_id(&self.id));
        let title = errors.check(validate_title(sanitize::strict(&self.title)));
        let description =
            errors.check(validate_description(sanitize::strict(&self.description)));
        let completed = parse_completed(&self.completed);

        let query = task_id
            .zip(title)
            .zip(description)
            .map(|((task_id, title), description)| ListTasksQuery {
                task_id,
                title,
                description,
                completed,
            });
        errors.finish(Self::DOMAIN, query)
    }
}

/// Form input of `POST /api/v1/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

impl CreateTaskRequest {
    pub const DOMAIN: &'static str = "CreateTaskRequest";

    /// # Errors
    ///
    /// Returns a Validation [`AppError`] listing every violated field.
    pub fn validate(self) -> Result<NewTask, AppError> {
        let mut errors = FieldErrors::new();
        let title = errors.check(validate_title(sanitize::strict(&self.title)));
        let description =
            errors.check(validate_description(sanitize::strict(&self.description)));

        let new_task = title
            .zip(description)
            .map(|(title, description)| NewTask { title, description });
        errors.finish(Self::DOMAIN, new_task)
    }
}

/// Form input of `PUT /api/v1/tasks` and `PUT /api/v1/tasks/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: String,
}

impl UpdateTaskRequest {
    pub const DOMAIN: &'static str = "UpdateTaskRequest";

    /// # Errors
    ///
    /// Returns a Validation [`AppError`] listing every violated field.
    pub fn validate(self) -> Result<TaskUpdate, AppError> {
        let mut errors = FieldErrors::new();
        let task_id = errors.check(validate_task_id(&self.id));
        let title = errors.check(validate_title(sanitize::strict(&self.title)));
        let description =
            errors.check(validate_description(sanitize::strict(&self.description)));
        let completed = parse_completed(&self.completed);

        let update = task_id
            .zip(title)
            .zip(description)
            .map(|((task_id, title), description)| TaskUpdate {
                task_id,
                title,
                description,
                completed,
            });
        errors.finish(Self::DOMAIN, update)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use rstest::rstest;

    const VALID_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn field_errors(error: &AppError) -> Vec<FieldError> {
        error
            .cause()
            .and_then(|cause| cause.downcast_ref::<FieldErrors>())
            .map(|errors| errors.errors().to_vec())
            .unwrap_or_default()
    }

    fn fields(error: &AppError) -> Vec<String> {
        field_errors(error)
            .into_iter()
            .map(|error| error.field)
            .collect()
    }

    #[rstest]
    #[case("abc".to_string(), true)]
    #[case("a".repeat(100), true)]
    #[case("ab".to_string(), false)]
    #[case(String::new(), false)]
    #[case("a".repeat(101), false)]
    #[case("äöü".to_string(), true)]
    fn title_bounds(#[case] title: String, #[case] valid: bool) {
        assert_eq!(validate_title(title).is_ok(), valid);
    }

    #[rstest]
    fn empty_title_is_reported_as_required() {
        let error = validate_title(String::new()).unwrap_err();
        assert_eq!(error, FieldError::new("title", "is required"));
    }

    #[rstest]
    #[case(String::new(), true)]
    #[case("d".repeat(500), true)]
    #[case("d".repeat(501), false)]
    fn description_bounds(#[case] description: String, #[case] valid: bool) {
        assert_eq!(validate_description(description).is_ok(), valid);
    }

    #[rstest]
    #[case(VALID_ID, true)]
    #[case("invalid", false)]
    #[case("", false)]
    #[case("550e8400-e29b-11d4-a716-446655440000", false)]
    #[case("550E8400-E29B-41D4-A716-446655440000", false)]
    #[case("550e8400e29b41d4a716446655440000", false)]
    #[case("urn:uuid:550e8400-e29b-41d4-a716-446655440000", false)]
    #[case("{550e8400-e29b-41d4-a716-446655440000}", false)]
    #[case("550e8400-e29b-41d4-0716-446655440000", false)]
    #[case("550e8400-e29b-41d4-c716-446655440000", false)]
    #[case(" 550e8400-e29b-41d4-a716-446655440000", false)]
    fn task_id_must_be_canonical_uuid_v4(#[case] id: &str, #[case] valid: bool) {
        assert_eq!(validate_task_id(id).is_ok(), valid);
    }

    #[rstest]
    fn validated_id_renders_as_sent() {
        let task_id = validate_task_id(VALID_ID).unwrap();
        assert_eq!(task_id.to_string(), VALID_ID);
    }

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    #[case("TRUE", false)]
    #[case("1", false)]
    #[case("", false)]
    fn only_literal_true_completes(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(parse_completed(input).as_bool(), expected);
    }

    #[rstest]
    fn get_request_returns_typed_id() {
        let task_id = GetTaskRequest::new(VALID_ID).validate().unwrap();
        assert_eq!(task_id.to_string(), VALID_ID);
    }

    #[rstest]
    fn get_request_labels_errors_with_shape_name() {
        let error = GetTaskRequest::new("invalid").validate().unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.domain(), GetTaskRequest::DOMAIN);
        assert_eq!(fields(&error), ["id"]);
    }

    #[rstest]
    fn create_request_sanitizes_before_checking() {
        let request = CreateTaskRequest {
            title: "  <script>ab</script>  ".to_string(),
            description: String::new(),
        };

        let error = request.validate().unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(
            field_errors(&error),
            [FieldError::new("title", "is required")]
        );
    }

    #[rstest]
    fn create_request_stores_sanitized_text() {
        let request = CreateTaskRequest {
            title: "<b>New</b> Task".to_string(),
            description: "Fish & Chips".to_string(),
        };

        let new_task = request.validate().unwrap();

        assert_eq!(new_task.title.as_str(), "New Task");
        assert_eq!(new_task.description.as_str(), "Fish &amp; Chips");
    }

    #[rstest]
    fn update_request_collects_every_violation() {
        let request = UpdateTaskRequest {
            id: String::new(),
            title: "ab".to_string(),
            description: "d".repeat(501),
            completed: "true".to_string(),
        };

        let error = request.validate().unwrap_err();

        assert_eq!(error.domain(), UpdateTaskRequest::DOMAIN);
        assert_eq!(fields(&error), ["id", "title", "description"]);
        assert_eq!(
            error.message(),
            "id: is required; title: must be at least 3 characters; \
             description: must not exceed 500 characters"
        );
    }

    #[rstest]
    fn update_request_without_id_fails_even_when_rest_is_valid() {
        let request = UpdateTaskRequest {
            id: String::new(),
            title: "Updated Task".to_string(),
            description: "Updated Description".to_string(),
            completed: "true".to_string(),
        };

        let error = request.validate().unwrap_err();

        assert_eq!(fields(&error), ["id"]);
    }

    #[rstest]
    fn update_request_yields_full_replacement() {
        let request = UpdateTaskRequest {
            id: VALID_ID.to_string(),
            title: "Updated Task".to_string(),
            description: "Updated Description".to_string(),
            completed: "true".to_string(),
        };

        let update = request.validate().unwrap();

        assert_eq!(update.task_id.to_string(), VALID_ID);
        assert_eq!(update.title.as_str(), "Updated Task");
        assert!(update.completed.as_bool());
    }

    #[rstest]
    fn list_request_requires_id_and_title() {
        let error = ListTasksRequest::default().validate().unwrap_err();

        assert_eq!(error.domain(), ListTasksRequest::DOMAIN);
        assert_eq!(fields(&error), ["id", "title"]);
    }

    #[rstest]
    fn list_request_accepts_complete_query() {
        let request = ListTasksRequest {
            id: VALID_ID.to_string(),
            title: "Sample".to_string(),
            description: String::new(),
            completed: "false".to_string(),
        };

        let query = request.validate().unwrap();

        assert_eq!(query.title.as_str(), "Sample");
        assert!(!query.completed.as_bool());
    }
}
