//! Application error taxonomy.
//!
//! Every failure in a request pipeline is an [`AppError`]: one [`ErrorKind`]
//! out of a closed set, the label of the domain that raised it, and an
//! optional underlying cause. The kind alone decides the HTTP status; see
//! [`ErrorKind::status`].

use std::error::Error as StdError;
use std::fmt;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed cause carried by an [`AppError`].
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

// =============================================================================
// Error Kind
// =============================================================================

/// The closed set of error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "NotFoundError")]
    NotFound,
    #[serde(rename = "ValidationError")]
    Validation,
    #[serde(rename = "UnauthorizedError")]
    Unauthorized,
    #[serde(rename = "InternalServerError")]
    Internal,
    #[serde(rename = "BadRequestError")]
    BadRequest,
    #[serde(rename = "ConflictError")]
    Conflict,
    #[serde(rename = "ForbiddenError")]
    Forbidden,
    #[serde(rename = "DatabaseError")]
    Database,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::NotFound,
        Self::Validation,
        Self::Unauthorized,
        Self::Internal,
        Self::BadRequest,
        Self::Conflict,
        Self::Forbidden,
        Self::Database,
    ];

    /// The name used as `type` in error response bodies.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::NotFound => "NotFoundError",
            Self::Validation => "ValidationError",
            Self::Unauthorized => "UnauthorizedError",
            Self::Internal => "InternalServerError",
            Self::BadRequest => "BadRequestError",
            Self::Conflict => "ConflictError",
            Self::Forbidden => "ForbiddenError",
            Self::Database => "DatabaseError",
        }
    }

    /// Looks a kind up by its [`type_name`](Self::type_name).
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// The HTTP status this kind is reported with.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Validation | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Database | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message used when an error carries no cause.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::NotFound => "resource not found",
            Self::Validation => "validation failed",
            Self::Unauthorized => "unauthorized",
            Self::Internal => "internal server error",
            Self::BadRequest => "bad request",
            Self::Conflict => "conflict",
            Self::Forbidden => "forbidden",
            Self::Database => "database error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.type_name())
    }
}

// =============================================================================
// App Error
// =============================================================================

/// A failure raised somewhere in a request pipeline.
///
/// `Display` renders `"<type name> in <domain>: <message>"`.
#[derive(Debug, Error)]
pub struct AppError {
    kind: ErrorKind,
    domain: String,
    #[source]
    cause: Option<BoxedCause>,
}

impl AppError {
    /// Creates an error without a cause.
    #[must_use]
    pub fn new(kind: ErrorKind, domain: impl Into<String>) -> Self {
        Self {
            kind,
            domain: domain.into(),
            cause: None,
        }
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxedCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[must_use]
    pub fn not_found(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, domain).with_cause(cause)
    }

    #[must_use]
    pub fn validation(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, domain).with_cause(cause)
    }

    #[must_use]
    pub fn unauthorized(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, domain).with_cause(cause)
    }

    #[must_use]
    pub fn internal(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, domain).with_cause(cause)
    }

    #[must_use]
    pub fn bad_request(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, domain).with_cause(cause)
    }

    #[must_use]
    pub fn conflict(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, domain).with_cause(cause)
    }

    #[must_use]
    pub fn forbidden(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, domain).with_cause(cause)
    }

    #[must_use]
    pub fn database(cause: impl Into<BoxedCause>, domain: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, domain).with_cause(cause)
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Label of the validator or operation that raised the error.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Human-readable message: the cause's text, or the kind's default.
    #[must_use]
    pub fn message(&self) -> String {
        self.cause.as_ref().map_or_else(
            || self.kind.default_message().to_string(),
            ToString::to_string,
        )
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} in {}: {}", self.kind, self.domain, self.message())
    }
}

// =============================================================================
// Tests
// =============================================================================
