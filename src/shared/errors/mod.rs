//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.
//! Messages shown to callers for business rule failures are localized
//! using the locale of the current request.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::shared::context::RequestContext;
use crate::shared::i18n::{Locale, MessageKey};

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("File '{0}' is not a jar archive")]
    NotJar(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Unreadable jar archive: {0}")]
    InvalidJar(String),

    #[error("Invalid driver state: {0}")]
    InvalidState(String),
}

impl DomainError {
    /// Catalogue key for the caller-facing message, if there is one
    #[must_use]
    pub fn message_key(&self) -> Option<MessageKey> {
        match self {
            Self::NotJar(_) => Some(MessageKey::NotJar),
            Self::InvalidFileName(_) => Some(MessageKey::InvalidFileName),
            Self::InvalidJar(_) => Some(MessageKey::InvalidJar),
            Self::InvalidState(_) => None,
        }
    }
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}

impl RepositoryError {
    /// Classify a failed write, surfacing unique key violations
    #[must_use]
    pub fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::UniqueViolation(db.constraint().unwrap_or("unique key").to_string())
            }
            _ => Self::Database(err),
        }
    }
}

/// Errors raised by driver file storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to store outside the driver directory: {0}")]
    InvalidPath(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(MessageKey),

    #[error("Forbidden: {0}")]
    Forbidden(MessageKey),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UseCaseError {
    /// Shorthand for a missing driver
    #[must_use]
    pub fn driver_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "Driver".to_string(),
            id: id.to_string(),
        }
    }

    /// Shorthand for a missing driver file
    #[must_use]
    pub fn driver_file_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "Driver file".to_string(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) | Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Domain(DomainError::InvalidState(_)) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Domain(_) => "INVALID_FILE",
            Self::Repository(_) | Self::Storage(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Caller-facing message in the given locale
    #[must_use]
    pub fn localized_message(&self, locale: Locale) -> String {
        match self {
            Self::Conflict(key) | Self::Forbidden(key) => key.translate(locale).to_string(),
            Self::Domain(err) => err
                .message_key()
                .map_or_else(|| err.to_string(), |key| key.translate(locale).to_string()),
            Self::Repository(_) | Self::Storage(_) | Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            Self::Validation(_) | Self::NotFound { .. } => self.to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ErrorResponse {
    /// Build an envelope stamped with the current request id
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>, details: Option<Vec<FieldError>>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details,
            },
            request_id: RequestContext::current().request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                match uc_error {
                    UseCaseError::Repository(err) => tracing::error!(error = %err, "Repository failure"),
                    UseCaseError::Storage(err) => tracing::error!(error = %err, "Driver file storage failure"),
                    UseCaseError::Internal(err) => tracing::error!(error = %err, "Internal failure"),
                    _ => {}
                }
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| {
                                let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                }
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                (
                    uc_error.status_code(),
                    uc_error.error_code(),
                    uc_error.localized_message(RequestContext::locale()),
                    details,
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None),
            ApiError::InvalidUuid(msg) => (StatusCode::BAD_REQUEST, "INVALID_UUID", msg.clone(), None),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone(), None),
        };

        (status, Json(ErrorResponse::new(code, message, details))).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::InvalidUuid(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
