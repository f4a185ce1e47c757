//! Error handling - RFC 7807 compliant responses for uncaught failures.
//!
//! Persistence hiccups on the post paths never reach this type; handlers
//! catch them and convert to a redirect-back with an error flash. What lands
//! here is the not-found path (a missing id is a plain 404, never a flash)
//! and anything genuinely unexpected.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;
use std::fmt;

use quill_core::error::RepoError;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from repository errors, for paths that do not catch into a flash.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Connection(msg) | RepoError::Query(msg) | RepoError::Constraint(msg) => {
                tracing::error!("Database error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
