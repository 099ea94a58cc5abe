//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for any unexpected failure
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request input is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// Unknown principal or bad credential
    #[error("{0}")]
    Unauthorized(String),

    /// A referenced record (e.g. a manager id) does not exist
    #[error("{0}")]
    InvalidReference(String),

    /// No record matched the request
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::services::CredentialError> for AppError {
    fn from(err: crate::services::CredentialError) -> Self {
        AppError::Internal(err.into())
    }
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled error while processing request");
                GENERIC_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
