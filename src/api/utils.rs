//! API utility functions
//!
//! Contains helper functions used by API handlers for request body handling
//! and input validation.

use crate::error::AppError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;

/// Unwrap a JSON body, reporting a malformed or missing body as a validation error
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Unwrap a path parameter, reporting an unparsable id as a validation error
pub fn path_param<T>(param: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    param
        .map(|Path(value)| value)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Unwrap query parameters, reporting a malformed query string as a validation error
pub fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    params
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Validate search query string
///
/// # Arguments
/// * `query` - Query string to validate, absent when the parameter was omitted
///
/// # Returns
/// * `Ok(&str)` - Query is present and non-blank
/// * `Err(AppError)` - Query is missing or blank
pub fn require_query(query: Option<&str>) -> Result<&str, AppError> {
    match query {
        Some(q) if !q.trim().is_empty() => Ok(q),
        _ => Err(AppError::Validation(
            "Name parameter is required.".to_string(),
        )),
    }
}
