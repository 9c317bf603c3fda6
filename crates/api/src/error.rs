//! API error responses

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use biomarker_validator::ValidationError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more input fields failed validation
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(vec![err])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                metrics::counter!("validation_failures_total").increment(1);
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                let body = json!({
                    "error": "validation_failed",
                    "messages": messages,
                    "details": errors,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}
