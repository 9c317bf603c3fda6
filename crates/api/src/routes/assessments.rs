//! Assessment Routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::assessment::{assess, AssessmentRequest, AssessmentResponse};
use crate::error::ApiError;
use crate::AppState;

/// Assess one biomarker reading
pub async fn create_assessment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let response = assess(&state.engine, &state.validator, request)?;
    Ok(Json(response))
}
