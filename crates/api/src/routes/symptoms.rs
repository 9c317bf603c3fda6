//! Symptom Routes

use axum::{extract::State, Json};
use biomarker_validator::SymptomLog;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SymptomResponse {
    pub symptoms: SymptomLog,
    pub recorded_at: DateTime<Utc>,
}

/// Validate a symptom log and echo it back
pub async fn record_symptoms(
    State(state): State<Arc<AppState>>,
    Json(symptoms): Json<SymptomLog>,
) -> Result<Json<SymptomResponse>, ApiError> {
    let result = state.validator.validate_symptoms(&symptoms);
    if !result.valid {
        return Err(ApiError::Validation(result.errors));
    }

    Ok(Json(SymptomResponse {
        symptoms,
        recorded_at: Utc::now(),
    }))
}
