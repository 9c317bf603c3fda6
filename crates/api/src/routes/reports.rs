//! Report Routes

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::assessment::{assess, AssessmentRequest};
use crate::error::ApiError;
use crate::report::{render_report, report_filename};
use crate::AppState;

/// Generate a downloadable plain-text report. Patient age is checked here
/// since it is printed on the report.
pub async fn create_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssessmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let patient_check = state.validator.validate_patient(&request.patient);
    if !patient_check.valid {
        return Err(ApiError::Validation(patient_check.errors));
    }

    let response = assess(&state.engine, &state.validator, request)?;
    let body = render_report(
        &response.patient,
        &response.reading,
        &response.assessment.ldha_assessment,
        &response.contributions,
    );

    let disposition = format!(
        "attachment; filename=\"{}\"",
        report_filename(&chrono::Local::now())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
