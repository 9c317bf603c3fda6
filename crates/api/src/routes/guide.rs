//! LDHA Guide Routes

use axum::Json;
use serde::Serialize;
use stage_rules::{reference_guide, GuideRow, STAGE_THRESHOLDS};

/// Response for the guide endpoint
#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub rows: Vec<GuideRow>,
    /// Lower bounds of stages II to IV (mU/mL)
    pub thresholds: [f64; 3],
}

/// Get the LDHA interpretation guide
pub async fn get_guide() -> Json<GuideResponse> {
    Json(GuideResponse {
        rows: reference_guide().to_vec(),
        thresholds: STAGE_THRESHOLDS,
    })
}
