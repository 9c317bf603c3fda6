//! LDHA threshold rules

use biomarker_validator::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lower bounds (mU/mL) of stages II, III and IV. Each bound belongs to the
/// higher stage.
pub const STAGE_THRESHOLDS: [f64; 3] = [250.0, 400.0, 600.0];

/// Clinical progression stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    I,
    II,
    III,
    IV,
}

impl Stage {
    /// Risk level paired with this stage
    pub fn risk(&self) -> RiskLevel {
        match self {
            Stage::I => RiskLevel::Low,
            Stage::II => RiskLevel::Moderate,
            Stage::III => RiskLevel::High,
            Stage::IV => RiskLevel::VeryHigh,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::I => write!(f, "Stage I"),
            Stage::II => write!(f, "Stage II"),
            Stage::III => write!(f, "Stage III"),
            Stage::IV => write!(f, "Stage IV"),
        }
    }
}

/// Categorical risk derived from stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low risk"),
            RiskLevel::Moderate => write!(f, "Moderate risk"),
            RiskLevel::High => write!(f, "High risk"),
            RiskLevel::VeryHigh => write!(f, "Very High risk"),
        }
    }
}

/// Rule-based stage and risk for one LDHA value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageAssessment {
    pub stage: Stage,
    pub risk: RiskLevel,
}

impl StageAssessment {
    fn of(stage: Stage) -> Self {
        Self {
            stage,
            risk: stage.risk(),
        }
    }
}

/// Classify an LDHA concentration into a stage and risk level.
///
/// Negative and NaN inputs are rejected; concentrations cannot be negative.
/// There is no upper ceiling here, range limits belong to the validator.
pub fn classify_by_ldha(ldha: f64) -> Result<StageAssessment, ValidationError> {
    if ldha.is_nan() {
        return Err(ValidationError::NotFinite { field: "ldha" });
    }
    if ldha < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "ldha",
            value: ldha,
            min: 0.0,
            max: f64::INFINITY,
        });
    }

    let [stage_ii, stage_iii, stage_iv] = STAGE_THRESHOLDS;
    let stage = if ldha < stage_ii {
        Stage::I
    } else if ldha < stage_iii {
        Stage::II
    } else if ldha < stage_iv {
        Stage::III
    } else {
        Stage::IV
    };

    debug!("LDHA {} classified as {} ({})", ldha, stage, stage.risk());
    Ok(StageAssessment::of(stage))
}
