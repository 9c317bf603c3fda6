//! LDHA threshold reference table shown to clinicians

use crate::rules::{RiskLevel, Stage};
use serde::Serialize;

/// One row of the LDHA interpretation guide
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideRow {
    /// LDHA range label (mU/mL)
    pub ldha_range: &'static str,
    pub stage: Stage,
    /// Average tumor size (cm)
    pub avg_tumor_size_cm: f64,
    pub p_value: f64,
    pub risk: RiskLevel,
}

static GUIDE: [GuideRow; 4] = [
    GuideRow {
        ldha_range: "<250",
        stage: Stage::I,
        avg_tumor_size_cm: 2.1,
        p_value: 0.05,
        risk: RiskLevel::Low,
    },
    GuideRow {
        ldha_range: "250-400",
        stage: Stage::II,
        avg_tumor_size_cm: 2.8,
        p_value: 0.03,
        risk: RiskLevel::Moderate,
    },
    GuideRow {
        ldha_range: "400-600",
        stage: Stage::III,
        avg_tumor_size_cm: 4.2,
        p_value: 0.01,
        risk: RiskLevel::High,
    },
    GuideRow {
        ldha_range: ">600",
        stage: Stage::IV,
        avg_tumor_size_cm: 5.5,
        p_value: 0.001,
        risk: RiskLevel::VeryHigh,
    },
];

/// The interpretation guide, ordered Stage I to IV
pub fn reference_guide() -> &'static [GuideRow; 4] {
    &GUIDE
}
