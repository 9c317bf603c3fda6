//! Plain-text risk report

use biomarker_validator::{BiomarkerReading, PatientContext, FEATURE_NAMES};
use chrono::{DateTime, TimeZone};
use stage_rules::{FeatureContribution, StageAssessment};

pub const REPORT_TITLE: &str = "LDH Risk Assessment Report";

pub const DISCLAIMER: &str =
    "Disclaimer: This report is not a clinical diagnosis. Always consult a medical professional.";

/// Download file name for a report generated at `at`
pub fn report_filename<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("LDH_Report_%Y%m%d_%H%M%S.txt").to_string()
}

/// Render the report. Contributions are printed in the order given, to
/// three decimal places.
pub fn render_report(
    patient: &PatientContext,
    reading: &BiomarkerReading,
    assessment: &StageAssessment,
    contributions: &[FeatureContribution],
) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        String::new(),
        format!("Patient Name: {}", patient.name),
        format!("Age: {}", patient.age_label()),
        format!("Gender: {}", patient.gender),
        String::new(),
    ];

    for (label, value) in FEATURE_NAMES.iter().zip(reading.features()) {
        lines.push(format!("{}: {} mU/mL", label, value));
    }

    lines.push(String::new());
    lines.push(format!("LDHA Stage: {}", assessment.stage));
    lines.push(format!("Risk Assessment: {}", assessment.risk));
    lines.push(String::new());
    lines.push("SHAP Feature Importances:".to_string());
    for c in contributions {
        lines.push(format!("{}: {:.3}", c.name, c.score));
    }
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
