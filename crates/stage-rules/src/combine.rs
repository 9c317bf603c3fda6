//! Model prediction + rule assessment combination

use crate::rules::StageAssessment;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Severity label for a classifier class id.
///
/// Class ids are looked up, never compared: id 1 is Late and id 2 is Mid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelStage {
    #[serde(rename = "Early Stage")]
    Early,
    #[serde(rename = "Mid Stage")]
    Mid,
    #[serde(rename = "Late Stage")]
    Late,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ModelStage {
    /// Look up the label for a class id
    pub fn from_class_id(class_id: i64) -> Self {
        match class_id {
            0 => ModelStage::Early,
            1 => ModelStage::Late,
            2 => ModelStage::Mid,
            _ => ModelStage::Unknown,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStage::Early => "Early Stage",
            ModelStage::Mid => "Mid Stage",
            ModelStage::Late => "Late Stage",
            ModelStage::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ModelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient-facing advice derived from the classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    UrgentReferral,
    FollowUpTesting,
    RoutineMonitoring,
}

impl Advisory {
    /// Select advice from the class id alone
    pub fn for_class_id(class_id: i64) -> Self {
        match class_id {
            1 => Advisory::UrgentReferral,
            2 => Advisory::FollowUpTesting,
            _ => Advisory::RoutineMonitoring,
        }
    }

    /// Get the message shown to the patient
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::UrgentReferral => {
                "Late-stage indicators detected. Contact an oncologist immediately."
            }
            Advisory::FollowUpTesting => "Moderate risk. Schedule further clinical tests.",
            Advisory::RoutineMonitoring => "Low risk. Maintain regular check-ups.",
        }
    }
}

/// Classifier label and rule-based assessment, presented side by side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedAssessment {
    /// Raw class id emitted by the classifier
    pub model_class_id: i64,
    /// Label looked up from the class id
    pub model_stage: ModelStage,
    /// Stage and risk from the LDHA rule table
    pub ldha_assessment: StageAssessment,
    pub advisory: Advisory,
    pub advisory_message: &'static str,
}

/// Combine a classifier class id with the LDHA rule assessment.
///
/// Total over all integers. The advisory depends only on `model_class_id`;
/// the rule assessment is carried alongside and never folded into it.
pub fn combine_assessment(model_class_id: i64, ldha_assessment: StageAssessment) -> CombinedAssessment {
    let model_stage = ModelStage::from_class_id(model_class_id);
    if model_stage == ModelStage::Unknown {
        warn!("Classifier emitted unexpected class id {}", model_class_id);
    }

    let advisory = Advisory::for_class_id(model_class_id);
    debug!(
        "Combined assessment: model={} rule={} advisory={:?}",
        model_stage, ldha_assessment.stage, advisory
    );

    CombinedAssessment {
        model_class_id,
        model_stage,
        ldha_assessment,
        advisory,
        advisory_message: advisory.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classify_by_ldha;

    #[test]
    fn test_label_table() {
        assert_eq!(ModelStage::from_class_id(0), ModelStage::Early);
        assert_eq!(ModelStage::from_class_id(1), ModelStage::Late);
        assert_eq!(ModelStage::from_class_id(2), ModelStage::Mid);
        assert_eq!(ModelStage::from_class_id(3), ModelStage::Unknown);
        assert_eq!(ModelStage::from_class_id(-1), ModelStage::Unknown);
    }

    #[test]
    fn test_late_stage_is_urgent_for_any_rule_stage() {
        for ldha in [0.0, 300.0, 450.0, 900.0] {
            let combined = combine_assessment(1, classify_by_ldha(ldha).unwrap());
            assert_eq!(combined.model_stage.as_str(), "Late Stage");
            assert_eq!(combined.advisory, Advisory::UrgentReferral);
        }
    }

    #[test]
    fn test_out_of_table_id_is_unknown() {
        let rule = classify_by_ldha(100.0).unwrap();
        let combined = combine_assessment(5, rule);
        assert_eq!(combined.model_stage, ModelStage::Unknown);
        assert_eq!(combined.advisory, Advisory::RoutineMonitoring);

        let extreme = combine_assessment(i64::MIN, rule);
        assert_eq!(extreme.model_stage.to_string(), "Unknown");
    }

    #[test]
    fn test_rule_assessment_kept_unchanged() {
        let rule = classify_by_ldha(650.0).unwrap();
        let combined = combine_assessment(0, rule);
        assert_eq!(combined.ldha_assessment, rule);
        assert_eq!(combined.advisory, Advisory::RoutineMonitoring);
        assert_eq!(combined.advisory_message, "Low risk. Maintain regular check-ups.");
    }

    #[test]
    fn test_mid_stage_follow_up() {
        let combined = combine_assessment(2, classify_by_ldha(10.0).unwrap());
        assert_eq!(combined.advisory, Advisory::FollowUpTesting);
    }

    #[test]
    fn test_serialized_labels() {
        let combined = combine_assessment(2, classify_by_ldha(410.0).unwrap());
        let json = serde_json::to_value(&combined).unwrap();
        assert_eq!(json["model_stage"], "Mid Stage");
        assert_eq!(json["advisory"], "follow_up_testing");
        assert_eq!(json["ldha_assessment"]["stage"], "III");
        assert_eq!(json["ldha_assessment"]["risk"], "High");
    }
}
