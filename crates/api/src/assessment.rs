//! Stage assessment for one request
//!
//! Validates the reading, runs the rule engine and the classifier side by
//! side, and ranks the explainer's attributions. Classifier and explainer
//! failures degrade to the rule-based result instead of failing the request.

use biomarker_validator::{BiomarkerReading, PatientContext, Validator, FEATURE_NAMES};
use inference_engine::InferenceEngine;
use serde::{Deserialize, Serialize};
use stage_rules::{
    classify_by_ldha, combine_assessment, rank_feature_contributions, resolve_feature_names,
    CombinedAssessment, FeatureContribution,
};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;

/// Class id recorded when the classifier could not produce one
pub const UNAVAILABLE_CLASS_ID: i64 = -1;

/// Body of an assessment request
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub patient: PatientContext,
    pub reading: BiomarkerReading,
}

/// Assessment returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub request_id: Uuid,
    pub patient: PatientContext,
    pub reading: BiomarkerReading,
    pub assessment: CombinedAssessment,
    /// Ranked by descending absolute attribution
    pub contributions: Vec<FeatureContribution>,
    /// True when the classifier failed and only the rule result is meaningful
    pub used_fallback: bool,
    pub latency_ms: u64,
}

/// Run a full assessment
pub fn assess(
    engine: &InferenceEngine,
    validator: &Validator,
    request: AssessmentRequest,
) -> Result<AssessmentResponse, ApiError> {
    let start = Instant::now();
    let AssessmentRequest { patient, reading } = request;
    let patient = patient.normalized();

    let result = validator.validate_reading(&reading);
    if !result.valid {
        debug!("Assessment rejected: {} validation error(s)", result.errors.len());
        return Err(ApiError::Validation(result.errors));
    }

    let ldha_assessment = classify_by_ldha(reading.ldha)?;
    let features = reading.features();

    let (class_id, used_fallback) = match engine.predict(&features) {
        Ok(result) => {
            metrics::histogram!("inference_latency_ms").record(result.latency_ms as f64);
            (result.class_id, false)
        }
        Err(e) => {
            warn!("Classifier failed, falling back to rule assessment: {}", e);
            metrics::counter!("assessment_fallbacks_total").increment(1);
            (UNAVAILABLE_CLASS_ID, true)
        }
    };

    let assessment = combine_assessment(class_id, ldha_assessment);
    let contributions = explain(engine, &features);

    metrics::counter!("assessments_total").increment(1);
    let latency_ms = start.elapsed().as_millis() as u64;
    let request_id = Uuid::new_v4();
    info!(
        "Assessment {}: model={} rule={} ({}) fallback={} in {}ms",
        request_id,
        assessment.model_stage,
        ldha_assessment.stage,
        ldha_assessment.risk,
        used_fallback,
        latency_ms
    );

    Ok(AssessmentResponse {
        request_id,
        patient,
        reading,
        assessment,
        contributions,
        used_fallback,
        latency_ms,
    })
}

/// Ranked attributions, empty when the explainer fails
fn explain(engine: &InferenceEngine, features: &[f64]) -> Vec<FeatureContribution> {
    match engine.explain(features) {
        Ok(scores) => {
            let names = resolve_feature_names(&FEATURE_NAMES, scores.len());
            rank_feature_contributions(&names, &scores).unwrap_or_default()
        }
        Err(e) => {
            warn!("Explainer failed, omitting contributions: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference_engine::{FeatureExplainer, InferenceError, LinearExplainer, StageClassifier};
    use stage_rules::{Advisory, ModelStage, Stage};
    use std::sync::Arc;

    struct BrokenClassifier;

    impl StageClassifier for BrokenClassifier {
        fn predict(&self, _features: &[f64]) -> Result<i64, InferenceError> {
            Err(InferenceError::InferenceFailed("session crashed".to_string()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    struct SevenScoreExplainer;

    impl FeatureExplainer for SevenScoreExplainer {
        fn explain(&self, _features: &[f64]) -> Result<Vec<f64>, InferenceError> {
            Ok(vec![0.1, -0.7, 0.2, 0.0, 0.05, 0.3, -0.01])
        }
    }

    fn request(ldha: f64) -> AssessmentRequest {
        AssessmentRequest {
            patient: PatientContext::default(),
            reading: BiomarkerReading::new(ldha, 120.0, 40.0, 20.0),
        }
    }

    #[test]
    fn test_mock_assessment() {
        let engine = InferenceEngine::mock();
        let response = assess(&engine, &Validator::default(), request(720.0)).unwrap();
        assert_eq!(response.assessment.ldha_assessment.stage, Stage::IV);
        assert_eq!(response.assessment.model_stage, ModelStage::Late);
        assert_eq!(response.assessment.advisory, Advisory::UrgentReferral);
        assert!(!response.used_fallback);
        assert_eq!(response.contributions.len(), 4);
        assert_eq!(response.contributions[0].name, "LDHA");
    }

    #[test]
    fn test_classifier_failure_falls_back() {
        let engine = InferenceEngine::new(
            Arc::new(BrokenClassifier),
            Arc::new(LinearExplainer::default()),
        );
        let response = assess(&engine, &Validator::default(), request(300.0)).unwrap();
        assert!(response.used_fallback);
        assert_eq!(response.assessment.model_class_id, UNAVAILABLE_CLASS_ID);
        assert_eq!(response.assessment.model_stage, ModelStage::Unknown);
        assert_eq!(response.assessment.ldha_assessment.stage, Stage::II);
    }

    #[test]
    fn test_explainer_cardinality_mismatch_uses_placeholders() {
        let engine = InferenceEngine::new(
            Arc::new(inference_engine::ThresholdClassifier::default()),
            Arc::new(SevenScoreExplainer),
        );
        let response = assess(&engine, &Validator::default(), request(100.0)).unwrap();
        assert_eq!(response.contributions.len(), 7);
        assert_eq!(response.contributions[0].name, "Feature 2");
        assert_eq!(response.contributions[1].name, "Feature 6");
    }

    #[test]
    fn test_blank_patient_name_still_assessed() {
        let engine = InferenceEngine::mock();
        let req = AssessmentRequest {
            patient: PatientContext {
                name: String::new(),
                ..Default::default()
            },
            reading: BiomarkerReading::new(300.0, 10.0, 10.0, 10.0),
        };
        let response = assess(&engine, &Validator::default(), req).unwrap();
        assert_eq!(response.patient.name, "Unknown");
        assert_eq!(response.assessment.ldha_assessment.stage, Stage::II);
    }

    #[test]
    fn test_patient_age_not_checked_during_assessment() {
        let engine = InferenceEngine::mock();
        let mut req = request(120.0);
        req.patient.age = Some(150);
        assert!(assess(&engine, &Validator::default(), req).is_ok());
    }

    #[test]
    fn test_out_of_range_reading_rejected() {
        let engine = InferenceEngine::mock();
        let mut req = request(-20.0);
        req.reading.ldhd = 1200.0;
        match assess(&engine, &Validator::default(), req) {
            Err(ApiError::Validation(errors)) => assert_eq!(errors.len(), 2),
            Ok(_) => panic!("expected validation failure"),
        }
    }
}
