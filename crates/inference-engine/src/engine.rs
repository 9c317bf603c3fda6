//! Inference facade

use crate::classifier::{StageClassifier, ThresholdClassifier};
use crate::explainer::{FeatureExplainer, LinearExplainer};
use crate::onnx::OnnxClassifier;
use crate::InferenceError;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Result of one classifier call
#[derive(Debug, Clone, Serialize)]
pub struct InferenceResult {
    /// Raw class id from the classifier
    pub class_id: i64,
    /// Inference latency in milliseconds
    pub latency_ms: u64,
}

/// Holds the classifier and explainer behind their capability traits
#[derive(Clone)]
pub struct InferenceEngine {
    classifier: Arc<dyn StageClassifier>,
    explainer: Arc<dyn FeatureExplainer>,
}

impl InferenceEngine {
    /// Create an engine from any classifier/explainer pair
    pub fn new(classifier: Arc<dyn StageClassifier>, explainer: Arc<dyn FeatureExplainer>) -> Self {
        info!("Creating inference engine with classifier: {}", classifier.name());
        Self {
            classifier,
            explainer,
        }
    }

    /// Create an engine using the deterministic development classifier
    pub fn mock() -> Self {
        Self::new(
            Arc::new(ThresholdClassifier::default()),
            Arc::new(LinearExplainer::default()),
        )
    }

    /// Load an ONNX classifier if a path is given, otherwise use the
    /// threshold classifier. `explainer` should describe the loaded model.
    pub fn from_model_path(
        path: Option<&Path>,
        input_width: usize,
        explainer: Arc<dyn FeatureExplainer>,
    ) -> Result<Self, InferenceError> {
        let classifier: Arc<dyn StageClassifier> = match path {
            Some(path) => Arc::new(OnnxClassifier::load(path, input_width)?),
            None => {
                debug!("No model path configured, running in mock mode");
                Arc::new(ThresholdClassifier::default())
            }
        };
        Ok(Self::new(classifier, explainer))
    }

    /// Run the classifier on a feature vector
    pub fn predict(&self, features: &[f64]) -> Result<InferenceResult, InferenceError> {
        let start = Instant::now();
        let class_id = self.classifier.predict(features)?;
        let latency_ms = start.elapsed().as_millis() as u64;
        debug!("Inference completed in {}ms", latency_ms);

        Ok(InferenceResult {
            class_id,
            latency_ms,
        })
    }

    /// Run the explainer on a feature vector
    pub fn explain(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        self.explainer.explain(features)
    }

    /// Get classifier name
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }
}
