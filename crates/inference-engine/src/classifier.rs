//! Stage classifier capability

use crate::{check_width, InferenceError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Anything that maps a feature vector to a stage class id.
///
/// Trained models emit 0 (early), 1 (late) or 2 (mid), but callers must
/// tolerate any id.
pub trait StageClassifier: Send + Sync {
    /// Predict the class id for one feature vector
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError>;

    /// Short name for logs and health output
    fn name(&self) -> &str;
}

/// Deterministic weighted-threshold classifier.
///
/// Stands in for a trained model during development and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdClassifier {
    /// Per-feature weights, LDHA first
    pub weights: [f64; 4],
    /// Weighted load at or above which the mid class is returned
    pub mid_threshold: f64,
    /// Weighted load at or above which the late class is returned
    pub late_threshold: f64,
}

impl ThresholdClassifier {
    pub const EARLY: i64 = 0;
    pub const LATE: i64 = 1;
    pub const MID: i64 = 2;

    /// Weighted LDH load
    pub fn load(&self, features: &[f64]) -> f64 {
        self.weights.iter().zip(features).map(|(w, x)| w * x).sum()
    }
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self {
            weights: [0.7, 0.1, 0.1, 0.1],
            mid_threshold: 300.0,
            late_threshold: 500.0,
        }
    }
}

impl StageClassifier for ThresholdClassifier {
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError> {
        check_width(features, self.weights.len())?;

        let load = self.load(features);
        let class_id = if load >= self.late_threshold {
            Self::LATE
        } else if load >= self.mid_threshold {
            Self::MID
        } else {
            Self::EARLY
        };

        debug!("Threshold classifier: load={:.2} class={}", load, class_id);
        Ok(class_id)
    }

    fn name(&self) -> &str {
        "threshold"
    }
}
