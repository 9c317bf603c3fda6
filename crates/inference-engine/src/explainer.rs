//! Feature attribution capability

use crate::{check_width, InferenceError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Anything that scores each feature's contribution to one prediction.
///
/// The number of scores is not guaranteed to equal the number of declared
/// features.
pub trait FeatureExplainer: Send + Sync {
    fn explain(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// Linear attribution: `weight * (x - baseline) / scale` per feature.
///
/// This is what an exact SHAP explainer returns for a linear model with
/// independent features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearExplainer {
    pub weights: Vec<f64>,
    pub baseline: Vec<f64>,
    pub scale: f64,
}

impl LinearExplainer {
    /// Create an explainer; `baseline` must match `weights` in length
    pub fn new(weights: Vec<f64>, baseline: Vec<f64>, scale: f64) -> Result<Self, InferenceError> {
        check_width(&baseline, weights.len())?;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(InferenceError::ModelLoadError(format!(
                "attribution scale must be positive, got {}",
                scale
            )));
        }
        Ok(Self {
            weights,
            baseline,
            scale,
        })
    }
}

impl Default for LinearExplainer {
    fn default() -> Self {
        Self {
            weights: vec![0.7, 0.1, 0.1, 0.1],
            baseline: vec![250.0, 100.0, 50.0, 30.0],
            scale: 1000.0,
        }
    }
}

impl FeatureExplainer for LinearExplainer {
    fn explain(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        check_width(features, self.weights.len())?;

        let scores: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.baseline)
            .zip(features)
            .map(|((w, b), x)| w * (x - b) / self.scale)
            .collect();

        debug!("Linear attribution: {:?}", scores);
        Ok(scores)
    }
}
