//! Stage Inference
//!
//! Capability interfaces for the stage classifier and the feature
//! attribution explainer, a tract-backed ONNX classifier, deterministic
//! development implementations, and a facade that times each call.

mod classifier;
mod engine;
mod explainer;
mod onnx;

pub use classifier::{StageClassifier, ThresholdClassifier};
pub use engine::{InferenceEngine, InferenceResult};
pub use explainer::{FeatureExplainer, LinearExplainer};
pub use onnx::OnnxClassifier;

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
}

/// Reject feature vectors whose width differs from what the model takes
pub(crate) fn check_width(features: &[f64], expected: usize) -> Result<(), InferenceError> {
    if features.len() != expected {
        return Err(InferenceError::InvalidInputShape {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}
