//! ONNX classifier backed by tract

use crate::classifier::StageClassifier;
use crate::{check_width, InferenceError};
use std::path::Path;
use tracing::{debug, info};
use tract_onnx::prelude::*;

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Stage classifier exported to ONNX (e.g. from scikit-learn via skl2onnx).
///
/// Expects one `[1, width]` f32 input and reads the int64 label from the
/// first output.
pub struct OnnxClassifier {
    plan: OnnxPlan,
    input_width: usize,
}

impl OnnxClassifier {
    /// Load and optimize the model at `path`
    pub fn load(path: impl AsRef<Path>, input_width: usize) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading ONNX stage classifier from {}", path.display());

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, input_width]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;

        info!("Model loaded successfully");
        Ok(Self { plan, input_width })
    }
}

impl StageClassifier for OnnxClassifier {
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError> {
        check_width(features, self.input_width)?;

        let data: Vec<f32> = features.iter().map(|&x| x as f32).collect();
        let input = Tensor::from_shape(&[1, self.input_width], &data)
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let label = outputs
            .first()
            .ok_or_else(|| InferenceError::InferenceFailed("model produced no outputs".to_string()))?
            .to_array_view::<i64>()
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?
            .iter()
            .next()
            .copied()
            .ok_or_else(|| InferenceError::InferenceFailed("empty label output".to_string()))?;

        debug!("ONNX classifier predicted class {}", label);
        Ok(label)
    }

    fn name(&self) -> &str {
        "onnx"
    }
}
