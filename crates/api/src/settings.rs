//! Layered configuration: defaults, optional TOML file, then environment.

use crate::rate_limit::RateLimitConfig;
use config::{Config, ConfigError, Environment, File};
use inference_engine::{InferenceError, LinearExplainer};
use serde::Deserialize;
use std::path::PathBuf;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "ldh-stage-predictor";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Listen address
    pub addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    /// ONNX export of the trained classifier; mock mode when absent
    #[serde(default)]
    pub onnx_path: Option<PathBuf>,
    /// Number of model input features
    pub input_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Emit JSON log lines
    pub json: bool,
    /// Max level: trace, debug, info, warn, error
    pub level: String,
}

/// Linear attribution parameters. These must be fitted to the configured
/// model, the defaults only match the threshold classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainerSettings {
    /// Per-feature weights, LDHA first
    pub weights: Vec<f64>,
    /// Per-feature reference values, usually the training means
    pub baseline: Vec<f64>,
    /// Divisor applied to every attribution
    pub scale: f64,
}

impl ExplainerSettings {
    /// Build the explainer, rejecting mismatched lengths or a bad scale
    pub fn build(&self) -> Result<LinearExplainer, InferenceError> {
        LinearExplainer::new(self.weights.clone(), self.baseline.clone(), self.scale)
    }
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub explainer: ExplainerSettings,
    pub rate_limit: RateLimitConfig,
    pub log: LogSettings,
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the default file may not.
    ///
    /// Environment variables use the `LDH` prefix and `__` as separator,
    /// e.g. `LDH__SERVER__ADDR=127.0.0.1:9000`.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = RateLimitConfig::default();
        let explainer = LinearExplainer::default();

        Config::builder()
            .set_default("server.addr", "0.0.0.0:8080")?
            .set_default("model.input_width", 4)?
            .set_default("explainer.weights", explainer.weights)?
            .set_default("explainer.baseline", explainer.baseline)?
            .set_default("explainer.scale", explainer.scale)?
            .set_default("rate_limit.per_second", defaults.per_second as i64)?
            .set_default("rate_limit.burst_size", i64::from(defaults.burst_size))?
            .set_default("log.json", false)?
            .set_default("log.level", "info")?
            .add_source(File::with_name(path.unwrap_or(DEFAULT_CONFIG_FILE)).required(path.is_some()))
            .add_source(
                Environment::with_prefix("LDH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.model.input_width, 4);
        assert!(settings.model.onnx_path.is_none());
        assert_eq!(settings.rate_limit.burst_size, 5);
        assert!(!settings.log.json);

        let explainer = settings.explainer.build().unwrap();
        assert_eq!(explainer.weights, LinearExplainer::default().weights);
        assert_eq!(explainer.scale, 1000.0);
    }

    #[test]
    fn test_explainer_from_file() {
        let path = std::env::temp_dir().join(format!(
            "ldh-settings-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[explainer]\nweights = [0.4, 0.3, 0.2, 0.1]\nbaseline = [300.0, 120.0, 40.0, 20.0]\nscale = 500.0\n",
        )
        .unwrap();

        let settings = Settings::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        let explainer = settings.explainer.build().unwrap();
        assert_eq!(explainer.weights, vec![0.4, 0.3, 0.2, 0.1]);
        assert_eq!(explainer.baseline, vec![300.0, 120.0, 40.0, 20.0]);
        assert_eq!(explainer.scale, 500.0);
        assert_eq!(settings.model.input_width, 4);
    }

    #[test]
    fn test_mismatched_explainer_lengths_rejected() {
        let settings = ExplainerSettings {
            weights: vec![1.0, 1.0],
            baseline: vec![0.0],
            scale: 1.0,
        };
        assert!(settings.build().is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        assert!(Settings::load(Some("/nonexistent/ldh-settings.toml")).is_err());
    }
}
