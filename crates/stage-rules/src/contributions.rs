//! Feature attribution ranking

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// One feature's attribution score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub name: String,
    pub score: f64,
}

/// Name and score sequences differ in length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Feature name count {names} does not match attribution score count {scores}")]
pub struct CardinalityMismatch {
    pub names: usize,
    pub scores: usize,
}

/// `"Feature 1"` .. `"Feature {count}"`
pub fn placeholder_feature_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Feature {}", i)).collect()
}

/// Names to pair with `score_count` attribution scores.
///
/// Explainers do not guarantee one score per declared feature. When the
/// counts differ, placeholder names are generated instead.
pub fn resolve_feature_names<S: AsRef<str>>(declared: &[S], score_count: usize) -> Vec<String> {
    if declared.len() == score_count {
        return declared.iter().map(|s| s.as_ref().to_string()).collect();
    }

    warn!(
        "Explainer returned {} scores for {} declared features, using placeholder names",
        score_count,
        declared.len()
    );
    placeholder_feature_names(score_count)
}

/// Sort key: absolute score, NaN lowest
fn magnitude(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score.abs()
    }
}

/// Pair names with scores, ordered by descending absolute score.
///
/// Ties keep input order.
pub fn rank_feature_contributions<S: AsRef<str>>(
    names: &[S],
    scores: &[f64],
) -> Result<Vec<FeatureContribution>, CardinalityMismatch> {
    if names.len() != scores.len() {
        return Err(CardinalityMismatch {
            names: names.len(),
            scores: scores.len(),
        });
    }

    let mut ranked: Vec<FeatureContribution> = names
        .iter()
        .zip(scores)
        .map(|(name, &score)| FeatureContribution {
            name: name.as_ref().to_string(),
            score,
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| magnitude(b.score).total_cmp(&magnitude(a.score)));
    Ok(ranked)
}
