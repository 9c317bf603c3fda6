//! Stage/Risk Rule Engine
//!
//! Maps an LDHA concentration onto a clinical stage and risk level, presents
//! that rule-based assessment next to an external classifier's prediction,
//! and ranks per-feature attribution scores for display.
//!
//! Every function here is pure: no state is held between calls.

mod combine;
mod contributions;
mod guide;
mod rules;

pub use combine::{combine_assessment, Advisory, CombinedAssessment, ModelStage};
pub use contributions::{
    placeholder_feature_names, rank_feature_contributions, resolve_feature_names,
    CardinalityMismatch, FeatureContribution,
};
pub use guide::{reference_guide, GuideRow};
pub use rules::{classify_by_ldha, RiskLevel, Stage, StageAssessment, STAGE_THRESHOLDS};
