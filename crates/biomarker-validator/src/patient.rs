//! Patient intake context
//!
//! Carries what the intake pages collect so each request is self-contained.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Female,
    Male,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// Prior clinical history options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalHistory {
    PreviousBreastCancer,
    BrcaMutation,
    FamilyHistory,
    RadiationExposure,
}

/// Lifestyle risk factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleFactor {
    AlcoholUse,
    Smoking,
    Obesity,
    LackOfExercise,
}

/// Patient identity and risk-factor context for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientContext {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub clinical_history: Vec<ClinicalHistory>,
    pub family_history: bool,
    pub lifestyle_factors: Vec<LifestyleFactor>,
}

impl Default for PatientContext {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            age: None,
            gender: Gender::default(),
            clinical_history: Vec::new(),
            family_history: false,
            lifestyle_factors: Vec::new(),
        }
    }
}

impl PatientContext {
    /// Replace a blank name with "Unknown"
    pub fn normalized(mut self) -> Self {
        if self.name.trim().is_empty() {
            self.name = PatientContext::default().name;
        }
        self
    }

    /// Age for display, "Unknown" when not provided
    pub fn age_label(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Self-reported symptoms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomLog {
    /// Fatigue, 0-10
    pub fatigue: u8,
    /// Pain, 0-10
    pub pain: u8,
    pub unintended_weight_loss: bool,
    pub night_sweats: bool,
}
