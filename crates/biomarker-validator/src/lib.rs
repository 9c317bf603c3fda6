//! Biomarker Validation
//!
//! Provides the LDH reading and patient context types, plus range checking
//! for everything a clinician can type into the intake form.

mod error;
mod patient;
mod reading;
mod validator;

pub use error::ValidationError;
pub use patient::{ClinicalHistory, Gender, LifestyleFactor, PatientContext, SymptomLog};
pub use reading::{BiomarkerReading, FEATURE_NAMES};
pub use validator::{ValidationConfig, ValidationResult, Validator};
