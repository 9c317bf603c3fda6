//! Validator for biomarker and intake ranges

use crate::error::ValidationError;
use crate::patient::{PatientContext, SymptomLog};
use crate::reading::BiomarkerReading;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Valid LDH isoform concentration range (mU/mL), applied to all four
    pub ldh_range: (f64, f64),
    /// Valid patient age range (years)
    pub age_range: (u32, u32),
    /// Valid symptom score range
    pub symptom_range: (u8, u8),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            ldh_range: (0.0, 1000.0),
            age_range: (0, 120),
            symptom_range: (0, 10),
        }
    }
}

/// Result of validation
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a result from collected errors
    pub fn from_errors(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            fields_checked,
        }
    }

    /// Convert into the first error, if any
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Input validator for readings and intake data
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against an inclusive range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate one LDH isoform concentration
    pub fn validate_ldh(&self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        self.validate_range(field, value, self.config.ldh_range)
    }

    /// Validate all four isoforms, collecting every error
    pub fn validate_reading(&self, reading: &BiomarkerReading) -> ValidationResult {
        let fields = reading.fields();
        let errors: Vec<_> = fields
            .iter()
            .filter_map(|&(field, value)| self.validate_ldh(field, value).err())
            .collect();

        if !errors.is_empty() {
            debug!("Reading rejected with {} error(s)", errors.len());
        }
        ValidationResult::from_errors(errors, fields.len())
    }

    /// Validate a reading, returning the first error
    pub fn check_reading(&self, reading: &BiomarkerReading) -> Result<(), ValidationError> {
        self.validate_reading(reading).into_result()
    }

    /// Validate patient intake fields. A missing age is allowed.
    pub fn validate_patient(&self, patient: &PatientContext) -> ValidationResult {
        let (min, max) = self.config.age_range;
        let errors: Vec<_> = patient
            .age
            .and_then(|age| {
                self.validate_range("age", f64::from(age), (f64::from(min), f64::from(max)))
                    .err()
            })
            .into_iter()
            .collect();

        ValidationResult::from_errors(errors, 1)
    }

    /// Validate symptom scores
    pub fn validate_symptoms(&self, symptoms: &SymptomLog) -> ValidationResult {
        let (min, max) = self.config.symptom_range;
        let range = (f64::from(min), f64::from(max));
        let errors: Vec<_> = [("fatigue", symptoms.fatigue), ("pain", symptoms.pain)]
            .iter()
            .filter_map(|&(field, value)| self.validate_range(field, f64::from(value), range).err())
            .collect();

        ValidationResult::from_errors(errors, 2)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reading() {
        let validator = Validator::default();
        let result = validator.validate_reading(&BiomarkerReading::new(0.0, 250.0, 999.9, 1000.0));
        assert!(result.valid);
        assert_eq!(result.fields_checked, 4);
    }

    #[test]
    fn test_negative_ldha_rejected() {
        let validator = Validator::default();
        let err = validator
            .check_reading(&BiomarkerReading::new(-1.0, 10.0, 10.0, 10.0))
            .unwrap_err();
        assert_eq!(err.field(), "ldha");
    }

    #[test]
    fn test_collects_every_error() {
        let validator = Validator::default();
        let result = validator.validate_reading(&BiomarkerReading::new(-1.0, 1500.0, f64::NAN, 20.0));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.errors[2], ValidationError::NotFinite { field: "ldhc" });
    }

    #[test]
    fn test_infinite_value_not_finite() {
        let validator = Validator::default();
        assert_eq!(
            validator.validate_ldh("ldhd", f64::INFINITY),
            Err(ValidationError::NotFinite { field: "ldhd" })
        );
    }

    #[test]
    fn test_patient_age_range() {
        let validator = Validator::default();
        let mut patient = PatientContext {
            age: Some(45),
            ..Default::default()
        };
        assert!(validator.validate_patient(&patient).valid);

        patient.age = Some(130);
        let result = validator.validate_patient(&patient);
        assert!(!result.valid);
        assert_eq!(result.errors[0].field(), "age");

        patient.age = None;
        patient.name = String::new();
        assert!(validator.validate_patient(&patient).valid);
    }

    #[test]
    fn test_symptom_scores() {
        let validator = Validator::default();
        let mut symptoms = SymptomLog {
            fatigue: 10,
            pain: 0,
            ..Default::default()
        };
        assert!(validator.validate_symptoms(&symptoms).valid);

        symptoms.pain = 11;
        assert!(!validator.validate_symptoms(&symptoms).valid);
    }
}
