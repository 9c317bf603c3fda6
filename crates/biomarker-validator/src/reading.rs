//! LDH Isoform Reading

use serde::{Deserialize, Serialize};

/// Model feature order. Classifiers and explainers see readings in this order.
pub const FEATURE_NAMES: [&str; 4] = ["LDHA", "LDHB", "LDHC", "LDHD"];

/// One set of lactate dehydrogenase isoform concentrations (mU/mL)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BiomarkerReading {
    pub ldha: f64,
    pub ldhb: f64,
    pub ldhc: f64,
    pub ldhd: f64,
}

impl BiomarkerReading {
    /// Create a reading from the four isoform values
    pub fn new(ldha: f64, ldhb: f64, ldhc: f64, ldhd: f64) -> Self {
        Self {
            ldha,
            ldhb,
            ldhc,
            ldhd,
        }
    }

    /// Feature vector in `FEATURE_NAMES` order
    pub fn features(&self) -> [f64; 4] {
        [self.ldha, self.ldhb, self.ldhc, self.ldhd]
    }

    /// Field name / value pairs, used by the validator and report
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("ldha", self.ldha),
            ("ldhb", self.ldhb),
            ("ldhc", self.ldhc),
            ("ldhd", self.ldhd),
        ]
    }
}

impl From<[f64; 4]> for BiomarkerReading {
    fn from(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}
