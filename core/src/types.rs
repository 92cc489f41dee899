use serde::{Deserialize, Serialize};

/// Request body for the check-symptoms endpoint
///
/// Only constructed through [`SymptomQuery::new`], which trims the input and
/// refuses blank text, so an empty query can never reach the wire.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SymptomQuery {
    symptoms: String,
}

impl SymptomQuery {
    /// Builds a query from raw user or preset text. Returns `None` when the
    /// text is empty after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            symptoms: trimmed.to_string(),
        })
    }

    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }
}

/// Classification returned by the endpoint on a 2xx response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiagnosisResult {
    pub diagnosis: String,
    /// Expected in 0.0..=1.0, not validated
    pub confidence: f64,
    pub recommendation: String,
}

impl DiagnosisResult {
    /// Confidence as a whole percentage, rounded half away from zero.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}
