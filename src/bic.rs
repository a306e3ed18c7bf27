use crate::observability::labels::Labels;
use crate::observability::metrics::BicMetrics;
use crate::sanitize::canonicalize;
use crate::validator::Validator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // institution (4) + country (2) + location (2) + optional branch (3)
    static ref BIC_PATTERN: Regex = Regex::new(
        "^[A-Z]{4}[A-Z]{2}[A-Z2-9][A-NP-Z12](XXX|[A-WYZ0-9][A-Z0-9]{2})?$"
    )
    .expect("BIC pattern is valid");
    static ref DEFAULT_BIC_VALIDATOR: BicValidator = BicValidator::new();
}

/// BIC (SWIFT code) validator. Purely structural: there is no check digit, and the
/// country part is not checked against the IBAN registry.
pub struct BicValidator {
    metrics: BicMetrics,
}

impl BicValidator {
    pub fn new() -> Self {
        Self::with_labels(&Labels::empty())
    }

    pub fn with_labels(labels: &Labels) -> Self {
        BicValidator {
            metrics: BicMetrics::new(labels),
        }
    }
}

impl Default for BicValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for BicValidator {
    fn validate(&self, value: &str) -> bool {
        let valid = BIC_PATTERN.is_match(value);
        if valid {
            self.metrics.valid.increment(1);
        } else {
            self.metrics.malformed.increment(1);
        }
        valid
    }

    fn sanitize(&self, value: &str) -> String {
        canonicalize(value)
    }
}

pub fn validate_bic(value: &str) -> bool {
    DEFAULT_BIC_VALIDATOR.validate(value)
}

pub fn sanitize_bic(value: &str) -> String {
    canonicalize(value)
}

pub fn invoke_bic(value: &str) -> Option<String> {
    DEFAULT_BIC_VALIDATOR.invoke(value)
}
