pub mod config;
mod structure;

use crate::checksum::is_valid_iban_checksum;
use crate::country_format::CountryFormatTable;
use crate::iban::config::{AcceptancePolicy, IbanValidatorBuilder};
use crate::iban::structure::{check_structure, StructureCheck};
use crate::observability::metrics::IbanMetrics;
use crate::sanitize::canonicalize;
use crate::validator::Validator;
use lazy_static::lazy_static;
use std::sync::Arc;
use strum::IntoStaticStr;

/// Detailed outcome of an IBAN check. Only [IbanCheck::Valid] is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IbanCheck {
    Valid,
    /// Too short, or the layout does not match the country format.
    Malformed,
    /// The country code is not in the registry and the policy does not allow pseudo IBANs.
    CountryUnrecognized,
    /// The country code is not in the policy's allow-list.
    CountryDisallowed,
    /// The layout is correct but the MOD 97-10 check digits are not.
    ChecksumMismatch,
}

/// IBAN validator: country layout from the registry (or the pseudo-IBAN layout when the
/// policy allows it), then the MOD 97-10 checksum.
pub struct IbanValidator {
    pub(crate) policy: AcceptancePolicy,
    pub(crate) country_formats: Arc<CountryFormatTable>,
    pub(crate) metrics: IbanMetrics,
}

impl IbanValidator {
    pub fn builder() -> IbanValidatorBuilder {
        IbanValidatorBuilder::new()
    }

    /// Strict validator using the standard registry.
    pub fn new() -> Self {
        IbanValidator {
            policy: AcceptancePolicy::default(),
            country_formats: CountryFormatTable::standard(),
            metrics: IbanMetrics::new(&crate::Labels::empty()),
        }
    }

    pub fn policy(&self) -> &AcceptancePolicy {
        &self.policy
    }

    pub fn country_formats(&self) -> &Arc<CountryFormatTable> {
        &self.country_formats
    }

    /// Checks the value as given, only upper-casing it. Separators are not removed,
    /// use [Validator::invoke] for raw user input.
    pub fn check(&self, value: &str) -> IbanCheck {
        let normalized = value.to_ascii_uppercase();
        match check_structure(&self.country_formats, &self.policy, &normalized) {
            StructureCheck::Matched => {
                if is_valid_iban_checksum(&normalized) {
                    IbanCheck::Valid
                } else {
                    IbanCheck::ChecksumMismatch
                }
            }
            StructureCheck::Malformed => IbanCheck::Malformed,
            StructureCheck::CountryUnrecognized => IbanCheck::CountryUnrecognized,
            StructureCheck::CountryDisallowed => IbanCheck::CountryDisallowed,
        }
    }

    fn record(&self, outcome: IbanCheck) {
        let counter = match outcome {
            IbanCheck::Valid => &self.metrics.valid,
            IbanCheck::Malformed => &self.metrics.malformed,
            IbanCheck::CountryUnrecognized => &self.metrics.country_unrecognized,
            IbanCheck::CountryDisallowed => &self.metrics.country_disallowed,
            IbanCheck::ChecksumMismatch => &self.metrics.checksum_mismatch,
        };
        counter.increment(1);
    }
}

impl Default for IbanValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IbanValidator {
    fn validate(&self, value: &str) -> bool {
        let outcome = self.check(value);
        self.record(outcome);
        outcome == IbanCheck::Valid
    }

    fn sanitize(&self, value: &str) -> String {
        canonicalize(value)
    }
}

lazy_static! {
    static ref DEFAULT_IBAN_VALIDATOR: IbanValidator = IbanValidator::new();
}

/// Validates with the strict default policy and the standard registry.
pub fn validate_iban(value: &str) -> bool {
    DEFAULT_IBAN_VALIDATOR.validate(value)
}

pub fn sanitize_iban(value: &str) -> String {
    canonicalize(value)
}

pub fn invoke_iban(value: &str) -> Option<String> {
    DEFAULT_IBAN_VALIDATOR.invoke(value)
}
