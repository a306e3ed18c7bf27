use crate::iban::IbanCheck;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};
use strum::{Display, IntoStaticStr};

const TYPE: &str = "type";
const OUTCOME: &str = "outcome";
const VALIDATIONS: &str = "bank_identifier.validations";

/// The kind of identifier a validator checks, reported as the `type` label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierType {
    Iban,
    Bic,
}

/// Counters registered once per validator instance, one per outcome.
pub struct IbanMetrics {
    pub valid: Counter,
    pub malformed: Counter,
    pub country_unrecognized: Counter,
    pub country_disallowed: Counter,
    pub checksum_mismatch: Counter,
}

impl IbanMetrics {
    pub fn new(labels: &Labels) -> Self {
        let outcome_counter =
            |outcome: IbanCheck| validations_counter(labels, IdentifierType::Iban, outcome.into());
        IbanMetrics {
            valid: outcome_counter(IbanCheck::Valid),
            malformed: outcome_counter(IbanCheck::Malformed),
            country_unrecognized: outcome_counter(IbanCheck::CountryUnrecognized),
            country_disallowed: outcome_counter(IbanCheck::CountryDisallowed),
            checksum_mismatch: outcome_counter(IbanCheck::ChecksumMismatch),
        }
    }
}

pub struct BicMetrics {
    pub valid: Counter,
    pub malformed: Counter,
}

impl BicMetrics {
    pub fn new(labels: &Labels) -> Self {
        BicMetrics {
            valid: validations_counter(labels, IdentifierType::Bic, "valid"),
            malformed: validations_counter(labels, IdentifierType::Bic, "malformed"),
        }
    }
}

fn validations_counter(
    labels: &Labels,
    identifier_type: IdentifierType,
    outcome: &'static str,
) -> Counter {
    let type_label: &'static str = identifier_type.into();
    counter!(
        VALIDATIONS,
        labels.clone_with_labels(&Labels::new(&[(TYPE, type_label), (OUTCOME, outcome)]))
    )
}
