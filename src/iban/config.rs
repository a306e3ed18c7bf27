use crate::country_format::{CountryFormatSpec, CountryFormatTable};
use crate::iban::IbanValidator;
use crate::observability::metrics::IbanMetrics;
use crate::{CreateValidatorError, Labels};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Which IBANs a validator accepts beyond the structural and checksum rules.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptancePolicy {
    /// Accept country codes missing from the registry, checked against the generic
    /// pseudo-IBAN layout instead of being rejected.
    #[serde(default)]
    pub allow_unrecognized_country: bool,

    /// When non-empty, only these country codes are accepted, whether or not they are
    /// in the registry.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub allowed_countries: BTreeSet<String>,
}

impl AcceptancePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_unrecognized_country(&self, allow: bool) -> Self {
        self.mutate_clone(|x| x.allow_unrecognized_country = allow)
    }

    pub fn allowed_countries<I, S>(&self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let countries = countries.into_iter().map(Into::into).collect();
        self.mutate_clone(|x| x.allowed_countries = countries)
    }

    /// An empty allow-list accepts every country.
    pub fn is_country_allowed(&self, country_code: &str) -> bool {
        self.allowed_countries.is_empty() || self.allowed_countries.contains(country_code)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

enum CountryFormatSource {
    Standard,
    Shared(Arc<CountryFormatTable>),
    Specs(Vec<CountryFormatSpec>),
}

/// Produces an immutable [IbanValidator]. A validator cannot be reconfigured once built,
/// build another one for a different policy.
pub struct IbanValidatorBuilder {
    policy: AcceptancePolicy,
    country_formats: CountryFormatSource,
    labels: Labels,
}

impl IbanValidatorBuilder {
    pub fn new() -> Self {
        IbanValidatorBuilder {
            policy: AcceptancePolicy::default(),
            country_formats: CountryFormatSource::Standard,
            labels: Labels::empty(),
        }
    }

    pub fn policy(mut self, policy: AcceptancePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_allow_unrecognized_country(mut self, value: bool) -> Self {
        self.policy.allow_unrecognized_country = value;
        self
    }

    pub fn with_allowed_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy = self.policy.allowed_countries(countries);
        self
    }

    /// Share an already built registry instead of the standard one.
    pub fn country_formats(mut self, table: Arc<CountryFormatTable>) -> Self {
        self.country_formats = CountryFormatSource::Shared(table);
        self
    }

    /// Use a custom registry, built (and checked) by [IbanValidatorBuilder::build].
    pub fn country_format_specs(mut self, specs: &[CountryFormatSpec]) -> Self {
        self.country_formats = CountryFormatSource::Specs(specs.to_vec());
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> Result<IbanValidator, CreateValidatorError> {
        let allowed_countries = self
            .policy
            .allowed_countries
            .iter()
            .map(|country| normalize_country_code(country))
            .collect::<Result<BTreeSet<String>, CreateValidatorError>>()?;

        let country_formats = match self.country_formats {
            CountryFormatSource::Standard => CountryFormatTable::standard(),
            CountryFormatSource::Shared(table) => table,
            CountryFormatSource::Specs(specs) => Arc::new(CountryFormatTable::new(&specs)?),
        };

        Ok(IbanValidator {
            policy: AcceptancePolicy {
                allow_unrecognized_country: self.policy.allow_unrecognized_country,
                allowed_countries,
            },
            country_formats,
            metrics: IbanMetrics::new(&self.labels),
        })
    }
}

impl Default for IbanValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_country_code(country: &str) -> Result<String, CreateValidatorError> {
    let normalized = country.trim().to_ascii_uppercase();
    if normalized.len() == 2 && normalized.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(normalized)
    } else {
        Err(CreateValidatorError::InvalidAllowedCountry(
            country.to_string(),
        ))
    }
}
