use crate::country_format::CountryFormatTableError;
use thiserror::Error;

impl From<CreateValidatorError> for i64 {
    fn from(value: CreateValidatorError) -> i64 {
        match value {
            CreateValidatorError::InvalidAllowedCountry(_) => -2,
            CreateValidatorError::InvalidCountryFormats(_) => -3,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateValidatorError {
    /// An entry of the allow-list is not a two-letter country code
    #[error("Allowed country {0:?} is not a two-letter country code")]
    InvalidAllowedCountry(String),
    /// The country format registry given to the builder is invalid (duplicate code, wrong length, etc.)
    #[error("Invalid country format registry: {0}")]
    InvalidCountryFormats(#[from] CountryFormatTableError),
}
