// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bic;
mod checksum;
mod country_format;
mod error;
mod iban;
mod observability;
mod sanitize;
mod validator;

// This is the public API of the bank identifier validation library
pub use bic::{invoke_bic, sanitize_bic, validate_bic, BicValidator};
pub use checksum::{compute_check_digits, is_valid_iban_checksum, mod97, rearrange, transliterate};
pub use country_format::{
    BbanSegment, CharClass, CountryFormat, CountryFormatSpec, CountryFormatTable,
    CountryFormatTableError, RegistryKind, IBAN_PREFIX_LENGTH, STANDARD_REGISTRY,
};
pub use error::CreateValidatorError;
pub use iban::config::{AcceptancePolicy, IbanValidatorBuilder};
pub use iban::{invoke_iban, sanitize_iban, validate_iban, IbanCheck, IbanValidator};
pub use observability::labels::Labels;
pub use observability::metrics::IdentifierType;
pub use sanitize::{canonicalize, to_print_format};
pub use validator::Validator;
