pub mod registry;

use ahash::AHashMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use thiserror::Error;

pub use registry::STANDARD_REGISTRY;

/// Number of characters before the BBAN: the country code and the two check digits.
pub const IBAN_PREFIX_LENGTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `[0-9]`
    Digit,
    /// `[A-Z]`
    UpperLetter,
    /// `[A-Z0-9]`
    Alphanumeric,
}

impl CharClass {
    fn regex_class(&self) -> &'static str {
        match self {
            CharClass::Digit => "[0-9]",
            CharClass::UpperLetter => "[A-Z]",
            CharClass::Alphanumeric => "[A-Z0-9]",
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            CharClass::Digit => byte.is_ascii_digit(),
            CharClass::UpperLetter => byte.is_ascii_uppercase(),
            CharClass::Alphanumeric => byte.is_ascii_digit() || byte.is_ascii_uppercase(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BbanSegment {
    pub char_class: CharClass,
    pub length: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryKind {
    /// Listed in the ISO 13616 registry.
    Iso13616,
    /// IBAN-shaped national format of a country outside the registry.
    Unofficial,
}

/// Static description of one country's IBAN layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryFormatSpec {
    pub country_code: &'static str,
    /// Full IBAN length, including country code and check digits.
    pub iban_length: usize,
    pub bban: &'static [BbanSegment],
    pub kind: RegistryKind,
}

impl CountryFormatSpec {
    pub fn bban_length(&self) -> usize {
        self.bban.iter().map(|segment| segment.length).sum()
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CountryFormatTableError {
    #[error("Country code {0:?} is defined more than once")]
    DuplicateCountryCode(String),

    #[error("Country code {0:?} is not two upper-case ASCII letters")]
    InvalidCountryCode(String),

    #[error("IBAN length for {country_code} is declared as {declared} but the format describes {actual} characters")]
    LengthMismatch {
        country_code: String,
        declared: usize,
        actual: usize,
    },

    #[error("The structural pattern for {country_code} could not be compiled: {message}")]
    InvalidPattern {
        country_code: String,
        message: String,
    },
}

/// A country format with its anchored structural pattern compiled.
#[derive(Debug)]
pub struct CountryFormat {
    spec: CountryFormatSpec,
    pattern: Regex,
}

impl CountryFormat {
    fn compile(spec: CountryFormatSpec) -> Result<Self, CountryFormatTableError> {
        let country_code = spec.country_code;
        if country_code.len() != 2 || !country_code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(CountryFormatTableError::InvalidCountryCode(
                country_code.to_string(),
            ));
        }

        let actual = IBAN_PREFIX_LENGTH + spec.bban_length();
        if actual != spec.iban_length {
            return Err(CountryFormatTableError::LengthMismatch {
                country_code: country_code.to_string(),
                declared: spec.iban_length,
                actual,
            });
        }

        let mut pattern = format!("^{country_code}[0-9]{{2}}");
        for segment in spec.bban {
            pattern.push_str(&format!(
                "{}{{{}}}",
                segment.char_class.regex_class(),
                segment.length
            ));
        }
        pattern.push('$');

        let pattern =
            Regex::new(&pattern).map_err(|err| CountryFormatTableError::InvalidPattern {
                country_code: country_code.to_string(),
                message: err.to_string(),
            })?;

        Ok(CountryFormat { spec, pattern })
    }

    pub fn country_code(&self) -> &'static str {
        self.spec.country_code
    }

    pub fn iban_length(&self) -> usize {
        self.spec.iban_length
    }

    pub fn bban(&self) -> &'static [BbanSegment] {
        self.spec.bban
    }

    pub fn kind(&self) -> RegistryKind {
        self.spec.kind
    }

    /// The anchored pattern, e.g. `^DE[0-9]{2}[0-9]{8}[0-9]{10}$`.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether the whole (canonical, upper-case) value has exactly this country's layout.
    pub fn is_match(&self, iban: &str) -> bool {
        self.pattern.is_match(iban)
    }
}

/// Immutable registry of country formats, keyed by country code.
///
/// Built once and shared (usually through an `Arc`) by every validator using it.
#[derive(Debug)]
pub struct CountryFormatTable {
    formats: AHashMap<&'static str, CountryFormat>,
}

lazy_static! {
    static ref STANDARD_TABLE: Arc<CountryFormatTable> = Arc::new(
        CountryFormatTable::new(STANDARD_REGISTRY)
            .expect("the embedded country format registry is valid")
    );
}

impl CountryFormatTable {
    /// Builds a table from an explicit list of formats. Every entry is checked, and a
    /// country code appearing twice is an error rather than a silent overwrite.
    pub fn new(specs: &[CountryFormatSpec]) -> Result<Self, CountryFormatTableError> {
        let mut formats = AHashMap::with_capacity(specs.len());
        for spec in specs {
            let format = CountryFormat::compile(*spec)?;
            if formats.insert(spec.country_code, format).is_some() {
                return Err(CountryFormatTableError::DuplicateCountryCode(
                    spec.country_code.to_string(),
                ));
            }
        }
        Ok(CountryFormatTable { formats })
    }

    /// The table built from [STANDARD_REGISTRY]. It is built on first use and shared
    /// afterwards.
    pub fn standard() -> Arc<CountryFormatTable> {
        Arc::clone(&STANDARD_TABLE)
    }

    pub fn lookup(&self, country_code: &str) -> Option<&CountryFormat> {
        self.formats.get(country_code)
    }

    pub fn contains(&self, country_code: &str) -> bool {
        self.formats.contains_key(country_code)
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// All formats, sorted by country code.
    pub fn iter(&self) -> impl Iterator<Item = &CountryFormat> {
        let mut formats: Vec<&CountryFormat> = self.formats.values().collect();
        formats.sort_unstable_by_key(|format| format.country_code());
        formats.into_iter()
    }
}
