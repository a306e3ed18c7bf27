use crate::country_format::{CountryFormat, CountryFormatTable};
use crate::iban::config::AcceptancePolicy;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Layout accepted for countries missing from the registry: a two character country
    /// prefix, two check digits and 5 to 35 alphanumerics.
    static ref PSEUDO_IBAN_PATTERN: Regex =
        Regex::new("^[A-Z0-9]{2}[0-9]{2}[A-Z0-9]{5,35}$").expect("pseudo IBAN pattern is valid");
}

/// Result of resolving which layout a candidate must follow.
#[derive(Debug)]
pub(crate) enum PatternResolution<'a> {
    Country(&'a CountryFormat),
    Pseudo,
    Unrecognized,
    Disallowed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StructureCheck {
    Matched,
    Malformed,
    CountryUnrecognized,
    CountryDisallowed,
}

/// The allow-list is applied first, so a restricted policy rejects even well known
/// countries before the registry is consulted.
pub(crate) fn resolve_pattern<'a>(
    country_formats: &'a CountryFormatTable,
    policy: &AcceptancePolicy,
    country_code: &str,
) -> PatternResolution<'a> {
    if !policy.is_country_allowed(country_code) {
        return PatternResolution::Disallowed;
    }
    match country_formats.lookup(country_code) {
        Some(format) => PatternResolution::Country(format),
        None if policy.allow_unrecognized_country => PatternResolution::Pseudo,
        None => PatternResolution::Unrecognized,
    }
}

/// Anchored structural check of an upper-cased candidate.
pub(crate) fn check_structure(
    country_formats: &CountryFormatTable,
    policy: &AcceptancePolicy,
    normalized: &str,
) -> StructureCheck {
    let Some(country_code) = normalized.get(..2) else {
        return StructureCheck::Malformed;
    };

    let matched = match resolve_pattern(country_formats, policy, country_code) {
        PatternResolution::Country(format) => format.is_match(normalized),
        PatternResolution::Pseudo => PSEUDO_IBAN_PATTERN.is_match(normalized),
        PatternResolution::Unrecognized => return StructureCheck::CountryUnrecognized,
        PatternResolution::Disallowed => return StructureCheck::CountryDisallowed,
    };

    if matched {
        StructureCheck::Matched
    } else {
        StructureCheck::Malformed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn standard() -> std::sync::Arc<CountryFormatTable> {
        CountryFormatTable::standard()
    }

    #[test]
    fn resolves_known_country() {
        let table = standard();
        match resolve_pattern(&table, &AcceptancePolicy::new(), "DE") {
            PatternResolution::Country(format) => assert_eq!(format.country_code(), "DE"),
            other => panic!("unexpected resolution {other:?}"),
        }
    }

    #[test]
    fn unknown_country_depends_on_policy() {
        let table = standard();
        let strict = AcceptancePolicy::new();
        let permissive = strict.allow_unrecognized_country(true);

        assert!(matches!(
            resolve_pattern(&table, &strict, "CA"),
            PatternResolution::Unrecognized
        ));
        assert!(matches!(
            resolve_pattern(&table, &permissive, "CA"),
            PatternResolution::Pseudo
        ));
    }

    #[test]
    fn allow_list_is_checked_before_the_registry() {
        let table = standard();
        let policy = AcceptancePolicy::new()
            .allow_unrecognized_country(true)
            .allowed_countries(["DE"]);

        assert!(matches!(
            resolve_pattern(&table, &policy, "MR"),
            PatternResolution::Disallowed
        ));
        assert!(matches!(
            resolve_pattern(&table, &policy, "CA"),
            PatternResolution::Disallowed
        ));
        assert!(matches!(
            resolve_pattern(&table, &policy, "DE"),
            PatternResolution::Country(_)
        ));
    }

    #[test]
    fn test_check_structure() {
        let table = standard();
        let strict = AcceptancePolicy::new();
        let permissive = strict.allow_unrecognized_country(true);

        let test_cases = vec![
            ("DE89370400440532013000", &strict, StructureCheck::Matched),
            // the checksum is not part of the structural check
            ("DE00370400440532013000", &strict, StructureCheck::Matched),
            ("DE8937040044053201300", &strict, StructureCheck::Malformed),
            ("DE893704004405320130001", &strict, StructureCheck::Malformed),
            ("DEXX370400440532013000", &strict, StructureCheck::Malformed),
            ("D", &strict, StructureCheck::Malformed),
            ("", &strict, StructureCheck::Malformed),
            ("CA031234567890", &strict, StructureCheck::CountryUnrecognized),
            ("CA031234567890", &permissive, StructureCheck::Matched),
            ("CA03123", &permissive, StructureCheck::Malformed),
            ("CA0312345", &permissive, StructureCheck::Matched),
            ("12031234567890", &permissive, StructureCheck::Matched),
            ("CAXX1234567890", &permissive, StructureCheck::Malformed),
            ("DÉ89370400440532013000", &strict, StructureCheck::Malformed),
            ("ÉE89370400440532013000", &strict, StructureCheck::CountryUnrecognized),
        ];

        for (input, policy, expected) in test_cases {
            assert_eq!(
                check_structure(&table, policy, input),
                expected,
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn pseudo_layout_bounds() {
        let table = standard();
        let permissive = AcceptancePolicy::new().allow_unrecognized_country(true);
        let longest = format!("CA03{}", "1".repeat(35));
        let too_long = format!("CA03{}", "1".repeat(36));

        assert_eq!(
            check_structure(&table, &permissive, &longest),
            StructureCheck::Matched
        );
        assert_eq!(
            check_structure(&table, &permissive, &too_long),
            StructureCheck::Malformed
        );
    }

    #[test]
    fn known_countries_never_fall_back_to_pseudo_layout() {
        let table = standard();
        let permissive = AcceptancePolicy::new().allow_unrecognized_country(true);
        // fits the pseudo layout but not the German one
        assert_eq!(
            check_structure(&table, &permissive, "DE891234567890"),
            StructureCheck::Malformed
        );
    }
}
