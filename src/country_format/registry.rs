//! ISO 13616 BBAN formats, plus IBAN-shaped national formats of countries outside
//! the registry.
//!
//! Segment notation: `n` digits, `a` upper-case letters, `c` upper-case alphanumerics.
//! The declared length is the full IBAN length (country code and check digits included)
//! and is checked against the segments when the table is built.

use crate::country_format::{BbanSegment, CharClass, CountryFormatSpec, RegistryKind};

macro_rules! char_class {
    (n) => {
        CharClass::Digit
    };
    (a) => {
        CharClass::UpperLetter
    };
    (c) => {
        CharClass::Alphanumeric
    };
}

macro_rules! entry {
    ($kind:expr, $code:literal, $iban_length:literal; $($length:literal $class:ident),+) => {
        CountryFormatSpec {
            country_code: $code,
            iban_length: $iban_length,
            bban: &[$(BbanSegment {
                char_class: char_class!($class),
                length: $length,
            }),+],
            kind: $kind,
        }
    };
}

macro_rules! iso {
    ($($tokens:tt)+) => {
        entry!(RegistryKind::Iso13616, $($tokens)+)
    };
}

macro_rules! unofficial {
    ($($tokens:tt)+) => {
        entry!(RegistryKind::Unofficial, $($tokens)+)
    };
}

pub static STANDARD_REGISTRY: &[CountryFormatSpec] = &[
    iso!("AD", 24; 4 n, 4 n, 12 c),
    iso!("AE", 23; 3 n, 16 n),
    iso!("AL", 28; 8 n, 16 c),
    iso!("AT", 20; 5 n, 11 n),
    iso!("AZ", 28; 4 a, 20 c),
    iso!("BA", 20; 3 n, 3 n, 8 n, 2 n),
    iso!("BE", 16; 3 n, 7 n, 2 n),
    iso!("BG", 22; 4 a, 4 n, 2 n, 8 c),
    iso!("BH", 22; 4 a, 14 c),
    iso!("BI", 27; 5 n, 5 n, 11 n, 2 n),
    iso!("BR", 29; 8 n, 5 n, 10 n, 1 a, 1 c),
    iso!("BY", 28; 4 c, 4 n, 16 c),
    iso!("CH", 21; 5 n, 12 c),
    iso!("CR", 22; 4 n, 14 n),
    iso!("CY", 28; 3 n, 5 n, 16 c),
    iso!("CZ", 24; 4 n, 6 n, 10 n),
    iso!("DE", 22; 8 n, 10 n),
    iso!("DJ", 27; 5 n, 5 n, 11 n, 2 n),
    iso!("DK", 18; 4 n, 9 n, 1 n),
    iso!("DO", 28; 4 c, 20 n),
    iso!("EE", 20; 2 n, 2 n, 11 n, 1 n),
    iso!("EG", 29; 4 n, 4 n, 17 n),
    iso!("ES", 24; 4 n, 4 n, 1 n, 1 n, 10 n),
    iso!("FI", 18; 3 n, 11 n),
    iso!("FK", 18; 2 a, 12 n),
    iso!("FO", 18; 4 n, 9 n, 1 n),
    iso!("FR", 27; 5 n, 5 n, 11 c, 2 n),
    iso!("GB", 22; 4 a, 6 n, 8 n),
    iso!("GE", 22; 2 a, 16 n),
    iso!("GI", 23; 4 a, 15 c),
    iso!("GL", 18; 4 n, 9 n, 1 n),
    iso!("GR", 27; 3 n, 4 n, 16 c),
    iso!("GT", 28; 4 c, 20 c),
    iso!("HR", 21; 7 n, 10 n),
    iso!("HU", 28; 3 n, 4 n, 1 n, 15 n, 1 n),
    iso!("IE", 22; 4 a, 6 n, 8 n),
    iso!("IL", 23; 3 n, 3 n, 13 n),
    iso!("IQ", 23; 4 a, 3 n, 12 n),
    iso!("IS", 26; 4 n, 2 n, 6 n, 10 n),
    iso!("IT", 27; 1 a, 5 n, 5 n, 12 c),
    iso!("JO", 30; 4 a, 4 n, 18 c),
    iso!("KW", 30; 4 a, 22 c),
    iso!("KZ", 20; 3 n, 13 c),
    iso!("LB", 28; 4 n, 20 c),
    iso!("LC", 32; 4 a, 24 c),
    iso!("LI", 21; 5 n, 12 c),
    iso!("LT", 20; 5 n, 11 n),
    iso!("LU", 20; 3 n, 13 c),
    iso!("LV", 21; 4 a, 13 c),
    iso!("LY", 25; 3 n, 3 n, 15 n),
    iso!("MC", 27; 5 n, 5 n, 11 c, 2 n),
    iso!("MD", 24; 2 c, 18 c),
    iso!("ME", 22; 3 n, 13 n, 2 n),
    iso!("MK", 19; 3 n, 10 c, 2 n),
    iso!("MN", 20; 4 n, 12 n),
    iso!("MR", 27; 5 n, 5 n, 11 n, 2 n),
    iso!("MT", 31; 4 a, 5 n, 18 c),
    iso!("MU", 30; 4 a, 2 n, 2 n, 12 n, 3 n, 3 a),
    iso!("NI", 28; 4 a, 20 n),
    iso!("NL", 18; 4 a, 10 n),
    iso!("NO", 15; 4 n, 6 n, 1 n),
    iso!("OM", 23; 3 n, 16 c),
    iso!("PK", 24; 4 a, 16 c),
    iso!("PL", 28; 8 n, 16 n),
    iso!("PS", 29; 4 a, 21 c),
    iso!("PT", 25; 4 n, 4 n, 11 n, 2 n),
    iso!("QA", 29; 4 a, 21 c),
    iso!("RO", 24; 4 a, 16 c),
    iso!("RS", 22; 3 n, 13 n, 2 n),
    iso!("RU", 33; 9 n, 5 n, 15 c),
    iso!("SA", 24; 2 n, 18 c),
    iso!("SC", 31; 4 a, 2 n, 2 n, 16 n, 3 a),
    iso!("SD", 18; 2 n, 12 n),
    iso!("SE", 24; 3 n, 16 n, 1 n),
    iso!("SI", 19; 5 n, 8 n, 2 n),
    iso!("SK", 24; 4 n, 6 n, 10 n),
    iso!("SM", 27; 1 a, 5 n, 5 n, 12 c),
    iso!("SO", 23; 4 n, 3 n, 12 n),
    iso!("ST", 25; 4 n, 4 n, 11 n, 2 n),
    iso!("SV", 28; 4 a, 20 n),
    iso!("TL", 23; 3 n, 14 n, 2 n),
    iso!("TN", 24; 2 n, 3 n, 13 n, 2 n),
    iso!("TR", 26; 5 n, 1 n, 16 c),
    iso!("UA", 29; 6 n, 19 c),
    iso!("VA", 22; 3 n, 15 n),
    iso!("VG", 24; 4 a, 16 n),
    iso!("XK", 20; 4 n, 10 n, 2 n),
    iso!("YE", 30; 4 a, 4 n, 18 c),
    // Not part of ISO 13616, but these countries issue account numbers in IBAN form.
    unofficial!("AO", 25; 21 n),
    unofficial!("BF", 28; 2 c, 22 n),
    unofficial!("BJ", 28; 2 c, 22 n),
    unofficial!("CF", 27; 23 n),
    unofficial!("CG", 27; 23 n),
    unofficial!("CI", 28; 2 c, 22 n),
    unofficial!("CM", 27; 23 n),
    unofficial!("CV", 25; 21 n),
    unofficial!("DZ", 26; 22 n),
    unofficial!("GA", 27; 23 n),
    unofficial!("GQ", 27; 23 n),
    unofficial!("GW", 25; 2 c, 19 n),
    unofficial!("HN", 28; 4 a, 20 n),
    unofficial!("IR", 26; 22 n),
    unofficial!("KM", 27; 23 n),
    unofficial!("MA", 28; 24 n),
    unofficial!("MG", 27; 23 n),
    unofficial!("ML", 28; 2 c, 22 n),
    unofficial!("MZ", 25; 21 n),
    unofficial!("NE", 28; 2 a, 22 n),
    unofficial!("SN", 28; 2 c, 22 n),
    unofficial!("TD", 27; 23 n),
    unofficial!("TG", 28; 2 a, 22 n),
];

#[cfg(test)]
mod test {
    use super::STANDARD_REGISTRY;
    use crate::country_format::RegistryKind;
    use std::collections::HashSet;

    #[test]
    fn country_codes_are_unique() {
        let mut seen = HashSet::new();
        for spec in STANDARD_REGISTRY {
            assert!(
                seen.insert(spec.country_code),
                "duplicate country code {}",
                spec.country_code
            );
        }
    }

    #[test]
    fn declared_lengths_match_segments() {
        for spec in STANDARD_REGISTRY {
            assert_eq!(
                spec.bban_length() + 4,
                spec.iban_length,
                "country code {}",
                spec.country_code
            );
        }
    }

    #[test]
    fn israel_and_iraq_have_distinct_entries() {
        let israel = STANDARD_REGISTRY
            .iter()
            .find(|spec| spec.country_code == "IL")
            .unwrap();
        let iraq = STANDARD_REGISTRY
            .iter()
            .find(|spec| spec.country_code == "IQ")
            .unwrap();
        assert_eq!(israel.iban_length, 23);
        assert_eq!(iraq.iban_length, 23);
        assert_ne!(israel.bban, iraq.bban);
    }

    #[test]
    fn registry_size() {
        let iso = STANDARD_REGISTRY
            .iter()
            .filter(|spec| spec.kind == RegistryKind::Iso13616)
            .count();
        let unofficial = STANDARD_REGISTRY.len() - iso;
        assert_eq!(iso, 88);
        assert_eq!(unofficial, 23);
    }
}
