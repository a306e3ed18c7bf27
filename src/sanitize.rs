/// Upper-cases the input (ASCII only) and drops every character outside `[A-Z0-9]`.
/// Separators, whitespace and non-ASCII characters are all removed.
pub fn canonicalize(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Paper format of an identifier: the canonical form split into groups of four
/// characters separated by a single space (e.g. `DE89 3704 0044 0532 0130 00`).
pub fn to_print_format(input: &str) -> String {
    let canonical = canonicalize(input);
    let mut formatted = String::with_capacity(canonical.len() + canonical.len() / 4);
    for (i, c) in canonical.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

#[cfg(test)]
mod test {
    use super::{canonicalize, to_print_format};

    #[test]
    fn test_canonicalize() {
        let test_cases = vec![
            ("DE89 3704 0044 0532 0130 00", "DE89370400440532013000"),
            ("de89-3704-0044", "DE8937040044"),
            ("  belade.bexxx ", "BELADEBEXXX"),
            ("ÀñôΑβω", ""),
            ("a\tb\nc/1_2", "ABC12"),
            ("", ""),
        ];

        for (input, expected) in test_cases {
            assert_eq!(canonicalize(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let once = canonicalize("gb29 nwbk 6016-1331-9268-19 ✓");
        assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn test_print_format() {
        assert_eq!(
            to_print_format("DE89370400440532013000"),
            "DE89 3704 0044 0532 0130 00"
        );
        assert_eq!(to_print_format("no9386011117947"), "NO93 8601 1117 947");
        assert_eq!(to_print_format("ABCD"), "ABCD");
        assert_eq!(to_print_format(""), "");
    }
}
