//! ISO 7064 MOD 97-10, as used by the IBAN check digits.
//!
//! Letters are transliterated to two-digit numerals (`A` = 10 ... `Z` = 35) and the
//! resulting decimal numeral is reduced one digit at a time, so the running remainder
//! never exceeds `96 * 10 + 9` whatever the length of the input.

const MODULUS: u32 = 97;

#[inline]
fn fold_digit(remainder: u32, digit: u32) -> u32 {
    (remainder * 10 + digit) % MODULUS
}

/// Folds one `[0-9A-Z]` byte into the remainder, `None` for any other byte.
#[inline]
fn fold_alphanumeric(remainder: u32, byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(fold_digit(remainder, u32::from(byte - b'0'))),
        b'A'..=b'Z' => {
            let value = u32::from(byte - b'A') + 10;
            Some(fold_digit(fold_digit(remainder, value / 10), value % 10))
        }
        _ => None,
    }
}

fn alphanumeric_remainder(bytes: impl IntoIterator<Item = u8>) -> Option<u32> {
    bytes.into_iter().try_fold(0, fold_alphanumeric)
}

/// Remainder modulo 97 of a decimal numeral of arbitrary length.
///
/// Returns `None` if the numeral contains anything but ASCII digits.
pub fn mod97(numeral: &str) -> Option<u32> {
    numeral.bytes().try_fold(0, |remainder, byte| {
        if byte.is_ascii_digit() {
            Some(fold_digit(remainder, u32::from(byte - b'0')))
        } else {
            None
        }
    })
}

/// Replaces each upper-case letter with its two-digit numeral, keeping digits as is.
///
/// Returns `None` if the value contains anything outside `[0-9A-Z]`.
pub fn transliterate(value: &str) -> Option<String> {
    let mut numeral = String::with_capacity(value.len() * 2);
    for byte in value.bytes() {
        match byte {
            b'0'..=b'9' => numeral.push(char::from(byte)),
            b'A'..=b'Z' => {
                let value = u32::from(byte - b'A') + 10;
                numeral.push_str(&value.to_string());
            }
            _ => return None,
        }
    }
    Some(numeral)
}

/// Moves the country code and check digits (the first four characters) to the end.
///
/// Returns `None` for values shorter than four bytes or that cannot be split there.
pub fn rearrange(value: &str) -> Option<String> {
    if value.len() < 4 || !value.is_char_boundary(4) {
        return None;
    }
    let (head, tail) = value.split_at(4);
    Some(format!("{tail}{head}"))
}

/// Checks the MOD 97-10 check digits of a canonical (upper-case, separator free) IBAN.
///
/// Equivalent to `mod97(transliterate(rearrange(iban))) == 1` without building the
/// intermediate strings.
pub fn is_valid_iban_checksum(iban: &str) -> bool {
    if iban.len() < 4 {
        return false;
    }
    let (head, tail) = iban.as_bytes().split_at(4);
    alphanumeric_remainder(tail.iter().chain(head).copied()) == Some(1)
}

/// Computes the two check digits making `country_code + digits + bban` a valid IBAN.
///
/// Returns `None` unless the country code is two upper-case letters and the BBAN is
/// made of `[0-9A-Z]`.
pub fn compute_check_digits(country_code: &str, bban: &str) -> Option<String> {
    if country_code.len() != 2 || !country_code.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let remainder =
        alphanumeric_remainder(bban.bytes().chain(country_code.bytes()).chain(*b"00"))?;
    Some(format!("{:02}", 98 - remainder))
}
