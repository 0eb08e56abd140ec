//! ISO 7064 MOD 97-10 checksum arithmetic.
//!
//! The IBAN check is a mod-97 remainder over a digit string that can be
//! far longer than any fixed-width integer (every letter expands to two
//! digits), so the reduction proceeds in bounded windows: a remainder of
//! at most 96 concatenated with at most 7 new digits is at most 9 digits,
//! which is always safe to evaluate directly.

use std::fmt::Write as _;

/// Compute the mod-97 remainder of an IBAN-shaped string.
///
/// The first four characters (country code + check-digit field) are
/// moved to the end, letters are expanded to their two-digit values
/// (A=10 .. Z=35) and the resulting digit string is reduced window by
/// window. A structurally valid IBAN yields remainder 1.
///
/// The result is only meaningful for uppercase alphanumeric input;
/// callers are expected to uppercase and pattern-validate first. Other
/// input never panics but produces an arbitrary remainder.
///
/// # Examples
/// ```
/// use iban_core::checksum::mod97;
///
/// assert_eq!(mod97("GB29NWBK60161331926819"), 1);
/// assert_eq!(mod97("GB00NWBK60161331926819"), 69);
/// ```
#[must_use]
pub fn mod97(iban: &str) -> u32 {
    // Rearrange: BBAN + country code + check digits.
    let chars: Vec<char> = iban.chars().collect();
    let rearranged: String = if chars.len() > 4 {
        chars[4..].iter().chain(chars[..4].iter()).collect()
    } else {
        chars.iter().collect()
    };

    // Expand every non-digit to its numeric value; digits pass through.
    let mut digits = String::with_capacity(rearranged.len() * 2);
    for c in rearranged.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            // A=10 .. Z=35 for uppercase letters.
            let _ = write!(digits, "{}", (c as u32).wrapping_sub(55));
        }
    }

    // First window of up to 9 digits, then windows of up to 7 digits
    // appended to the running remainder.
    let first = digits.len().min(9);
    let mut remainder = append_window(0, &digits[..first]);
    let mut pos = first;
    while pos < digits.len() {
        let end = digits.len().min(pos + 7);
        remainder = append_window(remainder, &digits[pos..end]);
        pos = end;
    }

    remainder
}

/// Concatenate a digit window onto the running remainder and reduce.
///
/// `window` holds at most 9 digits, so the intermediate value stays
/// below 10^11 and fits a `u64` with room to spare.
#[allow(clippy::cast_possible_truncation)] // the remainder is < 97
fn append_window(remainder: u32, window: &str) -> u32 {
    let value = window
        .bytes()
        .fold(u64::from(remainder), |acc, b| acc * 10 + u64::from(b - b'0'));
    (value % 97) as u32
}

/// Compute the two check digits for an IBAN-shaped string whose
/// check-digit field is set to `"00"`.
///
/// Returns `98 - mod97(iban)` as a zero-left-padded two-character
/// string. The caller is responsible for format correctness; no
/// validation happens here.
///
/// # Examples
/// ```
/// use iban_core::checksum::check_digits;
///
/// assert_eq!(check_digits("GB00NWBK60161331926819"), "29");
/// ```
#[must_use]
pub fn check_digits(iban: &str) -> String {
    format!("{:02}", 98 - mod97(iban))
}
