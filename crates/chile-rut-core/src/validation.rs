//! RUT validation: structural gate on the raw string, then check digit.

use regex::Regex;
use std::sync::OnceLock;

use crate::canonical::{normalize, split_check};
use crate::check_digit::check_digit_of_digits;
use crate::types::CheckDigit;

/// Raw shape of a RUT: 1-3 digits, then groups of 3 digits each optionally
/// preceded by a dot, an optional dash, and one check character.
const STRUCTURE: &str = r"^0*([0-9]{1,3}(\.?[0-9]{3})*)-?([0-9kK])$";

fn structure() -> &'static Regex {
    static STRUCTURE_RE: OnceLock<Regex> = OnceLock::new();
    STRUCTURE_RE.get_or_init(|| Regex::new(STRUCTURE).expect("RUT structure pattern is valid"))
}

/// Check whether a raw string has the shape of a RUT.
///
/// Dots, when present, must sit between proper 3-digit groups. The check
/// digit is not verified.
pub fn is_well_formed(raw: &str) -> bool {
    !raw.starts_with('0') && structure().is_match(raw)
}

/// Decide whether a raw RUT string is well-formed and carries the correct
/// check digit.
///
/// This performs:
/// - Leading zero rejection (`"0-0"`, `"01-9"` are never valid)
/// - Structural match on the raw, unnormalized input
/// - Check digit recomputation on the normalized body
///
/// ```
/// use chile_rut_core::is_valid;
///
/// assert!(is_valid("1-9"));
/// assert!(is_valid("13.552.901-k"));
/// assert!(!is_valid("1-0"));
/// assert!(!is_valid("0-K"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    if !is_well_formed(raw) {
        return false;
    }

    let canonical = normalize(raw);
    let (body, supplied) = split_check(&canonical);

    let Some(supplied) = supplied.chars().next().and_then(CheckDigit::from_char) else {
        return false;
    };

    check_digit_of_digits(body) == Some(supplied)
}
