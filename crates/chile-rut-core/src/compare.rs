//! Equality of RUTs across formatting differences.

use crate::canonical::normalize;
use crate::error::{Result, RutError};
use crate::validation::is_valid;

/// Decide whether two raw strings denote the same RUT.
///
/// Both inputs are normalized first and the normalized forms are validated.
/// A malformed operand is an error rather than a mismatch, so callers can
/// tell "different RUTs" apart from "not comparable".
///
/// ```
/// use chile_rut_core::compare;
///
/// assert_eq!(compare("11.111.111-1", "11111111-1"), Ok(true));
/// assert_eq!(compare("11.111.111-1", "12.345.678-5"), Ok(false));
/// assert!(compare("11.111.111-2", "12.345.678-9").is_err());
/// ```
pub fn compare(left: &str, right: &str) -> Result<bool> {
    let left_canonical = normalize(left);
    let right_canonical = normalize(right);

    if !is_valid(&left_canonical) {
        return Err(RutError::invalid(left));
    }
    if !is_valid(&right_canonical) {
        return Err(RutError::invalid(right));
    }

    Ok(left_canonical == right_canonical)
}
