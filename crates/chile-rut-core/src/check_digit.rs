//! Modulo-11 check digit computation.
//!
//! Digits are weighted from least to most significant with the cycle
//! `2, 3, 4, 5, 6, 7`. The running sum is seeded with 1 and each digit is
//! multiplied by `9 - (position % 6)`, which folds the usual
//! `11 - (sum % 11)` step into the accumulator: a final sum of 0 yields `K`,
//! any other sum `s` yields the digit `s - 1`.

use crate::types::CheckDigit;

/// Compute the check digit for a numeric body.
///
/// A body of 0 processes no digits and yields `0`.
///
/// ```
/// use chile_rut_core::{check_digit, CheckDigit};
///
/// assert_eq!(check_digit(1), CheckDigit::Digit(9));
/// assert_eq!(check_digit(6), CheckDigit::K);
/// ```
pub fn check_digit(mut body: u64) -> CheckDigit {
    let mut sum = 1u64;
    let mut position = 0u64;

    while body > 0 {
        sum = (sum + (body % 10) * (9 - position % 6)) % 11;
        position += 1;
        body /= 10;
    }

    CheckDigit::from_sum(sum as u8)
}

/// Compute the check digit for a body given as a decimal digit string.
///
/// Agrees with [`check_digit`] on every value that fits in a `u64`, and
/// accepts bodies of any length. Leading zeros contribute nothing. Returns
/// `None` if the string contains anything other than ASCII digits.
pub fn check_digit_of_digits(digits: &str) -> Option<CheckDigit> {
    let mut sum = 1u32;

    for (position, byte) in digits.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let weight = 9 - (position % 6) as u32;
        sum = (sum + u32::from(byte - b'0') * weight) % 11;
    }

    Some(CheckDigit::from_sum(sum as u8))
}
