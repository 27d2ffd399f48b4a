//! Random RUT generation.

use rand::{Rng, RngCore};

use crate::check_digit::check_digit_of_digits;
use crate::format::format;
use crate::types::Style;

/// Default number of body digits for a generated RUT.
pub const DEFAULT_LENGTH: usize = 8;

/// A source of uniformly distributed integers.
///
/// Implemented for every [`rand::RngCore`]. Tests can supply a scripted
/// source to make generation deterministic.
pub trait RandomSource {
    /// Return an integer drawn uniformly from `0..bound`. `bound` is never 0.
    fn next_below(&mut self, bound: u64) -> u64;
}

impl<R: RngCore> RandomSource for R {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.gen_range(0..bound)
    }
}

/// Generate a random valid RUT with `length` body digits using the thread RNG.
///
/// Returns an empty string when `length` is 0.
pub fn generate(length: usize, style: Style) -> String {
    generate_with(&mut rand::thread_rng(), length, style)
}

/// Generate a random valid RUT drawing from `source`.
///
/// The body is a uniform draw below `10^length`, taken one decimal digit at a
/// time. A draw with fewer than `length` significant digits is discarded and
/// redrawn in full. For `length == 1` the body `0` has one digit and is kept;
/// its canonical form `00` formats as `-`.
pub fn generate_with<R: RandomSource + ?Sized>(
    source: &mut R,
    length: usize,
    style: Style,
) -> String {
    if length == 0 {
        return String::new();
    }

    let mut digits = String::with_capacity(length + 1);
    loop {
        digits.clear();
        digits.extend((0..length).map(|_| (b'0' + (source.next_below(10) % 10) as u8) as char));

        if length == 1 || !digits.starts_with('0') {
            break;
        }
    }

    // The body is all digits, so the check digit always exists.
    if let Some(check) = check_digit_of_digits(&digits) {
        digits.push(check.as_char());
    }

    format(&digits, style)
}
