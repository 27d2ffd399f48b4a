//! Strong type definitions for RUT identifiers.
//!
//! Raw strings are only converted to and from these types at the
//! normalizer and formatter boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::canonical::{normalize, split_check};
use crate::check_digit::check_digit;
use crate::error::{Result, RutError};
use crate::format::format;
use crate::validation::is_valid;

/// The modulo-11 verification character of a RUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigit {
    /// A decimal digit, always in `0..=9`.
    Digit(u8),
    /// The letter `K`, standing for a remainder of ten.
    K,
}

impl CheckDigit {
    /// Map a reduced weighted sum (`0..=10`) to its check character.
    ///
    /// A sum of zero maps to `K`, any other sum `s` to the digit `s - 1`.
    pub(crate) const fn from_sum(sum: u8) -> Self {
        match sum {
            0 => CheckDigit::K,
            s => CheckDigit::Digit(s - 1),
        }
    }

    /// Parse a check character. Accepts `k` as well as `K`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'k' | 'K' => Some(CheckDigit::K),
            '0'..='9' => Some(CheckDigit::Digit(c as u8 - b'0')),
            _ => None,
        }
    }

    /// The check character, upper-case for `K`.
    pub const fn as_char(&self) -> char {
        match self {
            CheckDigit::Digit(d) => (b'0' + *d) as char,
            CheckDigit::K => 'K',
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Display style for a formatted RUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Body grouped in threes with dots: `12.345.678-5`.
    #[default]
    Dotted,
    /// Body and check character joined by a dash only: `12345678-5`.
    Plain,
}

impl Style {
    /// Pick a style from a "with dots" flag.
    pub const fn from_dots(with_dots: bool) -> Self {
        if with_dots {
            Style::Dotted
        } else {
            Style::Plain
        }
    }
}

/// A validated RUT: a numeric body with no leading zeros plus its check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    digits: String,
    check: CheckDigit,
}

impl Rut {
    /// Build a RUT from its numeric body, computing the check digit.
    pub fn from_body(body: NonZeroU64) -> Self {
        Self {
            digits: body.get().to_string(),
            check: check_digit(body.get()),
        }
    }

    /// Parse a raw RUT string in any supported format.
    ///
    /// The raw input must pass [`is_valid`]; leading zeros and malformed dot
    /// grouping are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        if !is_valid(raw) {
            return Err(RutError::invalid(raw));
        }

        let canonical = normalize(raw);
        let (digits, check) = split_check(&canonical);
        let check = check
            .chars()
            .next()
            .and_then(CheckDigit::from_char)
            .ok_or_else(|| RutError::invalid(raw))?;

        Ok(Self {
            digits: digits.to_string(),
            check,
        })
    }

    /// The body digits, without separators.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The body as an integer, if it fits in a `u64`.
    pub fn body(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    /// The check digit.
    pub const fn check_digit(&self) -> CheckDigit {
        self.check
    }

    /// The canonical form: body digits followed by the check character.
    pub fn canonical(&self) -> String {
        let mut out = String::with_capacity(self.digits.len() + 1);
        out.push_str(&self.digits);
        out.push(self.check.as_char());
        out
    }

    /// Render in the given style.
    pub fn format(&self, style: Style) -> String {
        format(&self.canonical(), style)
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Style::Dotted))
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
