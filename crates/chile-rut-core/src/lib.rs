//! # Chile RUT Core
//!
//! Pure primitives for Chilean RUT (Rol Único Tributario) identifiers:
//! normalization, modulo-11 check digits, validation, formatting,
//! generation and comparison.
//!
//! This crate contains no I/O and no shared state. Every function except
//! the generator is a deterministic mapping from input to output.
//!
//! ## Key Types
//!
//! - [`Rut`] - A validated identifier: numeric body plus check digit
//! - [`CheckDigit`] - The verification character, `0`-`9` or `K`
//! - [`Style`] - Dotted (`12.345.678-5`) or plain (`12345678-5`) rendering
//! - [`RandomSource`] - Injected randomness for [`generate_with`]
//!
//! ## Canonical Form
//!
//! Raw input in any mix of dots, dashes and letter case reduces to digits
//! followed by one check character. See the [`canonical`] module.

pub mod canonical;
pub mod check_digit;
pub mod compare;
pub mod error;
pub mod format;
pub mod generate;
pub mod types;
pub mod validation;

pub use canonical::normalize;
pub use check_digit::{check_digit, check_digit_of_digits};
pub use compare::compare;
pub use error::{Result, RutError};
pub use format::format;
pub use generate::{generate, generate_with, RandomSource, DEFAULT_LENGTH};
pub use types::{CheckDigit, Rut, Style};
pub use validation::{is_valid, is_well_formed};
