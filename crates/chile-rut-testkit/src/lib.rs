//! # Chile RUT Testkit
//!
//! Testing utilities for the Chile RUT crates.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected outputs for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic random sources and seeded toolkits
//!
//! ## Golden Vectors
//!
//! ```rust
//! use chile_rut_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{name}: {actual}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use chile_rut_testkit::generators::{rut_from_params, RutParams};
//!
//! proptest! {
//!     #[test]
//!     fn validity_follows_check_digit(params: RutParams) {
//!         let raw = rut_from_params(&params);
//!         prop_assert_eq!(chile_rut::is_valid(&raw), params.is_correct());
//!     }
//! }
//! ```
//!
//! ## Deterministic Generation
//!
//! ```rust
//! use chile_rut::{generate_with, Style};
//! use chile_rut_testkit::fixtures::ScriptedSource;
//!
//! let mut source = ScriptedSource::digits_of(12_345_678);
//! assert_eq!(generate_with(&mut source, 8, Style::Dotted), "12.345.678-5");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{seeded, seeded_fixtures, ScriptedSource, TestFixture};
pub use generators::{rut_from_params, RutParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVectors};
