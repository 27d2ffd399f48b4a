//! # Chile RUT
//!
//! The unified API for working with Chilean RUT identifiers.
//!
//! ## Overview
//!
//! - **Normalize**: reduce `12.345.678-k` style input to `12345678K`
//! - **Validate**: structural check plus modulo-11 check digit
//! - **Format**: dotted `12.345.678-5` or plain `12345678-5`
//! - **Generate**: random valid RUTs from an injectable random source
//! - **Compare**: equality across formatting, failing on malformed input
//!
//! ## Usage
//!
//! ```rust
//! use chile_rut::{Style, Toolkit, ToolkitConfig};
//!
//! let config = ToolkitConfig::from_json(r#"{"style": "plain"}"#).unwrap();
//! let mut toolkit = Toolkit::new(config).unwrap();
//!
//! assert!(toolkit.is_valid("13.552.901-K"));
//! assert_eq!(toolkit.format("13.552.901-k"), "13552901-K");
//! assert_eq!(toolkit.format_as("13552901K", Style::Dotted), "13.552.901-K");
//! assert!(toolkit.compare("11.111.111-1", "11111111-1").unwrap());
//!
//! let generated = toolkit.generate();
//! assert!(toolkit.is_valid(&generated));
//! ```
//!
//! ## Re-exports
//!
//! - `chile_rut::core` - The pure functions and value types

pub mod config;
pub mod error;
pub mod toolkit;

// Re-export component crates
pub use chile_rut_core as core;

// Re-export main types for convenience
pub use config::{ToolkitConfig, MAX_GENERATED_LENGTH};
pub use error::{Result, ToolkitError};
pub use toolkit::Toolkit;

// Re-export commonly used core types
pub use chile_rut_core::{
    check_digit, compare, format, generate, generate_with, is_valid, normalize, CheckDigit,
    RandomSource, Rut, RutError, Style, DEFAULT_LENGTH,
};
