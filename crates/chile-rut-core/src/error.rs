//! Error types for the RUT core.

use thiserror::Error;

/// Errors raised by RUT operations.
///
/// Most operations are total. Only comparison and parsing into [`crate::Rut`]
/// can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    /// The input is not a well-formed RUT or its check digit is wrong.
    #[error("invalid identifier: {input:?}")]
    InvalidIdentifier { input: String },
}

impl RutError {
    pub(crate) fn invalid(input: &str) -> Self {
        RutError::InvalidIdentifier {
            input: input.to_string(),
        }
    }

    /// The offending input.
    pub fn input(&self) -> &str {
        match self {
            RutError::InvalidIdentifier { input } => input,
        }
    }
}

/// Result type for fallible RUT operations.
pub type Result<T> = std::result::Result<T, RutError>;
