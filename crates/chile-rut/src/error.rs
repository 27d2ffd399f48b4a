//! Error types for the Toolkit.

use chile_rut_core::RutError;
use thiserror::Error;

/// Errors that can occur during Toolkit operations.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// An input was not a valid RUT.
    #[error("rut error: {0}")]
    Rut(#[from] RutError),

    /// Configuration could not be decoded or is out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ToolkitError {
    fn from(e: serde_json::Error) -> Self {
        ToolkitError::Config(e.to_string())
    }
}

/// Result type for Toolkit operations.
pub type Result<T> = std::result::Result<T, ToolkitError>;
