//! Toolkit configuration.

use chile_rut_core::{Style, DEFAULT_LENGTH};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolkitError};

/// Longest body a configured generator may produce.
pub const MAX_GENERATED_LENGTH: usize = 64;

/// Configuration for the Toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Number of body digits for generated RUTs.
    pub default_length: usize,
    /// Rendering style used when none is given explicitly.
    pub style: Style,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            style: Style::Dotted,
        }
    }
}

impl ToolkitConfig {
    /// Decode a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.default_length > MAX_GENERATED_LENGTH {
            return Err(ToolkitError::Config(format!(
                "default_length {} exceeds maximum of {}",
                self.default_length, MAX_GENERATED_LENGTH
            )));
        }
        Ok(())
    }
}
