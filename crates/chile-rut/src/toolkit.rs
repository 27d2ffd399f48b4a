//! The Toolkit: configured entry point for RUT operations.
//!
//! The Toolkit pairs the pure core functions with configured defaults and an
//! owned random source, and reports outcomes through `tracing`.

use chile_rut_core::{CheckDigit, RandomSource, Rut, Style};
use rand::rngs::ThreadRng;

use crate::config::ToolkitConfig;
use crate::error::Result;

/// The main Toolkit struct.
///
/// Provides:
/// - Normalizing and validating raw RUT strings
/// - Formatting in the configured style
/// - Generating random RUTs from the owned random source
/// - Comparing RUTs across formatting differences
pub struct Toolkit<R: RandomSource = ThreadRng> {
    /// Configuration.
    config: ToolkitConfig,
    /// Randomness for generation.
    source: R,
}

impl Toolkit<ThreadRng> {
    /// Create a toolkit backed by the thread RNG.
    pub fn new(config: ToolkitConfig) -> Result<Self> {
        Self::with_source(config, rand::thread_rng())
    }
}

impl Default for Toolkit<ThreadRng> {
    fn default() -> Self {
        Self::from_source(rand::thread_rng())
    }
}

impl<R: RandomSource> Toolkit<R> {
    /// Create a toolkit drawing randomness from `source`.
    pub fn with_source(config: ToolkitConfig, source: R) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            default_length = config.default_length,
            style = ?config.style,
            "toolkit configured"
        );
        Ok(Self { config, source })
    }

    /// Create a toolkit with the default configuration drawing from `source`.
    pub fn from_source(source: R) -> Self {
        Self {
            config: ToolkitConfig::default(),
            source,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pure Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Strip formatting from a raw RUT string.
    pub fn normalize(&self, raw: &str) -> String {
        chile_rut_core::normalize(raw)
    }

    /// Check whether a raw string is a valid RUT.
    pub fn is_valid(&self, raw: &str) -> bool {
        let valid = chile_rut_core::is_valid(raw);
        tracing::trace!(input = raw, valid, "validated rut");
        valid
    }

    /// Compute the check digit for a numeric body.
    pub fn check_digit(&self, body: u64) -> CheckDigit {
        chile_rut_core::check_digit(body)
    }

    /// Parse a raw string into a [`Rut`].
    pub fn parse(&self, raw: &str) -> Result<Rut> {
        Ok(Rut::parse(raw)?)
    }

    /// Format in the configured style.
    pub fn format(&self, raw: &str) -> String {
        self.format_as(raw, self.config.style)
    }

    /// Format in an explicit style.
    pub fn format_as(&self, raw: &str, style: Style) -> String {
        chile_rut_core::format(raw, style)
    }

    /// Compare two raw strings for RUT equality.
    ///
    /// Fails with [`chile_rut_core::RutError::InvalidIdentifier`] if either
    /// side is invalid.
    pub fn compare(&self, left: &str, right: &str) -> Result<bool> {
        match chile_rut_core::compare(left, right) {
            Ok(equal) => Ok(equal),
            Err(e) => {
                tracing::debug!("Cannot compare {:?} with {:?}: {}", left, right, e);
                Err(e.into())
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────────────────────

    /// Generate a RUT with the configured length and style.
    pub fn generate(&mut self) -> String {
        self.generate_as(self.config.default_length, self.config.style)
    }

    /// Generate a RUT with an explicit body length and style.
    pub fn generate_as(&mut self, length: usize, style: Style) -> String {
        let rut = chile_rut_core::generate_with(&mut self.source, length, style);
        tracing::debug!(length, style = ?style, rut = %rut, "generated rut");
        rut
    }

    /// Generate a RUT as a [`Rut`] value.
    ///
    /// Lengths below 2 can produce a body of `0`, which is not a valid RUT,
    /// so the configured length is raised to at least 2.
    pub fn generate_rut(&mut self) -> Result<Rut> {
        let length = self.config.default_length.max(2);
        let raw = self.generate_as(length, Style::Plain);
        Ok(Rut::parse(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chile_rut_core::RutError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(config: ToolkitConfig) -> Toolkit<StdRng> {
        Toolkit::with_source(config, StdRng::seed_from_u64(0x42)).unwrap()
    }

    #[test]
    fn test_default_toolkit() {
        let mut toolkit: Toolkit = Toolkit::default();
        assert_eq!(toolkit.config(), &ToolkitConfig::default());
        assert_eq!(toolkit.generate().len(), 12);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ToolkitConfig {
            default_length: 1000,
            style: Style::Dotted,
        };
        assert!(Toolkit::new(config).is_err());
    }

    #[test]
    fn test_configured_style() {
        let toolkit = seeded(ToolkitConfig {
            default_length: 8,
            style: Style::Plain,
        });
        assert_eq!(toolkit.format("12.345.678-5"), "12345678-5");
        assert_eq!(toolkit.format_as("12345678-5", Style::Dotted), "12.345.678-5");
    }

    #[test]
    fn test_generate_uses_config() {
        let mut toolkit = seeded(ToolkitConfig {
            default_length: 10,
            style: Style::Plain,
        });
        let rut = toolkit.generate();
        assert_eq!(rut.len(), 12);
        assert!(toolkit.is_valid(&rut));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = seeded(ToolkitConfig::default());
        let mut b = seeded(ToolkitConfig::default());
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_generate_rut() {
        let mut toolkit = seeded(ToolkitConfig {
            default_length: 1,
            style: Style::Dotted,
        });
        for _ in 0..32 {
            let rut = toolkit.generate_rut().unwrap();
            assert_eq!(rut.digits().len(), 2);
        }
    }

    #[test]
    fn test_compare_errors_convert() {
        let toolkit: Toolkit = Toolkit::default();
        assert!(toolkit.compare("11.111.111-1", "11111111-1").unwrap());
        assert!(matches!(
            toolkit.compare("11.111.111-2", "12.345.678-9"),
            Err(crate::ToolkitError::Rut(RutError::InvalidIdentifier { .. }))
        ));
    }
}
