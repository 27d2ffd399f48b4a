//! Test fixtures and deterministic random sources.
//!
//! Common setup code for integration tests.

use chile_rut::{RandomSource, Rut, Style, Toolkit, ToolkitConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A random source that replays a fixed script of draws.
///
/// Values are returned in order and the script restarts when exhausted.
/// Every call is recorded with its bound.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<u64>,
    cursor: usize,
    bounds: Vec<u64>,
}

impl ScriptedSource {
    /// Create a source replaying `script`. An empty script always yields 0.
    pub fn new(script: impl Into<Vec<u64>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
            bounds: Vec::new(),
        }
    }

    /// Script the decimal digits of a number, most significant first.
    pub fn digits_of(value: u64) -> Self {
        let digits: Vec<u64> = value
            .to_string()
            .bytes()
            .map(|b| u64::from(b - b'0'))
            .collect();
        Self::new(digits)
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.bounds.len()
    }

    /// Bounds passed to each draw, in order.
    pub fn bounds(&self) -> &[u64] {
        &self.bounds
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.bounds.push(bound);
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}

/// A seeded RNG for reproducible generation.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A test fixture with a deterministic toolkit.
pub struct TestFixture {
    pub toolkit: Toolkit<StdRng>,
}

impl TestFixture {
    /// Create a fixture with the default configuration and seed 0.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create with a deterministic RNG from seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            toolkit: Toolkit::from_source(seeded(seed)),
        }
    }

    /// Create with a seed and an explicit configuration.
    pub fn with_config(seed: u64, config: ToolkitConfig) -> chile_rut::Result<Self> {
        Ok(Self {
            toolkit: Toolkit::with_source(config, seeded(seed))?,
        })
    }

    /// Generate a valid RUT string with `length` body digits.
    pub fn make_valid(&mut self, length: usize, style: Style) -> String {
        self.toolkit.generate_as(length.max(2), style)
    }

    /// Generate a RUT string whose check digit is wrong.
    pub fn make_invalid(&mut self, length: usize, style: Style) -> String {
        let valid = self.make_valid(length, Style::Plain);
        let mut canonical = self.toolkit.normalize(&valid);
        let wrong = match canonical.pop() {
            Some('K') => '0',
            Some('9') => 'K',
            Some(c) => (c as u8 + 1) as char,
            None => '0',
        };
        canonical.push(wrong);
        self.toolkit.format_as(&canonical, style)
    }

    /// Generate a parsed [`Rut`].
    pub fn make_rut(&mut self) -> chile_rut::Result<Rut> {
        self.toolkit.generate_rut()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures with distinct seeds.
pub fn seeded_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count as u64).map(TestFixture::with_seed).collect()
}
