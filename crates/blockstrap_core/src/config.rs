//! Bootstrap configuration
//!
//! `BootstrapConfig` is the whole configuration surface of the generator. Every
//! field has a serde default, so an empty YAML document deserializes to the
//! default configuration:
//!
//! ```ignore
//! use blockstrap_core::config::{BootstrapConfig, BlockLengthRange};
//!
//! let config = BootstrapConfig::default()
//!     .with_noise_frac(0.05)
//!     .with_block_length(BlockLengthRange::new(5, Some(20)));
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInputError, Result};

fn default_noise_frac() -> f64 {
    0.10
}

fn default_min_length() -> usize {
    1
}

/// Inclusive range of block lengths to draw from.
///
/// The upper bound is always capped at `n / 2` for a series of length `n`;
/// `max: None` means "use the cap".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLengthRange {
    #[serde(default = "default_min_length")]
    pub min: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl Default for BlockLengthRange {
    fn default() -> Self {
        Self {
            min: default_min_length(),
            max: None,
        }
    }
}

impl BlockLengthRange {
    #[must_use]
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Effective `(min, max)` block lengths for a series of length `series_len`.
    pub fn resolve(&self, series_len: usize) -> Result<(usize, usize)> {
        if series_len < 2 {
            return Err(InvalidInputError::SeriesTooShort { len: series_len });
        }
        let cap = series_len / 2;
        let max = self.max.map_or(cap, |m| m.min(cap));
        if self.min == 0 || self.min > max {
            return Err(InvalidInputError::InvalidBlockLength {
                min: self.min,
                max,
                series_len,
            });
        }
        Ok((self.min, max))
    }
}

/// Configuration for block-bootstrap resampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Noise standard deviation as a fraction of the source series' standard deviation
    #[serde(default = "default_noise_frac")]
    pub noise_frac: f64,

    /// Range of block lengths
    #[serde(default)]
    pub block_length: BlockLengthRange,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            noise_frac: default_noise_frac(),
            block_length: BlockLengthRange::default(),
        }
    }
}

impl BootstrapConfig {
    /// Create a config with a different noise fraction
    #[must_use]
    pub fn with_noise_frac(mut self, noise_frac: f64) -> Self {
        self.noise_frac = noise_frac;
        self
    }

    /// Create a config with a different block length range
    #[must_use]
    pub fn with_block_length(mut self, block_length: BlockLengthRange) -> Self {
        self.block_length = block_length;
        self
    }

    /// Check settings that do not depend on the input series.
    pub fn validate(&self) -> Result<()> {
        if !self.noise_frac.is_finite() || self.noise_frac < 0.0 {
            return Err(InvalidInputError::InvalidNoiseFraction(self.noise_frac));
        }
        Ok(())
    }
}
