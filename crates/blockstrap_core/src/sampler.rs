use rand::Rng;

use crate::config::BlockLengthRange;
use crate::error::Result;
use crate::model::Block;

/// Draws random circular blocks over a series of fixed length.
///
/// Construction validates the series length and block range once, so drawing
/// is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSampler {
    series_len: usize,
    min_length: usize,
    max_length: usize,
}

impl BlockSampler {
    /// Sampler over a series of length `series_len` with the given length range.
    pub fn new(series_len: usize, range: &BlockLengthRange) -> Result<Self> {
        let (min_length, max_length) = range.resolve(series_len)?;
        Ok(Self {
            series_len,
            min_length,
            max_length,
        })
    }

    /// Sampler with the default `[1, n / 2]` length range.
    pub fn with_default_range(series_len: usize) -> Result<Self> {
        Self::new(series_len, &BlockLengthRange::default())
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    /// Inclusive `(min, max)` block length.
    #[must_use]
    pub fn length_range(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }

    /// Draw one block: length first, then start position.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Block {
        let length = rng.random_range(self.min_length..=self.max_length);
        let start_index = rng.random_range(0..self.series_len);
        Block {
            start_index,
            length,
        }
    }
}

/// Draw a single block with the default length range.
pub fn sample_block<R: Rng + ?Sized>(rng: &mut R, series_len: usize) -> Result<Block> {
    BlockSampler::with_default_range(series_len).map(|sampler| sampler.sample(rng))
}
