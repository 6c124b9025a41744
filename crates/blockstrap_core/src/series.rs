//! Single-series block bootstrap
//!
//! A synthetic series is assembled from random circular blocks of the source
//! series until it reaches the source length, trimmed to exactly that length,
//! and perturbed with Gaussian noise proportional to the source volatility.

use rand::Rng;
use rand::distr::Distribution;
use rand_distr::Normal;

use crate::config::BootstrapConfig;
use crate::error::{InvalidInputError, Result};
use crate::model::sample_std_dev;
use crate::sampler::BlockSampler;

/// Additive Gaussian noise scaled to a source series' volatility.
#[derive(Debug, Clone)]
pub(crate) struct NoiseModel {
    std_dev: f64,
    normal: Option<Normal<f64>>,
}

impl NoiseModel {
    /// Noise with standard deviation `noise_frac * sample_std_dev(series)`.
    pub(crate) fn for_series(series: &[f64], noise_frac: f64) -> Result<Self> {
        let std_dev = noise_frac * sample_std_dev(series);
        // Zero volatility or zero fraction: nothing to add
        if std_dev == 0.0 {
            return Ok(Self {
                std_dev,
                normal: None,
            });
        }
        let normal = Normal::new(0.0, std_dev)
            .map_err(|_| InvalidInputError::InvalidNoiseScale { std_dev })?;
        Ok(Self {
            std_dev,
            normal: Some(normal),
        })
    }

    pub(crate) fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub(crate) fn apply<R: Rng + ?Sized>(&self, values: &mut [f64], rng: &mut R) {
        if let Some(normal) = &self.normal {
            for value in values.iter_mut() {
                *value += normal.sample(rng);
            }
        }
    }
}

/// Concatenate random blocks of `series` until `sampler.series_len()` values
/// are collected, discarding the tail of the last block.
///
/// This is the noise-free part of [`bootstrap_series`]; with the same generator
/// state it consumes exactly the same block draws.
pub fn resample_blocks<R: Rng + ?Sized>(
    series: &[f64],
    sampler: &BlockSampler,
    rng: &mut R,
) -> Vec<f64> {
    debug_assert_eq!(series.len(), sampler.series_len());
    let n = series.len();
    let mut out = Vec::with_capacity(n + sampler.length_range().1);

    while out.len() < n {
        let block = sampler.sample(rng);
        block.extend_into(series, &mut out);
        tracing::trace!(
            start_index = block.start_index,
            length = block.length,
            accumulated = out.len(),
            "sampled block"
        );
    }

    out.truncate(n);
    out
}

/// Validate a raw series before any randomness is consumed.
pub(crate) fn check_series(series: &[f64]) -> Result<()> {
    if series.len() < 2 {
        return Err(InvalidInputError::SeriesTooShort { len: series.len() });
    }
    if let Some(index) = series.iter().position(|v| !v.is_finite()) {
        return Err(InvalidInputError::NonFiniteValue { asset: None, index });
    }
    Ok(())
}

/// Resample and perturb one series with already-validated parameters.
pub(crate) fn bootstrap_validated<R: Rng + ?Sized>(
    series: &[f64],
    sampler: &BlockSampler,
    noise: &NoiseModel,
    rng: &mut R,
) -> Vec<f64> {
    let mut out = resample_blocks(series, sampler, rng);
    noise.apply(&mut out, rng);
    out
}

/// Produce a synthetic series of the same length as `series`.
///
/// Fails with [`InvalidInputError`] when the series has fewer than two values
/// or contains a non-finite value, or when `config` is invalid. Validation
/// happens before `rng` is touched.
pub fn bootstrap_series<R: Rng + ?Sized>(
    series: &[f64],
    config: &BootstrapConfig,
    rng: &mut R,
) -> Result<Vec<f64>> {
    config.validate()?;
    check_series(series)?;
    let sampler = BlockSampler::new(series.len(), &config.block_length)?;
    let noise = NoiseModel::for_series(series, config.noise_frac)?;

    Ok(bootstrap_validated(series, &sampler, &noise, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_noise_model_scale() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let noise = NoiseModel::for_series(&series, 0.5).unwrap();
        let expected = 0.5 * (2.5_f64).sqrt();
        assert!((noise.std_dev() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_noise_model_constant_series() {
        let noise = NoiseModel::for_series(&[0.25, 0.25, 0.25], 0.1).unwrap();
        assert_eq!(noise.std_dev(), 0.0);

        let mut values = vec![0.25, 0.25, 0.25];
        let mut rng = SmallRng::seed_from_u64(1);
        noise.apply(&mut values, &mut rng);
        assert_eq!(values, vec![0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_resample_blocks_length() {
        let series: Vec<f64> = (0..37).map(f64::from).collect();
        let sampler = BlockSampler::with_default_range(series.len()).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);

        for _ in 0..20 {
            let out = resample_blocks(&series, &sampler, &mut rng);
            assert_eq!(out.len(), 37);
        }
    }

    #[test]
    fn test_resampled_runs_follow_source_order() {
        // Every adjacent pair in the output is either a continuation of a
        // block (next source position, wrapping) or a block boundary.
        let series: Vec<f64> = (0..50).map(f64::from).collect();
        let sampler = BlockSampler::with_default_range(series.len()).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let out = resample_blocks(&series, &sampler, &mut rng);

        let continuations = out
            .windows(2)
            .filter(|w| (w[0] as usize + 1) % 50 == w[1] as usize)
            .count();
        // Mean block length is ~13, so most neighbours are continuations
        assert!(continuations > out.len() / 2);
    }

    #[test]
    fn test_check_series() {
        assert!(check_series(&[0.1, 0.2]).is_ok());
        assert_eq!(
            check_series(&[0.1]),
            Err(InvalidInputError::SeriesTooShort { len: 1 })
        );
        assert_eq!(
            check_series(&[0.1, f64::INFINITY]),
            Err(InvalidInputError::NonFiniteValue {
                asset: None,
                index: 1
            })
        );
    }
}
