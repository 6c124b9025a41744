//! Monte Carlo scenario generation
//!
//! Runs the matrix bootstrap many times to produce a set of alternative return
//! histories. Scenarios are grouped into batches; batch seeds are drawn in
//! order from a generator seeded with the base seed, and each batch owns a
//! generator that hands out one seed per scenario, so the set depends only on
//! the base seed and not on thread scheduling.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;

use crate::config::BootstrapConfig;
use crate::error::{InvalidInputError, Result};
use crate::model::{SeriesStatistics, TimeSeriesMatrix, mean, sample_std_dev};
use crate::portfolio::PreparedMatrix;

const MAX_BATCH_SIZE: usize = 100;

/// Synthetic return matrices produced from one historical matrix.
#[derive(Debug, Clone)]
pub struct ScenarioSet {
    historical: TimeSeriesMatrix,
    scenarios: Vec<TimeSeriesMatrix>,
}

/// Historical vs. average synthetic statistics for one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSummary {
    pub asset: String,
    pub historical: SeriesStatistics,
    /// Mean over scenarios of each scenario's column mean
    pub synthetic_mean: f64,
    /// Mean over scenarios of each scenario's column sample std dev
    pub synthetic_std_dev: f64,
}

impl ScenarioSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    #[must_use]
    pub fn historical(&self) -> &TimeSeriesMatrix {
        &self.historical
    }

    #[must_use]
    pub fn scenarios(&self) -> &[TimeSeriesMatrix] {
        &self.scenarios
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSeriesMatrix> {
        self.scenarios.iter()
    }

    #[must_use]
    pub fn into_scenarios(self) -> Vec<TimeSeriesMatrix> {
        self.scenarios
    }

    /// Per-asset comparison of the synthetic scenarios with the history.
    #[must_use]
    pub fn summary(&self) -> Vec<AssetSummary> {
        let count = self.scenarios.len().max(1) as f64;
        self.historical
            .columns()
            .filter_map(|(asset, values)| {
                let historical = SeriesStatistics::from_values(values)?;
                let (sum_mean, sum_std) = self
                    .scenarios
                    .iter()
                    .filter_map(|scenario| scenario.column(asset))
                    .fold((0.0, 0.0), |(m, s), column| {
                        (m + mean(column), s + sample_std_dev(column))
                    });
                Some(AssetSummary {
                    asset: asset.to_string(),
                    historical,
                    synthetic_mean: sum_mean / count,
                    synthetic_std_dev: sum_std / count,
                })
            })
            .collect()
    }
}

/// Generate `num_scenarios` independent bootstrap scenarios of `matrix`.
///
/// Fails with [`InvalidInputError`] before doing any work if `num_scenarios`
/// is zero or if `matrix`/`config` would be rejected by
/// [`bootstrap_matrix_seeded`](crate::portfolio::bootstrap_matrix_seeded).
pub fn bootstrap_scenarios(
    matrix: &TimeSeriesMatrix,
    config: &BootstrapConfig,
    num_scenarios: usize,
    seed: u64,
) -> Result<ScenarioSet> {
    if num_scenarios == 0 {
        return Err(InvalidInputError::NoScenarios);
    }
    let prepared = PreparedMatrix::new(matrix, config)?;
    let num_batches = num_scenarios.div_ceil(MAX_BATCH_SIZE);

    // Batch seeds come from one stream so nearby base seeds share no batches
    let mut seeder = SmallRng::seed_from_u64(seed);
    let batch_seeds: Vec<u64> = (0..num_batches).map(|_| seeder.next_u64()).collect();

    let run_batch = |i: usize| {
        let mut rng = SmallRng::seed_from_u64(batch_seeds[i]);

        let batch_size = if i == num_batches - 1 {
            num_scenarios - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };
        tracing::debug!(batch = i, batch_size, "generating scenario batch");

        (0..batch_size)
            .map(|_| prepared.run_seeded(rng.next_u64()))
            .collect::<Vec<_>>()
    };

    #[cfg(feature = "parallel")]
    let scenarios = (0..num_batches)
        .into_par_iter()
        .flat_map(run_batch)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let scenarios = (0..num_batches).flat_map(run_batch).collect();

    Ok(ScenarioSet {
        historical: prepared.matrix.clone(),
        scenarios,
    })
}
