//! Block-bootstrap generator for synthetic return series
//!
//! This crate resamples historical asset returns into synthetic return
//! histories for Monte Carlo risk/return simulation. It supports:
//! - Random-length circular blocks, so short-range dependence survives resampling
//! - Gaussian noise scaled to each series' own volatility
//! - Independent per-column resampling of multi-asset return matrices
//! - Reproducible sequential or parallel (rayon) execution from a seed
//! - Batched Monte Carlo scenario sets with fidelity summaries
//!
//! ```ignore
//! use blockstrap_core::{BootstrapConfig, TimeSeriesMatrix, bootstrap_matrix_seeded};
//!
//! let returns = TimeSeriesMatrix::new(dates, vec![("SPY", spy), ("AGG", agg)])?;
//! let synthetic = bootstrap_matrix_seeded(&returns, &BootstrapConfig::default(), 42)?;
//! assert_eq!(synthetic.rows(), returns.rows());
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod model;
pub mod portfolio;
pub mod sampler;
pub mod scenarios;
pub mod series;

#[cfg(test)]
mod tests;

pub use config::{BlockLengthRange, BootstrapConfig};
pub use error::InvalidInputError;
pub use model::{Block, SeriesStatistics, TimeSeriesMatrix};
pub use portfolio::{bootstrap_matrix, bootstrap_matrix_seeded};
pub use sampler::{BlockSampler, sample_block};
pub use scenarios::{AssetSummary, ScenarioSet, bootstrap_scenarios};
pub use series::{bootstrap_series, resample_blocks};
