use serde::{Deserialize, Serialize};

/// Summary statistics of a single return series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub len: usize,
}

impl SeriesStatistics {
    /// Compute statistics, or `None` for an empty series.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean: mean(values),
            std_dev: sample_std_dev(values),
            min,
            max,
            len: values.len(),
        })
    }
}

/// Arithmetic mean; `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; `0.0` when fewer than two values.
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
