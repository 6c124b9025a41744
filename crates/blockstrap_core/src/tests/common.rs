use jiff::civil::{Date, date};
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand_distr::Normal;

use crate::model::TimeSeriesMatrix;

/// Consecutive calendar days starting 2020-01-01.
pub fn daily_index(n: usize) -> Vec<Date> {
    let start = date(2020, 1, 1);
    (0..n)
        .map(|i| start.saturating_add(jiff::Span::new().days(i as i64)))
        .collect()
}

/// Deterministic pseudo-returns with the given volatility.
pub fn normal_returns(n: usize, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let normal = Normal::new(0.0005, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Three-asset matrix of daily returns: equities, bonds and cash.
pub fn sample_matrix(n: usize) -> TimeSeriesMatrix {
    TimeSeriesMatrix::new(
        daily_index(n),
        vec![
            ("SPY", normal_returns(n, 0.012, 1)),
            ("AGG", normal_returns(n, 0.004, 2)),
            ("CASH", vec![0.0; n]),
        ],
    )
    .unwrap()
}
