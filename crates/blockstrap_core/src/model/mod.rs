mod block;
mod matrix;
mod stats;

pub use block::Block;
pub use matrix::TimeSeriesMatrix;
pub use stats::{SeriesStatistics, mean, sample_std_dev};
