use std::fmt;

use jiff::civil::Date;

/// Rejected input to a bootstrap call or to matrix construction.
///
/// Every variant is detected before any randomness is consumed, so a call that
/// returns one of these has produced no partial output.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Source series has fewer than two observations
    SeriesTooShort { len: usize },
    /// Matrix has fewer than two rows
    TooFewRows { rows: usize },
    /// Matrix has no asset columns
    NoColumns,
    /// Noise fraction is negative, NaN or infinite
    InvalidNoiseFraction(f64),
    /// Noise standard deviation could not parameterize a normal distribution
    InvalidNoiseScale { std_dev: f64 },
    /// Block length range is empty for the given series length
    InvalidBlockLength {
        min: usize,
        max: usize,
        series_len: usize,
    },
    /// Column length does not match the timestamp index
    ColumnLengthMismatch {
        asset: String,
        expected: usize,
        actual: usize,
    },
    /// Timestamps are not strictly increasing
    UnorderedIndex { previous: Date, next: Date },
    /// The same asset identifier appears twice
    DuplicateAsset(String),
    /// NaN or infinite observation (missing value)
    NonFiniteValue { asset: Option<String>, index: usize },
    /// Scenario generation asked for zero scenarios
    NoScenarios,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::SeriesTooShort { len } => {
                write!(f, "series has {len} observations, at least 2 required")
            }
            InvalidInputError::TooFewRows { rows } => {
                write!(f, "matrix has {rows} rows, at least 2 required")
            }
            InvalidInputError::NoColumns => write!(f, "matrix has no asset columns"),
            InvalidInputError::InvalidNoiseFraction(frac) => {
                write!(f, "noise fraction must be finite and >= 0 (got {frac})")
            }
            InvalidInputError::InvalidNoiseScale { std_dev } => {
                write!(f, "invalid noise standard deviation {std_dev}")
            }
            InvalidInputError::InvalidBlockLength {
                min,
                max,
                series_len,
            } => write!(
                f,
                "block length range [{min}, {max}] is empty for a series of length {series_len}"
            ),
            InvalidInputError::ColumnLengthMismatch {
                asset,
                expected,
                actual,
            } => write!(
                f,
                "column {asset:?} has {actual} values but the index has {expected} timestamps"
            ),
            InvalidInputError::UnorderedIndex { previous, next } => {
                write!(
                    f,
                    "timestamps must be strictly increasing ({previous} followed by {next})"
                )
            }
            InvalidInputError::DuplicateAsset(asset) => {
                write!(f, "asset {asset:?} appears more than once")
            }
            InvalidInputError::NonFiniteValue { asset, index } => match asset {
                Some(asset) => write!(f, "non-finite value in column {asset:?} at row {index}"),
                None => write!(f, "non-finite value at position {index}"),
            },
            InvalidInputError::NoScenarios => write!(f, "at least one scenario is required"),
        }
    }
}

impl std::error::Error for InvalidInputError {}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
