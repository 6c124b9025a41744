//! File formats for return matrices, configs and scenario output
//!
//! Files ending in `.json` are read and written with serde_json; anything else
//! is treated as YAML.

use std::path::Path;

use blockstrap_core::{AssetSummary, BootstrapConfig, TimeSeriesMatrix};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Error raised while decoding or encoding a data file
#[derive(Debug)]
pub enum DataError {
    /// Invalid YAML or JSON
    Parse(String),
    /// Serialization error
    Serialize(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Parse(msg) => write!(f, "Parse error: {}", msg),
            DataError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}

/// Supported on-disk encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn decode<T: for<'de> Deserialize<'de>>(self, content: &str) -> Result<T, DataError> {
        match self {
            Format::Yaml => {
                serde_saphyr::from_str(content).map_err(|e| DataError::Parse(e.to_string()))
            }
            Format::Json => {
                serde_json::from_str(content).map_err(|e| DataError::Parse(e.to_string()))
            }
        }
    }

    pub fn encode<T: Serialize>(self, value: &T) -> Result<String, DataError> {
        match self {
            Format::Yaml => {
                serde_saphyr::to_string(value).map_err(|e| DataError::Serialize(e.to_string()))
            }
            Format::Json => serde_json::to_string_pretty(value)
                .map_err(|e| DataError::Serialize(e.to_string())),
        }
    }
}

/// One asset's return column in human-readable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReturns {
    pub name: String,
    pub returns: Vec<f64>,
}

/// Return matrix in human-readable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnsData {
    pub dates: Vec<Date>,
    pub assets: Vec<AssetReturns>,
}

impl ReturnsData {
    /// Validate into a core matrix.
    pub fn to_matrix(&self) -> Result<TimeSeriesMatrix, blockstrap_core::InvalidInputError> {
        TimeSeriesMatrix::new(
            self.dates.clone(),
            self.assets
                .iter()
                .map(|a| (a.name.clone(), a.returns.clone()))
                .collect(),
        )
    }

    pub fn from_matrix(matrix: &TimeSeriesMatrix) -> Self {
        Self {
            dates: matrix.index().to_vec(),
            assets: matrix
                .columns()
                .map(|(name, values)| AssetReturns {
                    name: name.to_string(),
                    returns: values.to_vec(),
                })
                .collect(),
        }
    }
}

/// Everything written by a run: enough to replay it and the generated data
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutput {
    pub seed: u64,
    pub config: BootstrapConfig,
    pub summary: Vec<AssetSummary>,
    pub scenarios: Vec<ReturnsData>,
}
