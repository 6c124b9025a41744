use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::error::{InvalidInputError, Result};

/// Dated, multi-asset return matrix.
///
/// Rows are timestamps (strictly increasing), columns are assets in insertion
/// order. Every column has one finite observation per timestamp. The matrix is
/// immutable once built; bootstrapping always produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesMatrix {
    index: Vec<Date>,
    assets: Vec<String>,
    columns: Vec<Vec<f64>>,
    lookup: FxHashMap<String, usize>,
}

impl TimeSeriesMatrix {
    /// Build a matrix from a timestamp index and `(asset, values)` columns.
    pub fn new<S: Into<String>>(index: Vec<Date>, columns: Vec<(S, Vec<f64>)>) -> Result<Self> {
        for pair in index.windows(2) {
            if pair[1] <= pair[0] {
                return Err(InvalidInputError::UnorderedIndex {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }

        let mut assets = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        let mut lookup = FxHashMap::default();

        for (asset, column) in columns {
            let asset = asset.into();
            if column.len() != index.len() {
                return Err(InvalidInputError::ColumnLengthMismatch {
                    asset,
                    expected: index.len(),
                    actual: column.len(),
                });
            }
            if let Some(row) = column.iter().position(|v| !v.is_finite()) {
                return Err(InvalidInputError::NonFiniteValue {
                    asset: Some(asset),
                    index: row,
                });
            }
            if lookup.insert(asset.clone(), assets.len()).is_some() {
                return Err(InvalidInputError::DuplicateAsset(asset));
            }
            assets.push(asset);
            values.push(column);
        }

        Ok(Self {
            index,
            assets,
            columns: values,
            lookup,
        })
    }

    /// Same index and asset order as `self`, with replacement column values.
    ///
    /// Callers guarantee one column per asset, each of `rows()` length.
    pub(crate) fn with_columns(&self, columns: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(columns.len(), self.assets.len());
        debug_assert!(columns.iter().all(|c| c.len() == self.index.len()));
        Self {
            index: self.index.clone(),
            assets: self.assets.clone(),
            columns,
            lookup: self.lookup.clone(),
        }
    }

    /// Number of timestamps.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.index.len()
    }

    /// Number of asset columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.assets.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> &[Date] {
        &self.index
    }

    /// Asset identifiers in column order.
    #[must_use]
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Values of one asset column.
    #[must_use]
    pub fn column(&self, asset: &str) -> Option<&[f64]> {
        self.lookup
            .get(asset)
            .map(|&i| self.columns[i].as_slice())
    }

    /// Iterate `(asset, values)` in column order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = (&str, &[f64])> {
        self.assets
            .iter()
            .zip(&self.columns)
            .map(|(asset, values)| (asset.as_str(), values.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn dates(n: usize) -> Vec<Date> {
        let start = date(2024, 1, 1);
        (0..n)
            .map(|i| start.saturating_add(jiff::Span::new().days(i as i64)))
            .collect()
    }

    #[test]
    fn test_new_keeps_column_order() {
        let matrix = TimeSeriesMatrix::new(
            dates(3),
            vec![("SPY", vec![0.1, 0.2, 0.3]), ("AGG", vec![0.0, -0.1, 0.05])],
        )
        .unwrap();

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.num_columns(), 2);
        assert_eq!(matrix.assets(), ["SPY", "AGG"]);
        assert_eq!(matrix.column("AGG"), Some([0.0, -0.1, 0.05].as_slice()));
        assert_eq!(matrix.column("GLD"), None);

        let names: Vec<&str> = matrix.columns().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["SPY", "AGG"]);
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = TimeSeriesMatrix::new(dates(3), vec![("SPY", vec![0.1, 0.2])]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::ColumnLengthMismatch {
                asset: "SPY".to_string(),
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_rejects_unordered_or_duplicate_dates() {
        let mut index = dates(3);
        index.swap(1, 2);
        let err = TimeSeriesMatrix::new(index, vec![("SPY", vec![0.1, 0.2, 0.3])]).unwrap_err();
        assert!(matches!(err, InvalidInputError::UnorderedIndex { .. }));

        let index = vec![date(2024, 1, 1), date(2024, 1, 1)];
        let err = TimeSeriesMatrix::new(index, vec![("SPY", vec![0.1, 0.2])]).unwrap_err();
        assert!(matches!(err, InvalidInputError::UnorderedIndex { .. }));
    }

    #[test]
    fn test_rejects_duplicate_asset() {
        let err = TimeSeriesMatrix::new(
            dates(2),
            vec![("SPY", vec![0.1, 0.2]), ("SPY", vec![0.3, 0.4])],
        )
        .unwrap_err();
        assert_eq!(err, InvalidInputError::DuplicateAsset("SPY".to_string()));
    }

    #[test]
    fn test_rejects_missing_values() {
        let err =
            TimeSeriesMatrix::new(dates(3), vec![("SPY", vec![0.1, f64::NAN, 0.3])]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::NonFiniteValue {
                asset: Some("SPY".to_string()),
                index: 1,
            }
        );
    }

    #[test]
    fn test_empty_matrix_is_constructible() {
        let matrix = TimeSeriesMatrix::new::<String>(dates(4), vec![]).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.num_columns(), 0);
    }
}
