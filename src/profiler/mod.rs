//! Statistical analysis of a loaded dataset.
//!
//! This module provides the descriptive half of the pipeline:
//! - Per-column summary statistics (numeric and categorical)
//! - Per-column missing-value counts
//! - The Pearson correlation matrix over numeric columns
//!
//! Everything here is a pure function of the frame; no side effects.

mod correlation;
mod statistics;

use crate::error::Result;
use crate::types::{ColumnStats, DatasetSummary, MissingValueReport};
use crate::utils::{column_to_f64, is_numeric_dtype};
use polars::prelude::*;

pub use correlation::correlation_matrix;

/// Statistical analyzer for a loaded dataset.
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Summarize every column of the frame, in column order.
    ///
    /// Numeric columns get mean/std/min/quartiles/max; all other columns
    /// get a unique-value count and the most frequent value. The non-null
    /// count is reported for every column.
    pub fn summarize(df: &DataFrame) -> Result<DatasetSummary> {
        let mut columns = Vec::with_capacity(df.width());
        for name in df.get_column_names() {
            columns.push(Self::summarize_column(df, name)?);
        }

        Ok(DatasetSummary {
            shape: (df.height(), df.width()),
            columns,
        })
    }

    fn summarize_column(df: &DataFrame, name: &str) -> Result<ColumnStats> {
        let col = df.column(name)?;
        let series = col.as_materialized_series();
        let dtype = format!("{:?}", series.dtype());
        let count = series.len() - series.null_count();

        if is_numeric_dtype(series.dtype()) {
            let mut values = column_to_f64(df, name)?;
            values.sort_by(|a, b| a.total_cmp(b));

            Ok(ColumnStats {
                name: name.to_string(),
                dtype,
                count,
                mean: statistics::mean(&values),
                std: (!values.is_empty()).then(|| statistics::sample_std(&values)),
                min: values.first().copied(),
                q25: statistics::quantile(&values, 0.25),
                median: statistics::quantile(&values, 0.5),
                q75: statistics::quantile(&values, 0.75),
                max: values.last().copied(),
                unique_count: None,
                most_frequent: None,
            })
        } else {
            Ok(ColumnStats {
                name: name.to_string(),
                dtype,
                count,
                mean: None,
                std: None,
                min: None,
                q25: None,
                median: None,
                q75: None,
                max: None,
                unique_count: Some(series.drop_nulls().n_unique()?),
                most_frequent: statistics::most_frequent(series)?,
            })
        }
    }

    /// Count null cells per column over the entire frame.
    pub fn missing_values(df: &DataFrame) -> MissingValueReport {
        let counts = df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect();
        MissingValueReport { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_frame() -> DataFrame {
        df![
            "age" => [Some(20i64), Some(30), Some(40), Some(50), None],
            "income" => [1000.0f64, 2000.0, 3000.0, 4000.0, 5000.0],
            "city" => [Some("a"), Some("b"), Some("a"), None, Some("a")],
        ]
        .unwrap()
    }

    // ==================== summarize tests ====================

    #[test]
    fn test_summarize_shape_and_order() {
        let summary = StatisticalAnalyzer::summarize(&sample_frame()).unwrap();
        assert_eq!(summary.shape, (5, 3));
        let names: Vec<&str> = summary.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["age", "income", "city"]);
    }

    #[test]
    fn test_summarize_numeric_column() {
        let summary = StatisticalAnalyzer::summarize(&sample_frame()).unwrap();
        let age = &summary.columns[0];

        assert!(age.is_numeric());
        assert_eq!(age.count, 4);
        assert_eq!(age.mean, Some(35.0));
        assert_eq!(age.min, Some(20.0));
        assert_eq!(age.max, Some(50.0));
        assert!(age.std.unwrap() > 0.0);
        assert!(age.unique_count.is_none());
    }

    #[test]
    fn test_summarize_categorical_column() {
        let summary = StatisticalAnalyzer::summarize(&sample_frame()).unwrap();
        let city = &summary.columns[2];

        assert!(!city.is_numeric());
        assert_eq!(city.count, 4);
        assert_eq!(city.unique_count, Some(2));
        assert_eq!(city.most_frequent.as_deref(), Some("a"));
    }

    #[test]
    fn test_summarize_all_null_numeric_column() {
        let df = df![
            "empty" => [None::<f64>, None, None],
        ]
        .unwrap();

        let summary = StatisticalAnalyzer::summarize(&df).unwrap();
        let empty = &summary.columns[0];
        assert_eq!(empty.count, 0);
        assert_eq!(empty.mean, None);
        assert_eq!(empty.std, None);
        assert_eq!(empty.min, None);
    }

    // ==================== missing_values tests ====================

    #[test]
    fn test_missing_values_per_column() {
        let report = StatisticalAnalyzer::missing_values(&sample_frame());
        assert_eq!(report.get("age"), Some(1));
        assert_eq!(report.get("income"), Some(0));
        assert_eq!(report.get("city"), Some(1));
    }

    #[test]
    fn test_missing_values_total_matches_null_cells() {
        let df = sample_frame();
        let report = StatisticalAnalyzer::missing_values(&df);
        let null_cells: usize = df.get_columns().iter().map(|c| c.null_count()).sum();
        assert_eq!(report.total(), null_cells);
    }
}
