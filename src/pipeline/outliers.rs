//! Standardized-deviation outlier detection.
//!
//! Counts, per numeric column, the rows whose z-score exceeds 3 standard
//! deviations in absolute value.

use crate::error::Result;
use crate::types::OutlierReport;
use crate::utils::{column_to_f64, numeric_column_names};
use polars::prelude::*;
use tracing::debug;

/// |z| above this counts as an outlier.
const Z_SCORE_THRESHOLD: f64 = 3.0;

/// Detects extreme values in the numeric subset of a frame.
pub struct OutlierDetector;

impl OutlierDetector {
    /// Count outliers per numeric column.
    ///
    /// Each column is standardized with its own mean and sample standard
    /// deviation; nulls are excluded from both the statistics and the
    /// count. A zero-variance column reports 0 outliers.
    pub fn detect(df: &DataFrame) -> Result<OutlierReport> {
        let mut counts = Vec::new();
        for name in numeric_column_names(df) {
            let values = column_to_f64(df, &name)?;
            let count = Self::count_column_outliers(&values);
            debug!("Column '{}': {} outliers beyond |z| > 3", name, count);
            counts.push((name, count));
        }
        Ok(OutlierReport { counts })
    }

    fn count_column_outliers(values: &[f64]) -> usize {
        let n = values.len() as f64;
        if n <= 1.0 {
            return 0;
        }

        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let std = variance.sqrt();
        if std == 0.0 {
            return 0;
        }

        values
            .iter()
            .filter(|v| ((*v - mean) / std).abs() > Z_SCORE_THRESHOLD)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== detect tests ====================

    #[test]
    fn test_uniform_range_has_no_outliers() {
        let values: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        let df = df![
            "value" => values,
        ]
        .unwrap();

        let report = OutlierDetector::detect(&df).unwrap();
        assert_eq!(report.get("value"), Some(0));
    }

    #[test]
    fn test_extreme_value_is_counted() {
        // 29 tight values and one far spike: z(spike) well above 3.
        let mut values = vec![10.0f64; 29];
        values.push(1000.0);
        let df = df![
            "value" => values,
        ]
        .unwrap();

        let report = OutlierDetector::detect(&df).unwrap();
        assert_eq!(report.get("value"), Some(1));
    }

    #[test]
    fn test_zero_variance_column_reports_zero() {
        let df = df![
            "constant" => [5.0f64, 5.0, 5.0, 5.0, 5.0],
        ]
        .unwrap();

        let report = OutlierDetector::detect(&df).unwrap();
        assert_eq!(report.get("constant"), Some(0));
    }

    #[test]
    fn test_nulls_excluded_from_statistics_and_count() {
        let mut values: Vec<Option<f64>> = vec![Some(10.0); 29];
        values.push(Some(1000.0));
        values.push(None);
        values.push(None);
        let df = df![
            "value" => values,
        ]
        .unwrap();

        let report = OutlierDetector::detect(&df).unwrap();
        assert_eq!(report.get("value"), Some(1));
    }

    #[test]
    fn test_non_numeric_columns_ignored() {
        let df = df![
            "city" => ["a", "b", "c"],
            "age" => [30.0f64, 40.0, 50.0],
        ]
        .unwrap();

        let report = OutlierDetector::detect(&df).unwrap();
        assert_eq!(report.counts.len(), 1);
        assert_eq!(report.counts[0].0, "age");
    }

    #[test]
    fn test_no_numeric_columns_yields_empty_report() {
        let df = df![
            "city" => ["a", "b", "c"],
        ]
        .unwrap();

        let report = OutlierDetector::detect(&df).unwrap();
        assert!(report.counts.is_empty());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_single_observation_reports_zero() {
        let df = df![
            "value" => [42.0f64],
        ]
        .unwrap();

        let report = OutlierDetector::detect(&df).unwrap();
        assert_eq!(report.get("value"), Some(0));
    }
}
