//! Statistical helper functions for column summaries.

use crate::error::Result;
use polars::prelude::*;

/// Mean of the values, or `None` when empty.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
///
/// Zero or one observations yield 0.0 rather than an error.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }
    let m = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Quantile by sorted-index lookup: index = floor(n * q).
pub(crate) fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = ((sorted.len() as f64 * q) as usize).min(sorted.len() - 1);
    Some(sorted[idx])
}

/// The most frequent non-null value of a series, rendered as text.
pub(crate) fn most_frequent(series: &Series) -> Result<Option<String>> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Ok(None);
    }

    let value_counts_df = non_null.value_counts(true, false, "count".into(), false)?;
    if value_counts_df.height() == 0 {
        return Ok(None);
    }

    let values_col = value_counts_df.column(non_null.name())?;
    let top = values_col.get(0)?;
    let rendered = match top {
        AnyValue::String(s) => s.to_string(),
        other => format!("{}", other),
    };
    Ok(Some(rendered))
}
