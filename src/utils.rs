//! Shared utilities for the analysis pipeline.

use polars::prelude::*;

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Names of the numeric columns, in frame column order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Non-null values of a column as `f64`, in row order.
///
/// Returns an empty vector for an all-null column.
pub fn column_to_f64(df: &DataFrame, name: &str) -> crate::error::Result<Vec<f64>> {
    let col = df.column(name)?;
    let series = col.as_materialized_series();
    let float_series = series.cast(&DataType::Float64)?;
    Ok(float_series.f64()?.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float32));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_numeric_column_names_preserves_order() {
        let df = df![
            "city" => ["a", "b"],
            "age" => [30i64, 40],
            "income" => [1.0f64, 2.0],
        ]
        .unwrap();

        assert_eq!(numeric_column_names(&df), vec!["age", "income"]);
    }

    #[test]
    fn test_column_to_f64_drops_nulls() {
        let df = df![
            "value" => [Some(1.0f64), None, Some(3.0)],
        ]
        .unwrap();

        let values = column_to_f64(&df, "value").unwrap();
        assert_eq!(values, vec![1.0, 3.0]);
    }
}
