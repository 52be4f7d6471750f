//! Pairwise Pearson correlation over the numeric columns.

use crate::error::Result;
use crate::types::CorrelationMatrix;
use crate::utils::numeric_column_names;
use polars::prelude::*;

/// Compute the correlation matrix for the numeric columns of a frame.
///
/// Rows where either value is null are excluded pairwise, matching the
/// usual complete-observations semantics. Coefficients are undefined
/// (`None`) when a pair has fewer than two complete observations or a
/// zero-variance side.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let labels = numeric_column_names(df);
    if labels.is_empty() {
        return Ok(CorrelationMatrix::default());
    }

    // Per-column value vectors with nulls kept, so rows stay aligned.
    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(labels.len());
    for name in &labels {
        let col = df.column(name)?;
        let float_series = col.as_materialized_series().cast(&DataType::Float64)?;
        columns.push(float_series.f64()?.into_iter().collect());
    }

    let n = labels.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    // Defined diagonals are exactly 1, not a rounding artifact.
    for (i, row) in values.iter_mut().enumerate() {
        if row[i].is_some() {
            row[i] = Some(1.0);
        }
    }

    Ok(CorrelationMatrix { labels, values })
}

/// Pearson coefficient over the rows where both values are present.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some((*x, *y)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}
