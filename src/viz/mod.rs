//! Chart rendering for the report.
//!
//! Four deterministic artifacts, written to fixed file names in the output
//! directory:
//!
//! - density plot of the first numeric column
//! - scatter plot of the first two numeric columns
//! - histogram grid of all numeric columns
//! - correlation heatmap of all numeric columns
//!
//! "First" means first in frame column order. Density, scatter, and the
//! histogram grid are skipped when fewer numeric columns exist than they
//! need; the heatmap is always attempted and degrades to an empty canvas.

mod charts;

use crate::error::Result;
use crate::profiler::correlation_matrix;
use crate::types::VisualizationSet;
use crate::utils::{column_to_f64, numeric_column_names};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Fixed artifact file names, shared with report assembly.
pub const DENSITY_PLOT_FILE: &str = "density_plot.png";
pub const SCATTER_PLOT_FILE: &str = "scatter_plot.png";
pub const HISTOGRAM_FILE: &str = "histogram.png";
pub const CORRELATION_HEATMAP_FILE: &str = "correlation_heatmap.png";

/// Renders the chart artifacts for a frame.
pub struct Visualizer;

impl Visualizer {
    /// Render every applicable chart into `output_dir`, overwriting
    /// existing files at the fixed names.
    ///
    /// Failure to write an artifact is fatal
    /// ([`ReportError::Render`](crate::error::ReportError)); having too few
    /// numeric columns for a particular chart is not.
    pub fn render_all(df: &DataFrame, output_dir: &Path) -> Result<VisualizationSet> {
        let numeric = numeric_column_names(df);
        let mut set = VisualizationSet::default();

        if let Some(first) = numeric.first() {
            let values = column_to_f64(df, first)?;
            let path = output_dir.join(DENSITY_PLOT_FILE);
            charts::render_density(&path, first, &values)?;
            info!("Density plot written to {}", path.display());
            set.density = Some(path);
        } else {
            debug!("No numeric columns; skipping density plot");
        }

        if numeric.len() >= 2 {
            let pairs = paired_rows(df, &numeric[0], &numeric[1])?;
            let path = output_dir.join(SCATTER_PLOT_FILE);
            charts::render_scatter(&path, &numeric[0], &numeric[1], &pairs)?;
            info!("Scatter plot written to {}", path.display());
            set.scatter = Some(path);
        } else {
            debug!("Fewer than two numeric columns; skipping scatter plot");
        }

        if !numeric.is_empty() {
            let mut series = Vec::with_capacity(numeric.len());
            for name in &numeric {
                series.push((name.clone(), column_to_f64(df, name)?));
            }
            let path = output_dir.join(HISTOGRAM_FILE);
            charts::render_histogram_grid(&path, &series)?;
            info!("Histogram grid written to {}", path.display());
            set.histogram = Some(path);
        } else {
            debug!("No numeric columns; skipping histogram grid");
        }

        let matrix = correlation_matrix(df)?;
        let path = output_dir.join(CORRELATION_HEATMAP_FILE);
        charts::render_heatmap(&path, &matrix)?;
        info!("Correlation heatmap written to {}", path.display());
        set.heatmap = Some(path);

        Ok(set)
    }
}

/// Rows where both columns are present, for the scatter plot.
fn paired_rows(df: &DataFrame, x_name: &str, y_name: &str) -> Result<Vec<(f64, f64)>> {
    let x_series = df
        .column(x_name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let y_series = df
        .column(y_name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;

    let pairs = x_series
        .f64()?
        .into_iter()
        .zip(y_series.f64()?.into_iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect();
    Ok(pairs)
}
