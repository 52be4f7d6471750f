//! Individual chart renderers built on plotters.

use crate::error::{ReportError, Result};
use crate::types::CorrelationMatrix;
use plotters::prelude::*;
use std::path::Path;

const SINGLE_PLOT_SIZE: (u32, u32) = (800, 600);
const GRID_PLOT_SIZE: (u32, u32) = (1000, 800);
const HISTOGRAM_BINS: usize = 20;
const KDE_SAMPLES: usize = 200;

/// Kernel density estimate of the first numeric column, drawn as a filled
/// curve.
pub(super) fn render_density(path: &Path, column: &str, values: &[f64]) -> Result<()> {
    let err = |e: &dyn std::fmt::Display| ReportError::render(path.display().to_string(), e);

    let curve = kde_curve(values);
    let (x_min, x_max) = curve
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), (x, _)| (lo.min(*x), hi.max(*x)));
    let y_max = curve.iter().map(|(_, y)| *y).fold(0.0f64, f64::max);

    let root = BitMapBackend::new(path, SINGLE_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Density Plot of {column}"), ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..f64::max(y_max * 1.1, 1e-3))
        .map_err(|e| err(&e))?;
    chart
        .configure_mesh()
        .x_desc(column)
        .y_desc("Density")
        .draw()
        .map_err(|e| err(&e))?;

    chart
        .draw_series(AreaSeries::new(curve, 0.0, RGBColor(135, 206, 235).mix(0.4)).border_style(BLUE))
        .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

/// Scatter plot of the first two numeric columns.
pub(super) fn render_scatter(
    path: &Path,
    x_name: &str,
    y_name: &str,
    pairs: &[(f64, f64)],
) -> Result<()> {
    let err = |e: &dyn std::fmt::Display| ReportError::render(path.display().to_string(), e);

    let (x_min, x_max) = padded_range(pairs.iter().map(|(x, _)| *x));
    let (y_min, y_max) = padded_range(pairs.iter().map(|(_, y)| *y));

    let root = BitMapBackend::new(path, SINGLE_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Scatter Plot of {x_name} vs {y_name}"),
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| err(&e))?;
    chart
        .configure_mesh()
        .x_desc(x_name)
        .y_desc(y_name)
        .draw()
        .map_err(|e| err(&e))?;

    chart
        .draw_series(
            pairs
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), 4, GREEN.filled())),
        )
        .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

/// Histogram grid: one 20-bin histogram per numeric column.
pub(super) fn render_histogram_grid(path: &Path, series: &[(String, Vec<f64>)]) -> Result<()> {
    let err = |e: &dyn std::fmt::Display| ReportError::render(path.display().to_string(), e);

    let root = BitMapBackend::new(path, GRID_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let cols = (series.len() as f64).sqrt().ceil() as usize;
    let rows = series.len().div_ceil(cols);
    let cells = root.split_evenly((rows, cols));

    for ((name, values), cell) in series.iter().zip(cells.iter()) {
        let (bins, bin_width, x_min) = bin_counts(values);
        let max_count = bins.iter().copied().max().unwrap_or(0).max(1) as u32;
        let x_max = x_min + bin_width * HISTOGRAM_BINS as f64;

        let mut chart = ChartBuilder::on(cell)
            .caption(name, ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(x_min..x_max, 0u32..max_count + 1)
            .map_err(|e| err(&e))?;
        chart.configure_mesh().draw().map_err(|e| err(&e))?;

        chart
            .draw_series(bins.iter().enumerate().map(|(i, count)| {
                let x0 = x_min + i as f64 * bin_width;
                Rectangle::new(
                    [(x0, 0u32), (x0 + bin_width, *count as u32)],
                    RGBColor(255, 165, 0).filled().stroke_width(1),
                )
            }))
            .map_err(|e| err(&e))?;
    }

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

/// Correlation heatmap over the numeric columns.
///
/// An empty matrix still produces a (blank, titled) artifact so the file
/// reference downstream is never dangling.
pub(super) fn render_heatmap(path: &Path, matrix: &CorrelationMatrix) -> Result<()> {
    let err = |e: &dyn std::fmt::Display| ReportError::render(path.display().to_string(), e);

    let root = BitMapBackend::new(path, GRID_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;
    let root = root
        .titled("Correlation Matrix Heatmap", ("sans-serif", 28))
        .map_err(|e| err(&e))?;

    if matrix.is_empty() {
        root.present().map_err(|e| err(&e))?;
        return Ok(());
    }

    let n = matrix.len();
    let labels = matrix.labels.clone();
    let label_for = move |v: &f64| -> String {
        labels
            .get(v.floor() as usize)
            .cloned()
            .unwrap_or_default()
    };
    let y_labels = matrix.labels.clone();
    let y_label_for = move |v: &f64| -> String {
        let idx = n as f64 - v.floor() - 1.0;
        y_labels
            .get(idx as usize)
            .cloned()
            .unwrap_or_default()
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)
        .map_err(|e| err(&e))?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&label_for)
        .y_label_formatter(&y_label_for)
        .draw()
        .map_err(|e| err(&e))?;

    // Row 0 at the top, matching the label order.
    for i in 0..n {
        for j in 0..n {
            let value = matrix.get(i, j);
            let y0 = (n - 1 - i) as f64;
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(j as f64, y0), (j as f64 + 1.0, y0 + 1.0)],
                    heat_color(value).filled(),
                )))
                .map_err(|e| err(&e))?;

            let label = match value {
                Some(r) => format!("{:.2}", r),
                None => "-".to_string(),
            };
            chart
                .draw_series(std::iter::once(Text::new(
                    label,
                    (j as f64 + 0.35, y0 + 0.45),
                    ("sans-serif", 16).into_font().color(&BLACK),
                )))
                .map_err(|e| err(&e))?;
        }
    }

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

/// Gaussian kernel density estimate with Silverman's bandwidth, evaluated
/// on a fixed grid spanning the data plus three bandwidths on each side.
fn kde_curve(values: &[f64]) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return vec![(0.0, 0.0), (1.0, 0.0)];
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if values.len() > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        0.0
    };
    let bandwidth = if std > 0.0 {
        1.06 * std * n.powf(-0.2)
    } else {
        1.0
    };

    let lo = values.iter().copied().fold(f64::MAX, f64::min) - 3.0 * bandwidth;
    let hi = values.iter().copied().fold(f64::MIN, f64::max) + 3.0 * bandwidth;
    let step = (hi - lo) / (KDE_SAMPLES - 1) as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..KDE_SAMPLES)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}

/// Axis range padded by 5%, widened when degenerate.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        return (0.0, 1.0);
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}

/// Bin the values into the fixed histogram bin count.
fn bin_counts(values: &[f64]) -> (Vec<usize>, f64, f64) {
    let (lo, hi) = values
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    if values.is_empty() || lo > hi {
        return (vec![0; HISTOGRAM_BINS], 1.0, 0.0);
    }
    let width = if hi > lo {
        (hi - lo) / HISTOGRAM_BINS as f64
    } else {
        1.0
    };

    let mut bins = vec![0usize; HISTOGRAM_BINS];
    for v in values {
        let idx = (((v - lo) / width) as usize).min(HISTOGRAM_BINS - 1);
        bins[idx] += 1;
    }
    (bins, width, lo)
}

/// Diverging blue-white-red ramp over [-1, 1]; undefined cells render gray.
fn heat_color(value: Option<f64>) -> RGBColor {
    let Some(r) = value else {
        return RGBColor(220, 220, 220);
    };
    let t = r.clamp(-1.0, 1.0);
    let blend = |a: f64, b: f64, t: f64| (a + (b - a) * t) as u8;
    if t < 0.0 {
        // white -> blue as t goes to -1
        let s = -t;
        RGBColor(blend(255.0, 59.0, s), blend(255.0, 76.0, s), blend(255.0, 192.0, s))
    } else {
        // white -> red as t goes to +1
        RGBColor(blend(255.0, 180.0, t), blend(255.0, 4.0, t), blend(255.0, 38.0, t))
    }
}
