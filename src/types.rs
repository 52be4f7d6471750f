use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Descriptive statistics for a single column.
///
/// Numeric aggregates are populated for numeric columns, the unique/mode
/// aggregates for everything else. `count` is always the non-null count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnStats {
    pub name: String,
    pub dtype: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q25: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q75: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_frequent: Option<String>,
}

impl ColumnStats {
    /// Whether this column carries numeric aggregates.
    pub fn is_numeric(&self) -> bool {
        self.mean.is_some()
    }
}

/// Descriptive statistics for every column, in frame column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// (rows, columns) of the source frame.
    pub shape: (usize, usize),
    pub columns: Vec<ColumnStats>,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} rows x {} columns", self.shape.0, self.shape.1)?;
        for col in &self.columns {
            if col.is_numeric() {
                writeln!(
                    f,
                    "{} ({}): count={} mean={} std={} min={} q25={} median={} q75={} max={}",
                    col.name,
                    col.dtype,
                    col.count,
                    fmt_stat(col.mean),
                    fmt_stat(col.std),
                    fmt_stat(col.min),
                    fmt_stat(col.q25),
                    fmt_stat(col.median),
                    fmt_stat(col.q75),
                    fmt_stat(col.max),
                )?;
            } else {
                writeln!(
                    f,
                    "{} ({}): count={} unique={} top={}",
                    col.name,
                    col.dtype,
                    col.count,
                    col.unique_count.unwrap_or(0),
                    col.most_frequent.as_deref().unwrap_or("NaN"),
                )?;
            }
        }
        Ok(())
    }
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "NaN".to_string(),
    }
}

/// Per-column null counts, in frame column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissingValueReport {
    pub counts: Vec<(String, usize)>,
}

impl MissingValueReport {
    /// Total null cells across the whole frame.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Null count for a named column, if present.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, n)| *n)
    }
}

impl fmt::Display for MissingValueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, count) in &self.counts {
            writeln!(f, "{}: {}", name, count)?;
        }
        Ok(())
    }
}

/// Pairwise Pearson correlations over the numeric columns.
///
/// Square and symmetric; `None` marks an undefined coefficient (a column
/// without enough variance or enough paired observations).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Coefficient at (row, col). Out-of-range indices return `None`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(no numeric columns)");
        }
        writeln!(f, "{}", self.labels.join(", "))?;
        for (i, row) in self.values.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|v| match v {
                    Some(r) => format!("{:.4}", r),
                    None => "NaN".to_string(),
                })
                .collect();
            writeln!(f, "{}: {}", self.labels[i], cells.join(", "))?;
        }
        Ok(())
    }
}

/// Count of |z| > 3 rows per numeric column, in frame column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlierReport {
    pub counts: Vec<(String, usize)>,
}

impl OutlierReport {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for OutlierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return writeln!(f, "(no numeric columns)");
        }
        for (name, count) in &self.counts {
            writeln!(f, "{}: {}", name, count)?;
        }
        Ok(())
    }
}

/// Which chart artifacts a run actually wrote, with their paths.
///
/// Density and scatter are absent when the frame has too few numeric
/// columns; the heatmap is always attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizationSet {
    pub density: Option<PathBuf>,
    pub scatter: Option<PathBuf>,
    pub histogram: Option<PathBuf>,
    pub heatmap: Option<PathBuf>,
}

impl VisualizationSet {
    /// Number of artifacts written in this run.
    pub fn rendered_count(&self) -> usize {
        [
            self.density.is_some(),
            self.scatter.is_some(),
            self.histogram.is_some(),
            self.heatmap.is_some(),
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}
