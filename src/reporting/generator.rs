//! Markdown report assembly.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::types::VisualizationSet;
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const REPORT_TITLE: &str = "# Automated Data Analysis Report";
const REPORT_INTRO: &str = "This report presents a detailed analysis of the dataset, \
including descriptive statistics, data visualizations, and key insights.";

/// One fixed subsection per chart: title, description, file reference.
struct VisualizationSection {
    title: &'static str,
    description: &'static str,
    alt_text: &'static str,
}

const DENSITY_SECTION: VisualizationSection = VisualizationSection {
    title: "Density Plot",
    description: "This plot shows the distribution of the first numeric column. It helps in \
understanding the shape of the distribution (e.g., normal, skewed, etc.).",
    alt_text: "Density Plot",
};

const SCATTER_SECTION: VisualizationSection = VisualizationSection {
    title: "Scatter Plot",
    description: "This plot illustrates the relationship between the first two numeric columns. \
It can show if there is any correlation or a specific trend.",
    alt_text: "Scatter Plot",
};

const HISTOGRAM_SECTION: VisualizationSection = VisualizationSection {
    title: "Histogram",
    description: "This plot provides a view of the distribution of all numeric columns in the \
dataset. It is useful to identify data patterns such as skewness or outliers.",
    alt_text: "Histogram",
};

const HEATMAP_SECTION: VisualizationSection = VisualizationSection {
    title: "Correlation Heatmap",
    description: "This heatmap visualizes the correlations between numeric columns in the dataset.",
    alt_text: "Correlation Heatmap",
};

/// Assembles the final markdown document.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Build the markdown document from the narrative and the charts that
    /// were actually rendered.
    ///
    /// Subsections keep a fixed order (density, scatter, histogram,
    /// heatmap); a chart skipped for lack of numeric columns gets no
    /// subsection, so the report never carries a dangling image link.
    pub fn assemble(narrative: &str, visualizations: &VisualizationSet) -> String {
        let mut doc = String::new();
        doc.push_str(REPORT_TITLE);
        doc.push('\n');
        doc.push_str(REPORT_INTRO);
        doc.push_str("\n\n");
        doc.push_str(&format!(
            "_Generated on {}._\n\n",
            Local::now().format("%Y-%m-%d %H:%M")
        ));

        doc.push_str("## Insights from Dataset Analysis\n");
        doc.push_str(narrative);
        doc.push('\n');

        doc.push_str("\n## Visualizations\n");

        let sections: [(&VisualizationSection, Option<&PathBuf>); 4] = [
            (&DENSITY_SECTION, visualizations.density.as_ref()),
            (&SCATTER_SECTION, visualizations.scatter.as_ref()),
            (&HISTOGRAM_SECTION, visualizations.histogram.as_ref()),
            (&HEATMAP_SECTION, visualizations.heatmap.as_ref()),
        ];

        let mut index = 0;
        for (section, path) in sections {
            let Some(path) = path else { continue };
            index += 1;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            doc.push_str(&format!("\n### {}. {}\n", index, section.title));
            doc.push_str(section.description);
            doc.push('\n');
            doc.push_str(&format!("![{}]({})\n", section.alt_text, file_name));
        }

        doc
    }

    /// Assemble and write the report, overwriting any prior content.
    pub fn write_report(
        config: &ReportConfig,
        narrative: &str,
        visualizations: &VisualizationSet,
    ) -> Result<PathBuf> {
        let document = Self::assemble(narrative, visualizations);
        let path = config.report_path();
        fs::write(&path, document)?;
        info!("Report written to: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_set() -> VisualizationSet {
        VisualizationSet {
            density: Some(PathBuf::from("density_plot.png")),
            scatter: Some(PathBuf::from("scatter_plot.png")),
            histogram: Some(PathBuf::from("histogram.png")),
            heatmap: Some(PathBuf::from("correlation_heatmap.png")),
        }
    }

    // ==================== assemble tests ====================

    #[test]
    fn test_assemble_contains_narrative_verbatim() {
        let narrative = "The income column is heavily right-skewed.";
        let doc = ReportAssembler::assemble(narrative, &full_set());

        assert!(doc.starts_with(REPORT_TITLE));
        assert!(doc.contains("## Insights from Dataset Analysis"));
        assert!(doc.contains(narrative));
    }

    #[test]
    fn test_assemble_fixed_section_order() {
        let doc = ReportAssembler::assemble("n", &full_set());

        let density = doc.find("### 1. Density Plot").unwrap();
        let scatter = doc.find("### 2. Scatter Plot").unwrap();
        let histogram = doc.find("### 3. Histogram").unwrap();
        let heatmap = doc.find("### 4. Correlation Heatmap").unwrap();
        assert!(density < scatter && scatter < histogram && histogram < heatmap);

        assert!(doc.contains("![Density Plot](density_plot.png)"));
        assert!(doc.contains("![Scatter Plot](scatter_plot.png)"));
        assert!(doc.contains("![Histogram](histogram.png)"));
        assert!(doc.contains("![Correlation Heatmap](correlation_heatmap.png)"));
    }

    #[test]
    fn test_assemble_omits_skipped_plots() {
        let set = VisualizationSet {
            density: None,
            scatter: None,
            histogram: None,
            heatmap: Some(PathBuf::from("correlation_heatmap.png")),
        };
        let doc = ReportAssembler::assemble("n", &set);

        assert!(!doc.contains("density_plot.png"));
        assert!(!doc.contains("scatter_plot.png"));
        assert!(!doc.contains("histogram.png"));
        // The one rendered chart is renumbered from 1.
        assert!(doc.contains("### 1. Correlation Heatmap"));
    }

    #[test]
    fn test_assemble_is_deterministic_for_fixed_inputs() {
        let a = ReportAssembler::assemble("same narrative", &full_set());
        let b = ReportAssembler::assemble("same narrative", &full_set());
        // Only the timestamp line may differ between runs.
        let strip = |doc: &str| {
            doc.lines()
                .filter(|l| !l.starts_with("_Generated on "))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(&a), strip(&b));
    }

    // ==================== write_report tests ====================

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::builder()
            .output_dir(dir.path())
            .build()
            .unwrap();

        let first = ReportAssembler::write_report(&config, "first run", &full_set()).unwrap();
        let second = ReportAssembler::write_report(&config, "second run", &full_set()).unwrap();
        assert_eq!(first, second);

        let content = std::fs::read_to_string(second).unwrap();
        assert!(content.contains("second run"));
        assert!(!content.contains("first run"));
    }
}
