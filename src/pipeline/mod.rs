//! The analysis-and-report pipeline.
//!
//! Stages run strictly in sequence: load → statistical summary, missing
//! values, correlation → outlier detection → visualization → narrative →
//! report assembly. The single blocking HTTP call to the narrative
//! endpoint is the only point where the run waits on anything external,
//! and it starts only after every analysis output exists.

mod loader;
mod outliers;

use crate::ai::{NarrativeProvider, build_analysis_prompt};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::profiler::{StatisticalAnalyzer, correlation_matrix};
use crate::reporting::ReportAssembler;
use crate::viz::Visualizer;
use polars::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub use loader::load_csv;
pub use outliers::OutlierDetector;

/// Orchestrates one report run over a loaded frame.
///
/// # Example
///
/// ```rust,ignore
/// use csv_insight::{ReportConfig, ReportPipeline};
/// use csv_insight::ai::OpenAiProvider;
/// use std::sync::Arc;
///
/// let provider = Arc::new(OpenAiProvider::new(api_token)?);
/// let report_path = ReportPipeline::builder()
///     .config(ReportConfig::default())
///     .provider(provider)
///     .build()?
///     .run(df)?;
/// ```
pub struct ReportPipeline {
    config: ReportConfig,
    provider: Arc<dyn NarrativeProvider>,
}

impl ReportPipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> ReportPipelineBuilder {
        ReportPipelineBuilder::default()
    }

    /// Run the full pipeline and return the path of the written report.
    pub fn run(&self, df: DataFrame) -> Result<PathBuf> {
        info!(
            "Analyzing dataset: {} rows x {} columns",
            df.height(),
            df.width()
        );

        let summary = StatisticalAnalyzer::summarize(&df)
            .map_err(|e| ReportError::Analysis(format!("column summary failed: {e}")))?;
        let missing = StatisticalAnalyzer::missing_values(&df);
        let matrix = correlation_matrix(&df)
            .map_err(|e| ReportError::Analysis(format!("correlation failed: {e}")))?;
        info!(
            "Summary ready: {} columns, {} null cells, {} numeric columns",
            summary.columns.len(),
            missing.total(),
            matrix.len()
        );

        let outliers = OutlierDetector::detect(&df)
            .map_err(|e| ReportError::Analysis(format!("outlier detection failed: {e}")))?;
        info!("Outlier detection done: {} flagged values", outliers.total());

        let visualizations = Visualizer::render_all(&df, &self.config.output_dir)?;
        info!(
            "Visualizations rendered: {}/4 artifacts",
            visualizations.rendered_count()
        );

        let prompt = build_analysis_prompt(&summary, &missing, &matrix, &outliers);
        info!(
            "Requesting narrative from {} ({})",
            self.provider.name(),
            self.provider.model().unwrap_or("default model")
        );
        let narrative = self.provider.generate_narrative(&prompt)?;

        ReportAssembler::write_report(&self.config, &narrative, &visualizations)
    }
}

/// Builder for [`ReportPipeline`].
#[derive(Default)]
pub struct ReportPipelineBuilder {
    config: Option<ReportConfig>,
    provider: Option<Arc<dyn NarrativeProvider>>,
}

impl ReportPipelineBuilder {
    /// Set the run configuration.
    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the narrative provider.
    pub fn provider(mut self, provider: Arc<dyn NarrativeProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no narrative provider was set.
    pub fn build(self) -> Result<ReportPipeline> {
        let provider = self.provider.ok_or_else(|| {
            ReportError::Configuration("a narrative provider is required".to_string())
        })?;
        Ok(ReportPipeline {
            config: self.config.unwrap_or_default(),
            provider,
        })
    }
}
