//! Automated EDA Report Library
//!
//! Turns a CSV dataset into a single markdown report combining descriptive
//! statistics, missing-value and outlier diagnostics, a correlation matrix,
//! four chart artifacts, and an LLM-generated narrative.
//!
//! # Overview
//!
//! The pipeline runs strictly in sequence:
//!
//! - **Loading**: robust CSV ingestion with lossy text decoding
//! - **Profiling**: descriptive statistics, missing values, Pearson correlations
//! - **Outlier Detection**: per-column |z| > 3 counts
//! - **Visualization**: density, scatter, histogram grid, correlation heatmap
//! - **Narrative**: one chat-completion request against an injectable provider
//! - **Assembly**: the final markdown document
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use csv_insight::ai::OpenAiProvider;
//! use csv_insight::{ReportConfig, ReportPipeline, load_csv};
//! use std::sync::Arc;
//!
//! let df = load_csv("data.csv")?;
//! let provider = Arc::new(OpenAiProvider::new(api_token)?);
//!
//! let report = ReportPipeline::builder()
//!     .config(ReportConfig::default())
//!     .provider(provider)
//!     .build()?
//!     .run(df)?;
//!
//! println!("Report written to {}", report.display());
//! ```
//!
//! # Narrative Providers
//!
//! The narrative backend is abstracted behind [`ai::NarrativeProvider`], so
//! tests can inject a canned implementation instead of calling the network.
//! [`ai::OpenAiProvider`] speaks the chat-completions envelope against any
//! OpenAI-compatible endpoint; the bearer credential is passed to its
//! constructor rather than read from global state.

pub mod ai;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod profiler;
pub mod reporting;
pub mod types;
pub mod utils;
pub mod viz;

// Re-exports for convenient access
pub use config::{ConfigValidationError, ReportConfig, ReportConfigBuilder};
pub use error::{ReportError, Result as ReportResult};
pub use pipeline::{OutlierDetector, ReportPipeline, ReportPipelineBuilder, load_csv};
pub use profiler::{StatisticalAnalyzer, correlation_matrix};
pub use reporting::ReportAssembler;
pub use types::{
    ColumnStats, CorrelationMatrix, DatasetSummary, MissingValueReport, OutlierReport,
    VisualizationSet,
};
pub use viz::Visualizer;
