//! Custom error types for the analysis-and-report pipeline.
//!
//! This module provides the error hierarchy using `thiserror`. Every stage
//! surfaces its failures through [`ReportError`]; nothing is swallowed apart
//! from the documented graceful degradations (plots skipped when too few
//! numeric columns exist).

use thiserror::Error;

/// The main error type for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Required credential missing from the environment.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input dataset missing or unreadable.
    #[error("Cannot access dataset '{path}': {source}")]
    DataAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Statistical analysis failed on an unexpected data shape.
    #[error("Analysis failed: {0}")]
    Analysis(String),

    /// The narrative endpoint failed or returned an unusable response.
    #[error("Narrative generation failed: {0}")]
    NarrativeGeneration(String),

    /// A chart artifact could not be rendered or written.
    #[error("Failed to render '{artifact}': {reason}")]
    Render { artifact: String, reason: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error from the narrative client.
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
}

impl ReportError {
    /// Create a render error for a named artifact.
    pub fn render(artifact: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ReportError::Render {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    /// Get a stable error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::DataAccess { .. } => "DATA_ACCESS_ERROR",
            Self::Analysis(_) => "ANALYSIS_ERROR",
            Self::NarrativeGeneration(_) => "NARRATIVE_GENERATION_ERROR",
            Self::Render { .. } => "RENDER_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::HttpRequest(_) => "HTTP_REQUEST_ERROR",
        }
    }

    /// Check whether this error was raised before any analysis work began.
    pub fn is_startup_failure(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::DataAccess { .. })
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
