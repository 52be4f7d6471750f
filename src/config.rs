//! Configuration types for the report pipeline.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic pipeline setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a report run.
///
/// Use [`ReportConfig::builder()`] to create a new configuration with a
/// fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use csv_insight::config::ReportConfig;
///
/// let config = ReportConfig::builder()
///     .output_dir("outputs")
///     .report_name("README.md")
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory that receives the chart artifacts and the markdown report.
    /// Default: "." (the working directory)
    pub output_dir: PathBuf,

    /// File name of the markdown report inside `output_dir`.
    /// Default: "README.md"
    pub report_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            report_name: "README.md".to_string(),
        }
    }
}

impl ReportConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Full path of the markdown report.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_name)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.report_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyReportName);
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyOutputDir);
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Report name must not be empty")]
    EmptyReportName,

    #[error("Output directory must not be empty")]
    EmptyOutputDir,
}

/// Builder for [`ReportConfig`].
#[derive(Default)]
pub struct ReportConfigBuilder {
    output_dir: Option<PathBuf>,
    report_name: Option<String>,
}

impl ReportConfigBuilder {
    /// Set the output directory for artifacts and the report.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the report file name.
    pub fn report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = Some(name.into());
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ReportConfig, ConfigValidationError> {
        let defaults = ReportConfig::default();
        let config = ReportConfig {
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            report_name: self.report_name.unwrap_or(defaults.report_name),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.report_name, "README.md");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = ReportConfig::builder()
            .output_dir("results")
            .report_name("analysis.md")
            .build()
            .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.report_path(), PathBuf::from("results/analysis.md"));
    }

    #[test]
    fn test_empty_report_name_rejected() {
        let result = ReportConfig::builder().report_name("  ").build();
        assert!(matches!(result, Err(ConfigValidationError::EmptyReportName)));
    }
}
