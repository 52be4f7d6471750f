//! CLI entry point for the EDA report generator.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use csv_insight::ai::OpenAiProvider;
use csv_insight::{ReportConfig, ReportPipeline, load_csv};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;

/// Environment variable carrying the bearer credential for the narrative
/// endpoint.
const API_TOKEN_VAR: &str = "AIPROXY_TOKEN";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Automated EDA reports for CSV datasets",
    long_about = "Generates a markdown report for a CSV dataset: descriptive statistics,\n\
                  missing-value and outlier diagnostics, a correlation matrix, four chart\n\
                  artifacts, and an LLM-written narrative.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  AIPROXY_TOKEN    Bearer credential for the narrative endpoint (required)\n\n\
                  EXAMPLES:\n  \
                  # Analyze a dataset and write README.md plus charts to the working directory\n  \
                  csv-insight data.csv"
)]
struct Args {
    /// Path to the CSV dataset to analyze
    dataset: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    // Load environment variables from .env file
    dotenv().ok();

    // The credential is required before any analysis work begins.
    let api_token = std::env::var(API_TOKEN_VAR)
        .map_err(|_| anyhow!("{} environment variable not set", API_TOKEN_VAR))?;

    info!("Loading dataset from: {}", args.dataset);
    let df = load_csv(&args.dataset).context("Failed to load dataset")?;
    info!("Dataset loaded successfully: {:?}", df.shape());

    let provider = Arc::new(OpenAiProvider::new(api_token)?);
    let pipeline = ReportPipeline::builder()
        .config(ReportConfig::default())
        .provider(provider)
        .build()?;

    let report_path = pipeline.run(df)?;
    println!("Report written to {}", report_path.display());

    Ok(())
}
