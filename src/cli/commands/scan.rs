//! Scan command implementation
//!
//! Reads text from a file, a `--text` literal, or stdin, runs detection and
//! scoring, and renders the report.

use crate::config::load_config_or_default;
use crate::config::schema::SiftConfig;
use crate::detection::{DetectionEngine, PatternCatalog};
use crate::report::ScanReport;
use crate::scoring::{RiskScorer, SensitivityTable};
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tokio::io::AsyncReadExt;

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable console report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to a text file to scan (stdin is read when neither a file nor
    /// --text is given)
    pub input: Option<PathBuf>,

    /// Literal text to scan instead of a file
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the JSON report to a file in addition to printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config_or_default(config_path)
            .with_context(|| format!("Failed to load configuration from {config_path}"))?;

        let engine = build_engine(&config)?;
        let scorer = build_scorer(&config)?;

        let text = self.read_input().await?;
        tracing::debug!(chars = text.chars().count(), "Input loaded");

        let start = Instant::now();
        let detections = engine.detect(&text);
        let risk_score = scorer.score(&detections);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            matches = detections.total_matches(),
            categories = detections.category_count(),
            risk_score,
            elapsed_ms,
            "Scan completed"
        );

        let report = ScanReport::new(detections, risk_score, text.chars().count(), elapsed_ms);

        if let Some(ref path) = self.output {
            report
                .write_to_file(path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("📄 Report written to {}", path.display());
        }

        match self.format {
            OutputFormat::Text => print!("{}", report.format_console()),
            OutputFormat::Json => println!("{}", report.format_json()?),
        }

        Ok(0)
    }

    /// Read the scan input from the configured source
    async fn read_input(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }

        if let Some(ref path) = self.input {
            return tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()));
        }

        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }
}

/// Build the detection engine from configuration
fn build_engine(config: &SiftConfig) -> anyhow::Result<DetectionEngine> {
    match config.detection.pattern_library {
        Some(ref path) => {
            tracing::debug!(path = %path.display(), "Loading pattern catalog from file");
            let catalog = PatternCatalog::from_file(path)?;
            Ok(DetectionEngine::with_catalog(catalog))
        }
        None => DetectionEngine::new(),
    }
}

/// Build the risk scorer from configuration
fn build_scorer(config: &SiftConfig) -> anyhow::Result<RiskScorer> {
    match config.detection.sensitivity_table {
        Some(ref path) => {
            tracing::debug!(path = %path.display(), "Loading sensitivity table from file");
            let table = SensitivityTable::from_file(path)?;
            Ok(RiskScorer::with_table(table))
        }
        None => RiskScorer::new(),
    }
}
