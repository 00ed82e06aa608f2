//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Sift using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Sift - PII detection and risk scoring
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
#[command(author = "Sift Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sift.toml", env = "SIFT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SIFT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan text for PII and compute a risk score
    Scan(commands::scan::ScanArgs),

    /// Validate configuration, pattern catalog and sensitivity table
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show the active pattern catalog and weights
    Patterns(commands::patterns::PatternsArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["sift", "scan"]);
        assert_eq!(cli.config, "sift.toml");
        assert!(matches!(cli.command, Commands::Scan(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["sift", "--config", "custom.toml", "scan"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["sift", "--log-level", "debug", "scan"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_scan_with_text() {
        let cli = Cli::parse_from(["sift", "scan", "--text", "hello"]);
        match cli.command {
            Commands::Scan(args) => assert_eq!(args.text.as_deref(), Some("hello")),
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["sift", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_patterns() {
        let cli = Cli::parse_from(["sift", "patterns"]);
        assert!(matches!(cli.command, Commands::Patterns(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["sift", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
