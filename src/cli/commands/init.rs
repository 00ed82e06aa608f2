//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sift.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Sift configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: sift validate-config");
                println!("  3. Run a scan: sift scan --text \"jane.doe@example.com\"");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Sift Configuration File
# PII detection and risk scoring

[application]
name = "sift"
log_level = "info"

[detection]
# Both settings are optional; the embedded defaults are used when absent.
# pattern_library = "patterns/pii_patterns.toml"
# sensitivity_table = "patterns/sensitivity.toml"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let content = InitArgs::generate_config();
        let config: crate::config::SiftConfig = toml::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
    }
}
