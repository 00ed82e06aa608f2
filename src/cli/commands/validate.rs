//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating the
//! Sift configuration file together with the pattern catalog and
//! sensitivity table it points at.

use crate::config::load_config;
use crate::detection::PatternCatalog;
use crate::scoring::SensitivityTable;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Compile the pattern catalog; an invalid pattern must fail here,
        // never at scan time.
        let catalog = match config.detection.pattern_library {
            Some(ref path) => PatternCatalog::from_file(path),
            None => PatternCatalog::builtin(),
        };
        let catalog = match catalog {
            Ok(c) => {
                println!("✅ Pattern catalog compiled ({} detectors)", c.len());
                c
            }
            Err(e) => {
                println!("❌ Pattern catalog failed to compile");
                println!("   Error: {e:#}");
                return Ok(2);
            }
        };

        let table = match config.detection.sensitivity_table {
            Some(ref path) => SensitivityTable::from_file(path),
            None => SensitivityTable::builtin(),
        };
        let table = match table {
            Ok(t) => {
                println!("✅ Sensitivity table loaded ({} weights)", t.len());
                t
            }
            Err(e) => {
                println!("❌ Sensitivity table failed to load");
                println!("   Error: {e:#}");
                return Ok(2);
            }
        };

        let unweighted: Vec<&str> = catalog
            .detectors()
            .iter()
            .filter(|d| table.weight(&d.name) == 0)
            .map(|d| d.name.as_str())
            .collect();
        if !unweighted.is_empty() {
            println!();
            println!("⚠️  Detectors without a sensitivity weight (contribute 0 risk):");
            for name in unweighted {
                println!("   • {name}");
            }
        }

        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Pattern Catalog: {}",
            config
                .detection
                .pattern_library
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!(
            "  Sensitivity Table: {}",
            config
                .detection
                .sensitivity_table
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(0)
    }
}
