//! Patterns command implementation
//!
//! Prints the active pattern catalog with the sensitivity weight of each
//! detector, so operators can see exactly what a scan will look for.

use crate::config::load_config_or_default;
use crate::detection::{PatternCatalog, PiiCategory};
use crate::scoring::SensitivityTable;
use clap::Args;

/// Arguments for the patterns command
#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Also print the regex pattern of each detector
    #[arg(long)]
    pub verbose: bool,
}

impl PatternsArgs {
    /// Execute the patterns command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config_or_default(config_path)?;

        let catalog = match config.detection.pattern_library {
            Some(ref path) => PatternCatalog::from_file(path)?,
            None => PatternCatalog::builtin()?,
        };
        let table = match config.detection.sensitivity_table {
            Some(ref path) => SensitivityTable::from_file(path)?,
            None => SensitivityTable::builtin()?,
        };

        println!("Active pattern catalog ({} detectors)", catalog.len());
        println!();

        for category in PiiCategory::all() {
            let detectors: Vec<_> = catalog.detectors_for_category(*category).collect();
            if detectors.is_empty() {
                continue;
            }

            println!("{}", category.label());
            for detector in detectors {
                println!(
                    "  {:30} weight {}",
                    detector.name,
                    table.weight(&detector.name)
                );
                if self.verbose {
                    println!("    {}", detector.regex.as_str());
                }
            }
            println!();
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_args_creation() {
        let args = PatternsArgs { verbose: false };
        let _ = format!("{args:?}");
    }
}
