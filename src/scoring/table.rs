//! Sensitivity weight table

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Weight table container from TOML
#[derive(Debug, Deserialize)]
struct TableFile {
    weights: HashMap<String, u32>,
}

/// Static mapping from detector name to sensitivity weight
///
/// Weights reflect how damaging exposure of one instance of a PII type is.
/// The table is loaded once at startup and read-only afterwards. Detector
/// names absent from the table weigh 0, so new detectors can be added to
/// the catalog without touching the table; they contribute no risk until a
/// weight is assigned.
#[derive(Debug, Clone)]
pub struct SensitivityTable {
    weights: HashMap<String, u32>,
}

impl SensitivityTable {
    /// Load a table from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read sensitivity table: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Parse a table from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: TableFile =
            toml::from_str(content).context("Failed to parse sensitivity table TOML")?;

        Ok(Self {
            weights: file.weights,
        })
    }

    /// The default table from the embedded resource
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../patterns/sensitivity.toml");
        Self::from_toml(default_toml)
    }

    /// Weight for a detector name; 0 for names not in the table
    pub fn weight(&self, detector: &str) -> u32 {
        self.weights.get(detector).copied().unwrap_or(0)
    }

    /// Number of weighted detector names
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table holds no weights
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate (detector name, weight) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
