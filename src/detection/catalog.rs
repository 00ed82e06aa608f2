//! Pattern catalog for PII detection
//!
//! The catalog is the static table of named detectors, each a compiled
//! regex assigned to one category. It is loaded once at startup (from the
//! embedded default resource or a TOML file) and read-only afterwards; a
//! pattern that fails to compile is a startup fault, never a scan-time one.

use crate::detection::models::PiiCategory;
use anyhow::{Context, Result};
use fancy_regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Detector entry from TOML
#[derive(Debug, Clone, Deserialize)]
struct DetectorEntry {
    /// Detector name, unique within its category
    name: String,
    /// Regex pattern source
    pattern: String,
}

/// Category block from TOML
#[derive(Debug, Clone, Deserialize)]
struct CategoryBlock {
    /// Category label
    name: String,
    /// Ordered detector list
    #[serde(default)]
    detector: Vec<DetectorEntry>,
}

/// Catalog file container
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    category: Vec<CategoryBlock>,
}

/// Compiled detector with metadata
#[derive(Debug, Clone)]
pub struct Detector {
    /// Detector name from the catalog
    pub name: String,
    /// Category the detector belongs to
    pub category: PiiCategory,
    /// Compiled regex
    pub regex: Regex,
}

/// Static catalog of compiled detectors
///
/// Detectors keep catalog file order, grouped category-first.
#[derive(Debug)]
pub struct PatternCatalog {
    detectors: Vec<Detector>,
}

impl PatternCatalog {
    /// Create a catalog from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern catalog: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a catalog from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).context("Failed to parse pattern catalog TOML")?;

        let mut detectors: Vec<Detector> = Vec::new();

        for block in &file.category {
            let category = Self::parse_category(&block.name)
                .with_context(|| format!("Invalid category in catalog: {}", block.name))?;

            for entry in &block.detector {
                let duplicate = detectors
                    .iter()
                    .any(|d| d.category == category && d.name == entry.name);
                if duplicate {
                    anyhow::bail!(
                        "Duplicate detector '{}' in category '{}'",
                        entry.name,
                        category.label()
                    );
                }

                let regex = Regex::new(&entry.pattern).with_context(|| {
                    format!(
                        "Invalid regex for detector '{}': {}",
                        entry.name, entry.pattern
                    )
                })?;

                detectors.push(Detector {
                    name: entry.name.clone(),
                    category,
                    regex,
                });
            }
        }

        if detectors.is_empty() {
            anyhow::bail!("Pattern catalog contains no detectors");
        }

        Ok(Self { detectors })
    }

    /// Create the default catalog from the embedded pattern resource
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// All detectors in catalog order
    pub fn detectors(&self) -> &[Detector] {
        &self.detectors
    }

    /// Detectors belonging to one category, in catalog order
    pub fn detectors_for_category(
        &self,
        category: PiiCategory,
    ) -> impl Iterator<Item = &Detector> + '_ {
        self.detectors.iter().filter(move |d| d.category == category)
    }

    /// Number of detectors in the catalog
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Whether the catalog holds no detectors
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Parse a category label to the PiiCategory enum
    fn parse_category(s: &str) -> Result<PiiCategory> {
        match s.to_uppercase().as_str() {
            "FINANCIAL INFORMATION" | "FINANCIAL" => Ok(PiiCategory::Financial),
            "MEDICAL INFORMATION" | "MEDICAL" => Ok(PiiCategory::Medical),
            "PERSONAL INFORMATION" | "PERSONAL" => Ok(PiiCategory::Personal),
            "IDENTIFICATION INFORMATION" | "IDENTIFICATION" => Ok(PiiCategory::Identification),
            _ => anyhow::bail!("Unknown PII category: {s}"),
        }
    }
}
