//! Regex-based detection engine
//!
//! Runs every catalog detector over the input text and folds the surviving
//! matches into a [`DetectionResult`]. Detection is a pure function of the
//! text and the catalog: no state is carried between scans, and any text is
//! valid input.

use crate::detection::catalog::{Detector, PatternCatalog};
use crate::detection::models::DetectionResult;
use crate::domain::SiftError;
use anyhow::Result;
use std::sync::Arc;

/// PII detection engine
///
/// Thread-safe; the catalog is immutable after construction, so one engine
/// can be shared across threads with `Arc` and scanned from concurrently.
pub struct DetectionEngine {
    catalog: Arc<PatternCatalog>,
}

impl DetectionEngine {
    /// Create an engine with the built-in default catalog
    pub fn new() -> Result<Self> {
        let catalog = PatternCatalog::builtin()?;
        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// Create an engine with a custom catalog
    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// The catalog this engine scans with
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Scan text and group every detector's matches by category
    ///
    /// For each detector, all non-overlapping matches are collected
    /// leftmost-first; matched substrings that are empty or whitespace-only
    /// after trimming are discarded. Detectors with no surviving matches are
    /// omitted from the result, as are categories with no surviving
    /// detectors.
    ///
    /// A detector whose evaluation hits an engine resource limit is logged
    /// and skipped for this scan; the remaining detectors still report.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let mut result = DetectionResult::new();

        for detector in self.catalog.detectors() {
            match Self::collect_matches(detector, text) {
                Ok(matches) => {
                    result.record(detector.category, detector.name.clone(), matches);
                }
                Err(error) => {
                    tracing::warn!(
                        detector = %detector.name,
                        category = %detector.category,
                        error = %error,
                        "Detector failed to evaluate; skipping it for this scan"
                    );
                }
            }
        }

        result
    }

    /// Collect all non-overlapping matches of one detector
    fn collect_matches(detector: &Detector, text: &str) -> Result<Vec<String>, SiftError> {
        let mut matches = Vec::new();

        for found in detector.regex.find_iter(text) {
            let found = found.map_err(|e| SiftError::PatternEvaluation {
                detector: detector.name.clone(),
                category: detector.category.label().to_string(),
                message: e.to_string(),
            })?;

            if !found.as_str().trim().is_empty() {
                matches.push(found.as_str().to_string());
            }
        }

        Ok(matches)
    }
}
