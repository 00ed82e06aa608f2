//! Scan reporting
//!
//! This module renders a detection result and its risk score into the
//! human-facing report: summary statistics, per-category and per-detector
//! match counts, and the matched substrings themselves.

use crate::detection::{DetectionResult, PiiCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum matched substrings echoed per detector in console output
const MAX_SAMPLES_PER_DETECTOR: usize = 5;

/// Report for one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Timestamp of the scan
    pub timestamp: DateTime<Utc>,

    /// Number of characters scanned
    pub scanned_chars: usize,

    /// Scan duration in milliseconds
    pub elapsed_ms: u64,

    /// Aggregate risk score
    pub risk_score: u64,

    /// Total matched substrings across all detectors
    pub total_matches: usize,

    /// Match counts by category
    pub matches_by_category: BTreeMap<PiiCategory, usize>,

    /// Match counts by "Category - Detector" label
    pub matches_by_detector: BTreeMap<String, usize>,

    /// Full categorized match structure
    pub detections: DetectionResult,
}

impl ScanReport {
    /// Build a report from a scan's outputs
    pub fn new(
        detections: DetectionResult,
        risk_score: u64,
        scanned_chars: usize,
        elapsed_ms: u64,
    ) -> Self {
        let mut matches_by_category = BTreeMap::new();
        let mut matches_by_detector = BTreeMap::new();

        for (category, detectors) in detections.iter() {
            let category_total: usize = detectors.values().map(|m| m.len()).sum();
            matches_by_category.insert(*category, category_total);

            for (name, matches) in detectors {
                matches_by_detector.insert(format!("{category} - {name}"), matches.len());
            }
        }

        Self {
            timestamp: Utc::now(),
            scanned_chars,
            elapsed_ms,
            risk_score,
            total_matches: detections.total_matches(),
            matches_by_category,
            matches_by_detector,
            detections,
        }
    }

    /// Check if the scan found anything
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                      PII SCAN REPORT                          \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Characters Scanned:   {}\n", self.scanned_chars));
        output.push_str(&format!("  Total Matches:        {}\n", self.total_matches));
        output.push_str(&format!(
            "  Categories Affected:  {}\n",
            self.matches_by_category.len()
        ));
        output.push_str(&format!("  Risk Score:           {}\n", self.risk_score));
        output.push_str(&format!("  Scan Time:            {} ms\n", self.elapsed_ms));
        output.push('\n');

        if !self.matches_by_category.is_empty() {
            output.push_str("🔍 MATCHES BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.matches_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1)); // Sort by count descending

            for (category, count) in categories {
                output.push_str(&format!("  {:30} {:>5}\n", category.label(), count));
            }
            output.push('\n');
        }

        if self.has_detections() {
            output.push_str("📝 DETECTED PII\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for (category, detectors) in self.detections.iter() {
                output.push_str(&format!("\n  {}\n", category.label()));
                for (name, matches) in detectors {
                    output.push_str(&format!("    {} ({} match(es))\n", name, matches.len()));
                    for matched in matches.iter().take(MAX_SAMPLES_PER_DETECTOR) {
                        output.push_str(&format!("      • \"{matched}\"\n"));
                    }
                    if matches.len() > MAX_SAMPLES_PER_DETECTOR {
                        output.push_str(&format!(
                            "      … {} more\n",
                            matches.len() - MAX_SAMPLES_PER_DETECTOR
                        ));
                    }
                }
            }
            output.push('\n');
        } else {
            output.push_str("✅ No PII detected\n");
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}
