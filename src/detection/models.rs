//! Detection data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// PII category enumeration
///
/// Categories are fixed, enumerable labels; the catalog assigns every
/// detector to exactly one of them. Declaration order drives the iteration
/// order of result maps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PiiCategory {
    /// Payment cards, bank accounts, routing identifiers
    #[serde(rename = "Financial Information")]
    Financial,
    /// Medical record and treatment references
    #[serde(rename = "Medical Information")]
    Medical,
    /// Names, contact details, dates tied to a person
    #[serde(rename = "Personal Information")]
    Personal,
    /// Government-issued identifiers
    #[serde(rename = "Identification Information")]
    Identification,
}

impl PiiCategory {
    /// Get the human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Financial => "Financial Information",
            Self::Medical => "Medical Information",
            Self::Personal => "Personal Information",
            Self::Identification => "Identification Information",
        }
    }

    /// All categories in catalog order
    pub fn all() -> &'static [PiiCategory] {
        &[
            Self::Financial,
            Self::Medical,
            Self::Personal,
            Self::Identification,
        ]
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorized match output of one scan
///
/// Maps category to detector name to the ordered sequence of matched
/// substrings (first occurrence in the text first, duplicates preserved).
///
/// # Invariant
///
/// The result never contains a category with an empty detector map, nor a
/// detector with an empty match sequence. Absence means "not detected",
/// not "detected zero"; [`DetectionResult::record`] silently drops empty
/// match sets to uphold this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionResult {
    detections: BTreeMap<PiiCategory, BTreeMap<String, Vec<String>>>,
}

impl DetectionResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the match set of one detector
    ///
    /// Empty match sets are dropped so the omission invariant holds.
    pub fn record(&mut self, category: PiiCategory, detector: impl Into<String>, matches: Vec<String>) {
        if matches.is_empty() {
            return;
        }
        self.detections
            .entry(category)
            .or_default()
            .insert(detector.into(), matches);
    }

    /// Check whether any detector matched
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// Iterate categories with their detector maps
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&PiiCategory, &BTreeMap<String, Vec<String>>)> {
        self.detections.iter()
    }

    /// Matches recorded for one detector, if any
    pub fn matches(&self, category: PiiCategory, detector: &str) -> Option<&[String]> {
        self.detections
            .get(&category)
            .and_then(|d| d.get(detector))
            .map(|v| v.as_slice())
    }

    /// Detector map for one category, if any detector in it matched
    pub fn category(&self, category: PiiCategory) -> Option<&BTreeMap<String, Vec<String>>> {
        self.detections.get(&category)
    }

    /// Number of categories with at least one match
    pub fn category_count(&self) -> usize {
        self.detections.len()
    }

    /// Number of detectors with at least one match
    pub fn detector_count(&self) -> usize {
        self.detections.values().map(|d| d.len()).sum()
    }

    /// Total number of matched substrings across all detectors
    pub fn total_matches(&self) -> usize {
        self.detections
            .values()
            .flat_map(|d| d.values())
            .map(|m| m.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(PiiCategory::Financial.label(), "Financial Information");
        assert_eq!(PiiCategory::Medical.label(), "Medical Information");
        assert_eq!(PiiCategory::Personal.label(), "Personal Information");
        assert_eq!(
            PiiCategory::Identification.label(),
            "Identification Information"
        );
    }

    #[test]
    fn test_category_ordering_follows_declaration() {
        let all = PiiCategory::all();
        let mut sorted = all.to_vec();
        sorted.sort();
        assert_eq!(all, sorted.as_slice());
    }

    #[test]
    fn test_record_drops_empty_match_set() {
        let mut result = DetectionResult::new();
        result.record(PiiCategory::Personal, "Email", vec![]);
        assert!(result.is_empty());
        assert_eq!(result.category_count(), 0);
    }

    #[test]
    fn test_record_and_lookup() {
        let mut result = DetectionResult::new();
        result.record(
            PiiCategory::Personal,
            "Email",
            vec!["a@example.com".to_string(), "b@example.com".to_string()],
        );

        assert_eq!(result.category_count(), 1);
        assert_eq!(result.detector_count(), 1);
        assert_eq!(result.total_matches(), 2);
        assert_eq!(
            result.matches(PiiCategory::Personal, "Email"),
            Some(&["a@example.com".to_string(), "b@example.com".to_string()][..])
        );
        assert!(result.matches(PiiCategory::Financial, "IBAN").is_none());
    }

    #[test]
    fn test_serialization_uses_display_labels() {
        let mut result = DetectionResult::new();
        result.record(
            PiiCategory::Identification,
            "Social Security Number",
            vec!["123-45-6789".to_string()],
        );

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("Identification Information").is_some());
        assert_eq!(
            json["Identification Information"]["Social Security Number"][0],
            "123-45-6789"
        );
    }

    #[test]
    fn test_empty_result_serializes_to_empty_object() {
        let result = DetectionResult::new();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, "{}");
    }
}
