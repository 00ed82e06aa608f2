//! Domain error types
//!
//! This module defines the error hierarchy for Sift. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Sift error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern catalog errors (invalid pattern, unknown category)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A single detector failed to evaluate against a request's text.
    ///
    /// Raised when the regex engine hits a resource limit while matching
    /// (e.g. the backtrack limit). The failing detector is skipped for the
    /// request; the rest of the catalog still reports.
    #[error("Pattern evaluation failed for detector '{detector}' ({category}): {message}")]
    PatternEvaluation {
        /// Detector name from the catalog
        detector: String,
        /// Display label of the detector's category
        category: String,
        /// Underlying engine error
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SiftError {
    fn from(err: std::io::Error) -> Self {
        SiftError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        SiftError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SiftError {
    fn from(err: toml::de::Error) -> Self {
        SiftError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sift_error_display() {
        let err = SiftError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_pattern_evaluation_error_display() {
        let err = SiftError::PatternEvaluation {
            detector: "Credit Card Number".to_string(),
            category: "Financial Information".to_string(),
            message: "backtrack limit exceeded".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Credit Card Number"));
        assert!(rendered.contains("Financial Information"));
        assert!(rendered.contains("backtrack limit exceeded"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sift_err: SiftError = io_err.into();
        assert!(matches!(sift_err, SiftError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let sift_err: SiftError = json_err.into();
        assert!(matches!(sift_err, SiftError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let sift_err: SiftError = toml_err.into();
        assert!(matches!(sift_err, SiftError::Configuration(_)));
        assert!(sift_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_sift_error_implements_std_error() {
        let err = SiftError::Catalog("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
