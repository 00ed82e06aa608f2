//! PII detection
//!
//! The detection pipeline has two halves:
//! - **Catalog**: the static table of named regex detectors grouped into
//!   categories, loaded once at startup and immutable afterwards.
//! - **Engine**: applies every detector to the input text and groups the
//!   surviving matches by category, then by detector name.
//!
//! # Usage
//!
//! ```rust
//! use sift::detection::DetectionEngine;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = DetectionEngine::new()?;
//! let result = engine.detect("Reach me at jane.doe@example.com");
//! assert!(!result.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod engine;
pub mod models;

// Re-export main types
pub use catalog::{Detector, PatternCatalog};
pub use engine::DetectionEngine;
pub use models::{DetectionResult, PiiCategory};
