// Sift - PII Detection and Risk Scoring
// Copyright (c) 2025 Sift Contributors
// Licensed under the MIT License

//! # Sift - PII Detection and Risk Scoring
//!
//! Sift scans free-form text, flags substrings that match known patterns of
//! personally identifiable information (PII), groups matches by category,
//! and derives a single aggregate risk score.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** PII with a static catalog of categorized regex detectors
//! - **Scoring** detection results against a per-detector sensitivity table
//! - **Reporting** categorized matches and the aggregate score
//!
//! ## Architecture
//!
//! Sift follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Pattern catalog and detection engine
//! - [`scoring`] - Sensitivity table and risk scorer
//! - [`report`] - Scan report rendering
//! - [`domain`] - Error types and shared result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use sift::detection::DetectionEngine;
//! use sift::scoring::RiskScorer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = DetectionEngine::new()?;
//!     let scorer = RiskScorer::new()?;
//!
//!     let result = engine.detect("My SSN is 123-45-6789");
//!     let risk = scorer.score(&result);
//!
//!     assert!(risk >= 10);
//!     Ok(())
//! }
//! ```
//!
//! ## Detection Semantics
//!
//! For every catalog detector, `detect` collects all non-overlapping
//! matches leftmost-first, discards whitespace-only matches, and groups the
//! survivors by category and detector name. Detectors deliberately overlap
//! (a 13-16 digit run is both a credit card and a bank account candidate);
//! every detector reports independently and every instance is scored.
//!
//! Detection and scoring are pure, synchronous computations over immutable
//! configuration, so one engine can serve concurrent callers without
//! locking.
//!
//! ## Error Handling
//!
//! Configuration faults (an invalid pattern, a malformed weight table) fail
//! at startup. `detect` and `score` are total over any input text; if the
//! regex engine hits a resource limit on one detector, that detector is
//! skipped for the request and logged, and the rest of the catalog still
//! reports.
//!
//! ## Logging
//!
//! Sift uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting scan");
//! warn!(detector = "Credit Card Number", "Detector skipped");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod logging;
pub mod report;
pub mod scoring;
