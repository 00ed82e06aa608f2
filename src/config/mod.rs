//! Configuration management for Sift.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Sift uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `SIFT_*` environment variable overrides
//! - Type-safe configuration structs
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "sift"
//! log_level = "info"
//!
//! [detection]
//! # pattern_library = "patterns/custom_patterns.toml"
//! # sensitivity_table = "patterns/custom_weights.toml"
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! The `[detection]` paths are optional; the embedded default catalog and
//! weight table are used when they are absent.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, DetectionConfig, LoggingConfig, SiftConfig};
