//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use sift::logging::init_logging;
//! use sift::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Scan started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
