//! Configuration schema
//!
//! Type-safe configuration structs with serde defaults and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiftConfig {
    /// Application settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SiftConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.detection.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_app_name() -> String {
    "sift".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    /// Validates application settings
    pub fn validate(&self) -> Result<(), String> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "Invalid log_level '{other}' (expected trace, debug, info, warn or error)"
            )),
        }
    }
}

/// Detection settings
///
/// Both paths are optional; when absent the embedded default resources are
/// used. Files must exist and be TOML at validation time so a broken
/// catalog refuses to start rather than silently skipping detectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Path to a pattern catalog TOML file
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Path to a sensitivity weight table TOML file
    #[serde(default)]
    pub sensitivity_table: Option<PathBuf>,
}

impl DetectionConfig {
    /// Validates detection settings
    pub fn validate(&self) -> Result<(), String> {
        for (label, path) in [
            ("pattern_library", &self.pattern_library),
            ("sensitivity_table", &self.sensitivity_table),
        ] {
            if let Some(path) = path {
                if !path.exists() {
                    return Err(format!("{label} file not found: {}", path.display()));
                }
                if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                    return Err(format!("{label} must be a TOML file: {}", path.display()));
                }
            }
        }
        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validates logging settings
    pub fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "Invalid local_rotation '{other}' (expected daily or hourly)"
            )),
        }
    }
}
