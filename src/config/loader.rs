//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SiftConfig;
use crate::domain::errors::SiftError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SiftConfig
/// 4. Applies environment variable overrides (SIFT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sift::config::loader::load_config;
///
/// let config = load_config("sift.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SiftConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SiftError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SiftError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SiftConfig = toml::from_str(&contents)
        .map_err(|e| SiftError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        SiftError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// The `scan` command works out of the box without a config file; an
/// existing file that fails to parse or validate is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<SiftConfig> {
    let path = path.as_ref();

    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = SiftConfig::default();
        apply_env_overrides(&mut config);
        config.validate().map_err(|e| {
            SiftError::Configuration(format!("Configuration validation failed: {e}"))
        })?;
        Ok(config)
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
        SiftError::Configuration(format!("Invalid substitution pattern: {e}"))
    })?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SiftError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SIFT_* prefix
///
/// Environment variables follow the pattern: SIFT_<SECTION>_<KEY>
/// For example: SIFT_APPLICATION_LOG_LEVEL, SIFT_DETECTION_PATTERN_LIBRARY
fn apply_env_overrides(config: &mut SiftConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("SIFT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Detection overrides
    if let Ok(val) = std::env::var("SIFT_DETECTION_PATTERN_LIBRARY") {
        config.detection.pattern_library = Some(val.into());
    }
    if let Ok(val) = std::env::var("SIFT_DETECTION_SENSITIVITY_TABLE") {
        config.detection.sensitivity_table = Some(val.into());
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SIFT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SIFT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SIFT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SIFT_TEST_SUBST_VAR", "test_value");
        let input = "name = \"${SIFT_TEST_SUBST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "name = \"test_value\"\n");
        std::env::remove_var("SIFT_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SIFT_TEST_MISSING_VAR");
        let input = "name = \"${SIFT_TEST_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("SIFT_TEST_COMMENTED_VAR");
        let input = "# name = \"${SIFT_TEST_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent.toml").unwrap();
        assert_eq!(config.application.name, "sift");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
name = "sift"
log_level = "debug"

[logging]
local_enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.name, "sift");
        assert_eq!(config.application.log_level, "debug");
    }

    #[test]
    fn test_load_config_invalid_log_level() {
        let toml_content = r#"
[application]
log_level = "shout"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
