//! Result type alias for Sift
//!
//! This module provides a convenient Result type alias that uses SiftError
//! as the error type.

use super::errors::SiftError;

/// Result type alias for Sift operations
///
/// This is a convenience type alias that uses `SiftError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use sift::domain::result::Result;
/// use sift::domain::errors::SiftError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SiftError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SiftError>;
