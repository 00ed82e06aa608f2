//! Domain types for Sift.
//!
//! This module contains the error hierarchy and shared result alias used
//! across the crate.
//!
//! # Error Handling
//!
//! All fallible domain operations return [`Result<T, SiftError>`]:
//!
//! ```rust
//! use sift::domain::{Result, SiftError};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let parsed: serde_json::Value = serde_json::from_str("{}")?;
//!     let _ = parsed;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::SiftError;
pub use result::Result;
