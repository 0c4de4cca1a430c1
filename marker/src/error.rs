//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum, which covers everything that can go wrong while
//! loading and decoding a test report in the marker crate.
//!
//! Normalizing an already-decoded report never fails; errors only come from the file system or from
//! JSON that does not match the expected report shape.
//!
//! # Example
//!
//! ```rust
//! use marker::error::MarkerError;
//!
//! fn require_title(title: Option<&str>) -> Result<&str, MarkerError> {
//!     title.ok_or_else(|| MarkerError::MissingField("title".to_string()))
//! }
//!
//! assert!(require_title(None).is_err());
//! ```

/// Represents all error types that can occur in the marker crate.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    /// I/O error (file not found, unreadable, too large).
    #[error("I/O error: {0}")]
    IoError(String),
    /// JSON is malformed or does not match the expected schema.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// A required field is missing from input.
    #[error("missing field: {0}")]
    MissingField(String),
}
