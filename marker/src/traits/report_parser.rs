//! Report Parser Trait
//!
//! This module defines the [`ReportParser`] trait, which provides a generic interface for turning raw
//! report JSON into strongly-typed Rust structures.
//! Implementations are responsible for validating the input JSON against the report schema they
//! understand and returning detailed errors on failure.
//!
//! # Example
//!
//! ```rust
//! use serde_json::Value;
//! use marker::error::MarkerError;
//! use marker::traits::report_parser::ReportParser;
//!
//! struct TitleCounter;
//!
//! impl ReportParser<usize> for TitleCounter {
//!     fn parse(&self, raw: &Value) -> Result<usize, MarkerError> {
//!         raw.as_array()
//!             .map(|items| items.len())
//!             .ok_or_else(|| MarkerError::InvalidJson("expected an array".to_string()))
//!     }
//! }
//!
//! assert_eq!(TitleCounter.parse(&serde_json::json!(["a", "b"])).unwrap(), 2);
//! ```

use crate::error::MarkerError;
use serde_json::Value;

/// A trait for parsing JSON report data into a strongly-typed Rust structure.
///
/// # Type Parameters
///
/// * `T` - The output type produced by the parser.
pub trait ReportParser<T> {
    /// Parse a JSON value into the target type.
    ///
    /// # Errors
    ///
    /// Returns a [`MarkerError`] if the input does not conform to the expected schema.
    fn parse(&self, raw: &Value) -> Result<T, MarkerError>;
}
