//! # Marker Library
//!
//! This crate turns end-to-end test reports into scoring records for the sandbox results API.
//!
//! ## Key Concepts
//! - **Marks**: the point value embedded in a test title (`"Loads homepage - marks 2"`), see [`marks`].
//! - **Normalization**: flattening a mochawesome report into a [`ScoringRecord`](types::ScoringRecord),
//!   see [`parsers::mochawesome_parser`].
//! - **Status**: `PASSED`, `PARTIAL` or `FAILED`, derived in [`scorer`].
//!
//! ## Example
//!
//! ```
//! use marker::parsers::mochawesome_parser::MochawesomeParser;
//! use marker::traits::report_parser::ReportParser;
//! use marker::types::RunStatus;
//!
//! let raw = serde_json::json!({
//!     "results": [{ "suites": [{ "tests": [
//!         { "title": "Loads homepage - marks 2", "state": "passed", "err": {} }
//!     ]}]}]
//! });
//!
//! let record = MochawesomeParser.parse(&raw).unwrap();
//! assert_eq!(record.marks, 2.0);
//! assert_eq!(record.status, RunStatus::Passed);
//! ```

pub mod error;
pub mod marks;
pub mod parsers;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;
