//! # Utilities
//!
//! Helpers shared by the marker crate and its callers.
//!
//! - [`file_loader`]: Loads and size-checks the JSON input files of a reporting run.

pub mod file_loader;
