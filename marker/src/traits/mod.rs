//!
//! Traits Module
//!
//! This module contains the core traits used by the marker crate for extensibility and abstraction.
//!
//! - [`report_parser`]: Defines the generic trait for turning raw report JSON into Rust types.

pub mod report_parser;
