//! # Parsers
//!
//! This module is responsible for turning third-party test-runner reports into scoring records.
//! Each sub-module handles one report format and implements the [`ReportParser`] trait.
//!
//! The available parsers are:
//! - [`mochawesome_parser`]: For the JSON report written by Cypress' mochawesome reporter.
//!
//! [`ReportParser`]: crate::traits::report_parser::ReportParser

pub mod mochawesome_parser;
