//! Mochawesome Report Parser
//!
//! This module converts the JSON report written by Cypress' mochawesome reporter into a
//! [`ScoringRecord`].
//!
//! # JSON Schema
//!
//! Only the following part of the report is read; all other fields are ignored:
//!
//! ```json
//! {
//!   "results": [
//!     {
//!       "suites": [
//!         {
//!           "tests": [
//!             { "title": "<string>", "state": "passed" | "failed" | ..., "err": { "message": "<string>" } }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! - Only the first level of `suites` under each result is visited.
//! - Tests whose state is neither `passed` nor `failed` (pending, skipped, `null`) are not counted.
//!
//! # Error Handling
//!
//! Decoding failures are reported as [`MarkerError::MissingField`] or [`MarkerError::InvalidJson`].
//! [`normalize`] itself cannot fail.

use crate::error::MarkerError;
use crate::marks::extract_marks;
use crate::scorer::{derive_status, total_marks};
use crate::traits::report_parser::ReportParser;
use crate::types::{FailedTest, RawReport, ScoringRecord, TestState};
use serde_json::Value;
use tracing::debug;

/// Reason recorded for a failed test that carries no error message.
pub const UNKNOWN_REASON: &str = "Unknown reason";

/// Parser for mochawesome JSON reports.
///
/// Implements [`ReportParser<ScoringRecord>`]: decodes the raw value into a [`RawReport`]
/// and normalizes it.
pub struct MochawesomeParser;

impl ReportParser<ScoringRecord> for MochawesomeParser {
    fn parse(&self, raw: &Value) -> Result<ScoringRecord, MarkerError> {
        let obj = raw.as_object().ok_or_else(|| {
            MarkerError::InvalidJson("Top-level report JSON must be an object".to_string())
        })?;

        if !obj.contains_key("results") {
            return Err(MarkerError::MissingField("results".to_string()));
        }

        let report: RawReport = serde_json::from_value(raw.clone())
            .map_err(|e| MarkerError::InvalidJson(format!("Report does not match mochawesome schema: {e}")))?;

        Ok(normalize(&report))
    }
}

/// Builds a [`ScoringRecord`] from a decoded report.
///
/// The identity fields of the returned record are left unset.
pub fn normalize(report: &RawReport) -> ScoringRecord {
    let mut passed_tests = Vec::new();
    let mut passed_marks = Vec::new();
    let mut failed_tests_with_reasons = Vec::new();

    let tests = report
        .results
        .iter()
        .flat_map(|result| result.suites.iter())
        .flat_map(|suite| suite.tests.iter());

    for test in tests {
        let marks = extract_marks(&test.title);

        match test.state {
            Some(TestState::Passed) => {
                passed_marks.push(marks);
                passed_tests.push(test.title.clone());
            }
            Some(TestState::Failed) => {
                failed_tests_with_reasons.push(FailedTest {
                    test_name: test.title.clone(),
                    reason: test.failure_message().unwrap_or(UNKNOWN_REASON).to_string(),
                    marks,
                });
            }
            _ => debug!(title = %test.title, "Skipping test that neither passed nor failed"),
        }
    }

    let passed = passed_tests.len();
    let failed = failed_tests_with_reasons.len();

    ScoringRecord {
        passed,
        failed,
        passed_tests,
        failed_tests_with_reasons,
        marks: total_marks(passed_marks),
        errors: Vec::new(),
        status: derive_status(passed, failed),
        student: None,
        github_link: None,
        cy_project: None,
    }
}
