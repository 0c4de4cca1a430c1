//! # Types Module
//!
//! This module defines the data structures shared by the marker crate and its callers:
//!
//! - The **raw report** shape produced by the mochawesome reporter (`results → suites → tests`).
//! - The **scoring record** uploaded to the results API, with its wire field names.
//!
//! ## Wire format
//!
//! A fully enriched [`ScoringRecord`] serializes as:
//!
//! ```json
//! {
//!   "passed": 1,
//!   "failed": 1,
//!   "passedTests": ["X - marks 3"],
//!   "failedTestsWithReasons": [{ "testName": "Y - marks 1", "reason": "timeout", "marks": 1.0 }],
//!   "marks": 3.0,
//!   "errors": [],
//!   "status": "PARTIAL",
//!   "student": { "id": "STU-001" },
//!   "githubLink": "https://github.com/someone/exercise",
//!   "cyProject": { "id": 42 }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level mochawesome report. Only the fields the normalizer reads are modelled;
/// everything else (`stats`, `meta`, hooks, ...) is ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReport {
    pub results: Vec<ReportResult>,
}

/// Results for one Cypress test file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportResult {
    pub suites: Vec<ReportSuite>,
}

/// A `describe` block. Nested suites are not traversed.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSuite {
    pub tests: Vec<ReportTest>,
}

/// A single `it` block.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportTest {
    pub title: String,
    /// `None` when the reporter writes `null` (pending tests) or omits the field.
    #[serde(default)]
    pub state: Option<TestState>,
    #[serde(default)]
    pub err: Option<ReportError>,
}

impl ReportTest {
    /// The failure message, if the reporter recorded a non-empty one.
    pub fn failure_message(&self) -> Option<&str> {
        self.err
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .filter(|m| !m.is_empty())
    }
}

/// Outcome recorded by the test runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestState {
    Passed,
    Failed,
    /// `pending`, `skipped` and anything else the runner may emit.
    #[serde(other)]
    Other,
}

/// Error payload attached to a test. Passing tests usually carry an empty object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Overall grading status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunStatus {
    /// No failed tests.
    Passed,
    /// At least one passed and at least one failed test.
    Partial,
    /// Failed tests and no passed tests.
    Failed,
}

/// A failed test together with the reason the runner gave and the marks it was worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedTest {
    pub test_name: String,
    pub reason: String,
    pub marks: f64,
}

/// Identifier of the exercise project. The metadata file may carry it as any JSON number
/// (integer of any size or float) or a string, and it is sent back in whichever form it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectId>,
}

/// Normalized summary of a test run, as uploaded to the results API.
///
/// Produced by the normalizer with the identity fields (`student`, `github_link`, `cy_project`)
/// unset; [`ScoringRecord::with_identity`] attaches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRecord {
    pub passed: usize,
    pub failed: usize,
    pub passed_tests: Vec<String>,
    pub failed_tests_with_reasons: Vec<FailedTest>,
    /// Sum of marks over passed tests only.
    pub marks: f64,
    /// Reserved by the results API; always empty.
    #[serde(default)]
    pub errors: Vec<String>,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cy_project: Option<ProjectRef>,
}

impl ScoringRecord {
    /// Attaches the student, repository link and project the run belongs to.
    pub fn with_identity(
        mut self,
        student_id: impl Into<String>,
        github_link: Option<String>,
        project_id: Option<ProjectId>,
    ) -> Self {
        self.student = Some(StudentRef {
            id: student_id.into(),
        });
        self.github_link = github_link;
        self.cy_project = Some(ProjectRef { id: project_id });
        self
    }
}
