//! # Reporter
//!
//! CI-side half of the sandbox grading flow. After Cypress has written its mochawesome report,
//! the reporter reads the run metadata and the report, converts the report into a
//! [`ScoringRecord`](marker::types::ScoringRecord), stamps it with the student's identity and
//! uploads it to the results API.
//!
//! - [`pipeline`]: the ordered run ([`Pipeline::run`](pipeline::Pipeline::run)).
//! - [`submitter`]: the single HTTP POST.
//! - [`metadata`]: the `metadata.json` shape and its validation.

pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod submitter;
