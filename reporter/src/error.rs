//! Errors raised by a reporting run.
//!
//! [`PipelineError`] is fatal: the run stops and nothing is uploaded.
//! [`SubmissionError`] is logged by the pipeline and never propagated out of a run.

use marker::error::MarkerError;
use std::path::PathBuf;

/// Fatal input errors. Raised before any network call is made.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Metadata or report file missing or unreadable.
    #[error("failed to read {}: {reason}", path.display())]
    InputRead { path: PathBuf, reason: String },

    /// Content is not valid JSON, does not match the expected shape, or lacks required fields.
    #[error("failed to parse {}: {reason}", path.display())]
    InputParse { path: PathBuf, reason: String },
}

impl PipelineError {
    /// Classifies a [`MarkerError`] raised while loading or decoding `path`.
    pub fn from_marker(path: &std::path::Path, err: MarkerError) -> Self {
        match err {
            MarkerError::IoError(reason) => PipelineError::InputRead {
                path: path.to_path_buf(),
                reason,
            },
            MarkerError::InvalidJson(reason) => PipelineError::InputParse {
                path: path.to_path_buf(),
                reason,
            },
            MarkerError::MissingField(field) => PipelineError::InputParse {
                path: path.to_path_buf(),
                reason: format!("missing required field '{field}'"),
            },
        }
    }
}

/// Failure to deliver a scoring record.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-2xx status.
    #[error("Failed to post result: {status} {reason}")]
    Rejected { status: u16, reason: String },

    /// DNS, connection or timeout failure.
    #[error("Failed to post result: {0}")]
    Transport(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
