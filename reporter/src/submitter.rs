//! One-shot upload of a scoring record to the results API.

use crate::error::SubmissionError;
use marker::types::ScoringRecord;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Posts scoring records to a fixed endpoint.
///
/// Each call to [`ResultSubmitter::submit`] makes exactly one request. There is no retry and no
/// idempotency key, so submitting the same record twice creates two remote records.
#[derive(Debug, Clone)]
pub struct ResultSubmitter {
    client: Client,
    endpoint: String,
}

impl ResultSubmitter {
    /// Builds a submitter for `endpoint`. `timeout` caps the whole request; `None` waits indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SubmissionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SubmissionError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `record` as JSON with `Authorization: Bearer <token>`.
    ///
    /// Succeeds on any 2xx status.
    pub async fn submit(&self, record: &ScoringRecord, token: &str) -> Result<(), SubmissionError> {
        debug!(endpoint = %self.endpoint, ?record, "Posting scoring record");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(record)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        info!("Result successfully posted to the backend.");
        Ok(())
    }
}
