//! End-to-end reporting run: metadata → report → normalize → enrich → submit.

use crate::error::{PipelineError, SubmissionError};
use crate::metadata::{RunMetadata, ValidatedMetadata};
use crate::submitter::ResultSubmitter;
use common::config::ReporterConfig;
use marker::parsers::mochawesome_parser::MochawesomeParser;
use marker::traits::report_parser::ReportParser;
use marker::types::ScoringRecord;
use marker::utilities::file_loader::load_json_file;
use std::path::Path;
use tracing::{error, info};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The enriched record that was (or was attempted to be) uploaded.
    pub record: ScoringRecord,
    /// Whether the endpoint accepted the record.
    pub delivered: bool,
}

/// Drives a single reporting run.
pub struct Pipeline {
    config: ReporterConfig,
    submitter: ResultSubmitter,
}

impl Pipeline {
    pub fn new(config: ReporterConfig) -> Result<Self, SubmissionError> {
        let submitter = ResultSubmitter::new(&config.result_endpoint, config.submit_timeout)?;
        Ok(Self { config, submitter })
    }

    /// Runs every step in order.
    ///
    /// Input errors abort the run before anything is sent. A failed upload is logged and the
    /// run still completes with `delivered == false`.
    pub async fn run(&self, github_link: Option<String>) -> Result<RunOutcome, PipelineError> {
        let metadata = self.load_metadata().await?;
        let record = self.load_report().await?;

        let record = record.with_identity(
            metadata.unique_code.clone(),
            github_link,
            metadata.project_id.clone(),
        );

        info!(
            passed = record.passed,
            failed = record.failed,
            marks = record.marks,
            status = ?record.status,
            "Normalized test report"
        );

        let delivered = match self.submitter.submit(&record, &metadata.secure_hash).await {
            Ok(()) => true,
            Err(e) => {
                error!(endpoint = %self.submitter.endpoint(), "Error posting result: {e}");
                false
            }
        };

        Ok(RunOutcome { record, delivered })
    }

    async fn load_metadata(&self) -> Result<ValidatedMetadata, PipelineError> {
        let path = &self.config.metadata_path;
        let raw = read_json(path).await?;

        let metadata: RunMetadata = serde_json::from_value(raw).map_err(|e| PipelineError::InputParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        metadata
            .into_validated()
            .map_err(|reason| PipelineError::InputParse {
                path: path.clone(),
                reason,
            })
    }

    async fn load_report(&self) -> Result<ScoringRecord, PipelineError> {
        let path = &self.config.report_path;
        let raw = read_json(path).await?;

        MochawesomeParser
            .parse(&raw)
            .map_err(|e| PipelineError::from_marker(path, e))
    }
}

/// Loads a JSON file without blocking the runtime.
async fn read_json(path: &Path) -> Result<serde_json::Value, PipelineError> {
    let owned = path.to_path_buf();
    tokio::task::spawn_blocking(move || load_json_file(&owned))
        .await
        .map_err(|e| PipelineError::InputRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .map_err(|e| PipelineError::from_marker(path, e))
}
