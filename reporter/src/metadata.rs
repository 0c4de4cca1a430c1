//! Per-run identity and credentials, read from `metadata.json`.

use common::format_validation_errors;
use marker::types::ProjectId;
use serde::Deserialize;
use validator::Validate;

/// Contents of the run metadata file.
///
/// `uniqueCode` identifies the student and `secureHash` is the bearer token for the upload;
/// both must be present and non-empty. `pId` is optional and passed through as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RunMetadata {
    #[serde(rename = "uniqueCode", default)]
    #[validate(
        required(message = "Missing required field: 'uniqueCode'"),
        length(min = 1, message = "Missing required field: 'uniqueCode'")
    )]
    pub unique_code: Option<String>,

    #[serde(rename = "secureHash", default)]
    #[validate(
        required(message = "Missing required field: 'secureHash'"),
        length(min = 1, message = "Missing required field: 'secureHash'")
    )]
    pub secure_hash: Option<String>,

    #[serde(rename = "pId", default)]
    pub project_id: Option<ProjectId>,
}

/// Metadata that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMetadata {
    pub unique_code: String,
    pub secure_hash: String,
    pub project_id: Option<ProjectId>,
}

impl RunMetadata {
    /// Checks the required fields and unwraps them.
    ///
    /// The error string lists every missing field, separated by `"; "`.
    pub fn into_validated(self) -> Result<ValidatedMetadata, String> {
        self.validate()
            .map_err(|errors| format_validation_errors(&errors))?;

        match (self.unique_code, self.secure_hash) {
            (Some(unique_code), Some(secure_hash)) => Ok(ValidatedMetadata {
                unique_code,
                secure_hash,
                project_id: self.project_id,
            }),
            _ => Err("Missing required fields: 'uniqueCode' or 'secureHash'".to_string()),
        }
    }
}
