//!
//! File Loader Utility
//!
//! This module loads the JSON input files of a reporting run (run metadata, test report) from disk.
//! It checks that each file exists, is a regular file and is not unreasonably large before parsing it.
//!
//! # Error Handling
//!
//! Returns [`MarkerError::IoError`] for missing, unreadable or oversized files and
//! [`MarkerError::InvalidJson`] for content that is not valid JSON. The full cause is logged;
//! the returned message stays short and names the file.

use crate::error::MarkerError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::error;

/// Maximum allowed size for JSON input files.
pub const MAX_JSON_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Checks that a file exists, is a file, and (optionally) does not exceed a maximum size.
///
/// # Errors
///
/// Returns [`MarkerError::IoError`] if the file is missing, not a file, unreadable, or too large.
fn check_file(path: &Path, max_size: Option<u64>) -> Result<(), MarkerError> {
    if !path.exists() {
        error!("File not found: {}", path.display());
        return Err(MarkerError::IoError(format!(
            "File not found: {}",
            path.display()
        )));
    }

    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return Err(MarkerError::IoError(format!(
            "Not a file: {}",
            path.display()
        )));
    }

    let metadata = fs::metadata(path).map_err(|e| {
        error!("File unreadable: {} - {}", path.display(), e);
        MarkerError::IoError(format!("File unreadable: {}", path.display()))
    })?;

    if let Some(max) = max_size {
        if metadata.len() > max {
            error!(
                "File too large: {} ({} bytes, max {} bytes)",
                path.display(),
                metadata.len(),
                max
            );
            return Err(MarkerError::IoError(format!(
                "File too large: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Reads `path` and parses it as JSON.
///
/// # Errors
///
/// Returns [`MarkerError::IoError`] when the file cannot be read and
/// [`MarkerError::InvalidJson`] when its content is not JSON.
pub fn load_json_file(path: &Path) -> Result<Value, MarkerError> {
    check_file(path, Some(MAX_JSON_SIZE))?;

    let bytes = fs::read(path).map_err(|e| {
        error!("Failed to read {}: {}", path.display(), e);
        MarkerError::IoError(format!("Failed to read {}: {e}", path.display()))
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        error!("Invalid JSON in {}: {}", path.display(), e);
        MarkerError::InvalidJson(format!("Invalid JSON in {}: {e}", path.display()))
    })
}
