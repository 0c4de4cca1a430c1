//! Process configuration loaded from `.env` and environment variables.
//!
//! Each binary builds the structs it needs exactly once at startup and hands
//! them to the components that use them. Nothing here is global.
//!
//! Every struct has a `from_lookup` constructor that takes an arbitrary key
//! lookup so tests can resolve configuration without mutating process env.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default port for the placeholder server.
pub const DEFAULT_PORT: u16 = 8091;

/// Default upload target for scoring records.
pub const DEFAULT_RESULT_ENDPOINT: &str = "https://practiceapi.rnwmultimedia.com/api/sandbox/result";

/// Default location of the run metadata file.
pub const DEFAULT_METADATA_PATH: &str = "metadata.json";

/// Default location of the mochawesome report written by Cypress.
pub const DEFAULT_REPORT_PATH: &str = "cypress/results/mochawesome.json";

fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Logging settings shared by both binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `reporter=debug,marker=info`.
    pub log_level: String,
    /// Directory the rolling log file is written to.
    pub log_dir: PathBuf,
    /// File name prefix for the daily rolling log. `None` logs to stdout only.
    pub log_file: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_file: lookup("LOG_FILE").filter(|f| !f.trim().is_empty()),
        }
    }
}

/// Bind address of the placeholder server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Inputs and upload target for one reporter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    pub metadata_path: PathBuf,
    pub report_path: PathBuf,
    pub result_endpoint: String,
    /// Whole-request timeout for the upload. `None` waits indefinitely.
    pub submit_timeout: Option<Duration>,
}

impl ReporterConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            metadata_path: lookup("METADATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_PATH)),
            report_path: lookup("REPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            result_endpoint: lookup("RESULT_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_RESULT_ENDPOINT.into()),
            submit_timeout: lookup("SUBMIT_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}
