use clap::Parser;
use common::config::{LogConfig, ReporterConfig};
use common::logger::init_logging;
use reporter::pipeline::Pipeline;
use std::path::PathBuf;
use std::process::ExitCode;

/// Upload a Cypress mochawesome report as a sandbox scoring record.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Repository link embedded in the record as `githubLink`
    github_link: Option<String>,
    /// Run metadata file (overrides METADATA_PATH)
    #[arg(long)]
    metadata: Option<PathBuf>,
    /// Mochawesome report file (overrides REPORT_PATH)
    #[arg(long)]
    report: Option<PathBuf>,
    /// Results API endpoint (overrides RESULT_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,
}

impl Args {
    /// Applies the command-line overrides on top of the environment configuration.
    fn apply_overrides(&mut self, config: &mut ReporterConfig) {
        if let Some(path) = self.metadata.take() {
            config.metadata_path = path;
        }
        if let Some(path) = self.report.take() {
            config.report_path = path;
        }
        if let Some(endpoint) = self.endpoint.take() {
            config.result_endpoint = endpoint;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = Args::parse();

    let _log_guard = init_logging(&LogConfig::from_env());

    let mut config = ReporterConfig::from_env();
    args.apply_overrides(&mut config);

    let pipeline = match Pipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match pipeline.run(args.github_link).await {
        Ok(outcome) => {
            if !outcome.delivered {
                tracing::warn!("Run finished but the result was not accepted by the backend");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Reporting run aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_config() -> ReporterConfig {
        ReporterConfig::from_lookup(|_| None)
    }

    #[test]
    fn test_positional_github_link() {
        let args = Args::try_parse_from(["reporter", "https://github.com/someone/exercise"]).unwrap();
        assert_eq!(
            args.github_link.as_deref(),
            Some("https://github.com/someone/exercise")
        );
        assert!(args.metadata.is_none());
        assert!(args.report.is_none());
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn test_no_arguments_keeps_env_config() {
        let mut args = Args::try_parse_from(["reporter"]).unwrap();
        assert!(args.github_link.is_none());

        let mut config = env_config();
        args.apply_overrides(&mut config);
        assert_eq!(config, env_config());
    }

    #[test]
    fn test_flags_override_env_config() {
        let mut args = Args::try_parse_from([
            "reporter",
            "--metadata",
            "ci/metadata.json",
            "--report",
            "ci/mochawesome.json",
            "--endpoint",
            "http://localhost:4000/api/sandbox/result",
            "https://github.com/someone/exercise",
        ])
        .unwrap();

        let mut config = env_config();
        args.apply_overrides(&mut config);

        assert_eq!(config.metadata_path, PathBuf::from("ci/metadata.json"));
        assert_eq!(config.report_path, PathBuf::from("ci/mochawesome.json"));
        assert_eq!(
            config.result_endpoint,
            "http://localhost:4000/api/sandbox/result"
        );
        assert_eq!(config.submit_timeout, None);
        assert_eq!(
            args.github_link.as_deref(),
            Some("https://github.com/someone/exercise")
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["reporter", "--retries", "3"]).is_err());
    }
}
