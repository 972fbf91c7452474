//! CLI error type.

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tourguide::{CommandError, ConfigError};

/// Errors that end a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid settings or configuration key.
    #[error("{0}")]
    Config(String),

    /// The configuration file could not be read or written.
    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    /// The session script could not be read.
    #[error("failed to read script {}: {}", .path.display(), .source)]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session script is malformed.
    #[error("invalid script: {0}")]
    Script(#[from] CommandError),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Output could not be encoded as JSON.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Config(_) | CliError::ConfigFile(_) => ExitCode::from(3),
            CliError::ReadScript { .. } | CliError::Script(_) => ExitCode::from(2),
            CliError::Output(_) | CliError::Encode(_) => ExitCode::FAILURE,
        }
    }
}
