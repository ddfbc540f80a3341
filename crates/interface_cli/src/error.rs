//! CLI error handling

use std::path::PathBuf;

use thiserror::Error;

use core_kernel::CoreError;
use domain_statement::StatementError;

/// Errors raised while loading input or producing statements
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Statement(#[from] StatementError),
}

impl From<validator::ValidationErrors> for CliError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CliError::Validation(errors.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        CliError::Validation(error.to_string())
    }
}
