//! Error types for the fb-cli binary.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to load scenario {path}: {source}")]
    Scenario {
        path: PathBuf,
        source: fb_scenario::ScenarioError,
    },

    #[error("Failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
