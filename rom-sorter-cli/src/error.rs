use thiserror::Error;

use rom_sorter_lib::{SettingsError, SortError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be read or written
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// The run could not start
    #[error("{0}")]
    Sort(#[from] SortError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
