//! Error type surfaced by sheet sources and the catalog loader.
use std::path::PathBuf;

use thiserror::Error;
use titans_content::ContentError;
use titans_core::{ErrorSeverity, ModelError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to fetch sheet '{sheet}'")]
    Fetch {
        sheet: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("sheet '{sheet}' request failed with status {status}")]
    Status {
        sheet: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("invalid source configuration in {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("sheet load task failed")]
    Join(#[source] tokio::task::JoinError),
}

impl ModelError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Fetch { .. } | RuntimeError::Status { .. } | RuntimeError::Io { .. } => {
                ErrorSeverity::NotFound
            }
            RuntimeError::Content(err) => err.severity(),
            RuntimeError::Config { .. } => ErrorSeverity::Validation,
            RuntimeError::Join(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Fetch { .. } => "RUNTIME_FETCH",
            RuntimeError::Status { .. } => "RUNTIME_STATUS",
            RuntimeError::Io { .. } => "RUNTIME_IO",
            RuntimeError::Content(err) => err.error_code(),
            RuntimeError::Config { .. } => "RUNTIME_CONFIG",
            RuntimeError::Join(_) => "RUNTIME_JOIN",
        }
    }
}
