//! Error type for catalog construction from sheets.
use std::path::PathBuf;

use titans_core::{CatalogError, ErrorSeverity, ModelError};

use crate::grid::GridError;

pub type ContentResult<T> = std::result::Result<T, ContentError>;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to build catalog from sheet '{sheet}'")]
    Sheet {
        sheet: String,
        #[source]
        source: Box<ContentError>,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Attaches the sheet name the error came from.
    pub fn in_sheet(self, sheet: impl Into<String>) -> Self {
        ContentError::Sheet {
            sheet: sheet.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error with sheet context removed.
    pub fn root(&self) -> &ContentError {
        match self {
            ContentError::Sheet { source, .. } => source.root(),
            other => other,
        }
    }

    /// Name of the sheet the error came from, if known.
    pub fn sheet(&self) -> Option<&str> {
        match self {
            ContentError::Sheet { sheet, .. } => Some(sheet),
            _ => None,
        }
    }
}

impl ModelError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ContentError::Grid(err) => err.severity(),
            ContentError::Catalog(err) => err.severity(),
            ContentError::Sheet { source, .. } => source.severity(),
            ContentError::Io { .. } => ErrorSeverity::NotFound,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ContentError::Grid(err) => err.error_code(),
            ContentError::Catalog(err) => err.error_code(),
            ContentError::Sheet { source, .. } => source.error_code(),
            ContentError::Io { .. } => "CONTENT_IO",
        }
    }
}
