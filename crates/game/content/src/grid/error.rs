use titans_core::{ErrorSeverity, ModelError};

/// Errors raised while parsing or addressing a sheet grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The payload parsed but lacks rows or columns.
    #[error("invalid sheet payload: {0}")]
    Validation(&'static str),

    #[error("sheet payload is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// The remote response is shorter than its fixed envelope.
    #[error("payload of {len} chars is shorter than the {needed}-char envelope")]
    Envelope { len: usize, needed: usize },

    #[error("row {row} out of range (sheet has {size} rows)")]
    RowNotFound { row: usize, size: usize },

    #[error("column {column} out of range (sheet has {width} columns)")]
    ColumnNotFound { column: usize, width: usize },

    #[error("no column labelled '{label}'")]
    LabelNotFound { label: String },

    #[error("cell ({row}, {column}) is empty")]
    AbsentCell { row: usize, column: String },

    #[error("cell ({row}, {column}) holds no digits: {value:?}")]
    NotNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("cell ({row}, {column}) is not a whole number: {value}")]
    NotWholeNumber {
        row: usize,
        column: String,
        value: f64,
    },

    #[error("cell ({row}, {column}) is not a percentage: {value:?}")]
    NotPercent {
        row: usize,
        column: String,
        value: String,
    },
}

impl ModelError for GridError {
    fn severity(&self) -> ErrorSeverity {
        use GridError::*;
        match self {
            Validation(_) | Json(_) | Envelope { .. } => ErrorSeverity::Validation,
            RowNotFound { .. } | ColumnNotFound { .. } | LabelNotFound { .. } => {
                ErrorSeverity::NotFound
            }
            AbsentCell { .. } | NotNumeric { .. } | NotWholeNumber { .. } | NotPercent { .. } => {
                ErrorSeverity::Format
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use GridError::*;
        match self {
            Validation(_) => "GRID_VALIDATION",
            Json(_) => "GRID_JSON",
            Envelope { .. } => "GRID_ENVELOPE",
            RowNotFound { .. } => "GRID_ROW_NOT_FOUND",
            ColumnNotFound { .. } => "GRID_COLUMN_NOT_FOUND",
            LabelNotFound { .. } => "GRID_LABEL_NOT_FOUND",
            AbsentCell { .. } => "GRID_ABSENT_CELL",
            NotNumeric { .. } => "GRID_NOT_NUMERIC",
            NotWholeNumber { .. } => "GRID_NOT_WHOLE_NUMBER",
            NotPercent { .. } => "GRID_NOT_PERCENT",
        }
    }
}
