//! Common error infrastructure for titans-core.
//!
//! Domain-specific errors (e.g. `CatalogError`, `HeroError`) live next to the
//! types they guard. This module holds the shared classification used by every
//! error enum in the workspace, including the content crate's grid errors.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: the source payload is malformed as a whole
/// - **NotFound**: a row, column, or entity reference does not resolve
/// - **Format**: a cell exists but cannot be coerced to the requested type
/// - **Conflict**: two records claim the same id
/// - **Internal**: a structural invariant was violated by code, not data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    NotFound,
    Format,
    Conflict,
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Format => "format",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the error points at sheet content an author can fix.
    pub const fn is_data_error(&self) -> bool {
        !matches!(self, Self::Internal)
    }
}

/// Common trait for all catalog and model errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by what went wrong, not by how bad it is
/// - Error codes are stable SCREAMING_SNAKE identifiers for tests and logs
pub trait ModelError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
