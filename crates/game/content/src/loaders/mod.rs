//! Filesystem loaders for sheet payloads.
//!
//! A data directory holds one unwrapped gviz payload per sheet, named
//! `<sheet>.json`.

pub mod factory;
pub mod sheet;

pub use factory::ContentFactory;
pub use sheet::SheetLoader;

use std::path::Path;

use crate::error::{ContentError, ContentResult};

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> ContentResult<String> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}
