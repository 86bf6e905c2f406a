//! Single sheet loader.

use std::path::Path;

use crate::error::ContentResult;
use crate::grid::Grid;
use crate::loaders::read_file;

/// Loader for one sheet payload stored as JSON.
pub struct SheetLoader;

impl SheetLoader {
    /// Load a grid from a JSON file holding `{ "table": { ... } }`.
    pub fn load(path: &Path) -> ContentResult<Grid> {
        let content = read_file(path)?;
        Ok(Grid::from_json(&content)?)
    }
}
