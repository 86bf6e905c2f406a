//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use titans_core::Catalog;

use crate::builders::build_catalog;
use crate::error::ContentResult;
use crate::grid::Grid;
use crate::loaders::SheetLoader;
use crate::sheets::SheetSet;

/// Content factory that loads sheet payloads from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── Heroes.json
/// ├── Blueprints.json
/// └── Skills.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the payload file for `sheet`.
    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", sheet))
    }

    /// Load one sheet from `<sheet>.json`.
    pub fn load_grid(&self, sheet: &str) -> ContentResult<Grid> {
        SheetLoader::load(&self.sheet_path(sheet)).map_err(|e| e.in_sheet(sheet))
    }

    /// Load all three sheets and build the catalog.
    ///
    /// Nothing is returned unless every sheet loads and builds.
    pub fn load_catalog(&self, sheets: &SheetSet) -> ContentResult<Catalog> {
        let heroes = self.load_grid(&sheets.heroes)?;
        let items = self.load_grid(&sheets.items)?;
        let skills = self.load_grid(&sheets.skills)?;
        build_catalog(sheets, &heroes, &items, &skills)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentError;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.sheet_path("Heroes"),
            Path::new("/tmp/data/Heroes.json")
        );
    }

    #[test]
    fn load_errors_name_the_sheet() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Heroes.json"), "not json").unwrap();

        let err = ContentFactory::new(dir.path())
            .load_grid("Heroes")
            .unwrap_err();
        assert_eq!(err.sheet(), Some("Heroes"));
        assert!(matches!(err.root(), ContentError::Grid(_)));
    }

    #[test]
    fn missing_sheet_aborts_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path())
            .load_catalog(&SheetSet::default())
            .unwrap_err();
        assert_eq!(err.sheet(), Some(SheetSet::DEFAULT_HEROES));
        assert!(matches!(err.root(), ContentError::Io { .. }));
    }
}
