use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::SheetSource;
use crate::error::{Result, RuntimeError};

/// Reads `<data_dir>/<sheet>.json`.
#[derive(Clone, Debug)]
pub struct LocalSource {
    data_dir: PathBuf,
}

impl LocalSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", sheet))
    }
}

#[async_trait]
impl SheetSource for LocalSource {
    #[tracing::instrument(skip(self), fields(dir = %self.data_dir.display()))]
    async fn fetch(&self, sheet: &str) -> Result<String> {
        let path = self.sheet_path(sheet);
        let payload = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| RuntimeError::Io { path, source })?;
        tracing::debug!(bytes = payload.len(), "sheet read");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_sheet_files_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Skills.json"), "{\"table\":{}}").unwrap();

        let source = LocalSource::new(dir.path());
        assert_eq!(source.fetch("Skills").await.unwrap(), "{\"table\":{}}");
    }

    #[tokio::test]
    async fn load_grid_parses_without_stripping() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Blueprints.json"),
            r#"{"table":{"cols":[{"label":"Name"}],"rows":[{"c":[{"v":"Oak Bow"}]},{"c":[{"v":"Ice Wand"}]}]}}"#,
        )
        .unwrap();

        let grid = LocalSource::new(dir.path())
            .load_grid("Blueprints")
            .await
            .unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.require_text(1, "name").unwrap(), "Ice Wand");
    }

    #[tokio::test]
    async fn load_grid_rejects_empty_tables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Skills.json"),
            r#"{"table":{"cols":[{"label":"Name"}],"rows":[]}}"#,
        )
        .unwrap();

        let err = LocalSource::new(dir.path())
            .load_grid("Skills")
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Content(_)));
    }

    #[tokio::test]
    async fn missing_sheet_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalSource::new(dir.path());

        match source.fetch("Heroes").await {
            Err(RuntimeError::Io { path, .. }) => {
                assert_eq!(path, dir.path().join("Heroes.json"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
