//! Concurrent catalog loading from a [`SheetSource`].
use std::sync::Arc;

use titans_content::{ContentError, ContentResult, Grid, SheetSet, build_catalog};
use titans_core::Catalog;

use crate::config::SourceConfig;
use crate::error::{Result, RuntimeError};
use crate::source::SheetSource;

/// Fetches the three sheets and builds the shared catalog.
///
/// The sheets are fetched concurrently. Parsing and building run on the
/// blocking pool. Any failure aborts the load; no partial catalog is returned.
pub struct CatalogLoader {
    source: Arc<dyn SheetSource>,
    sheets: SheetSet,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn SheetSource>, sheets: SheetSet) -> Self {
        Self { source, sheets }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.source(), config.sheets.clone())
    }

    pub fn sheets(&self) -> &SheetSet {
        &self.sheets
    }

    pub async fn load(&self) -> Result<Arc<Catalog>> {
        let (heroes, items, skills) = tokio::try_join!(
            self.source.fetch(&self.sheets.heroes),
            self.source.fetch(&self.sheets.items),
            self.source.fetch(&self.sheets.skills),
        )?;
        tracing::debug!("all sheets fetched");

        let sheets = self.sheets.clone();
        let catalog =
            tokio::task::spawn_blocking(move || build(&sheets, &heroes, &items, &skills))
                .await
                .map_err(RuntimeError::Join)??;

        Ok(Arc::new(catalog))
    }
}

fn build(sheets: &SheetSet, heroes: &str, items: &str, skills: &str) -> ContentResult<Catalog> {
    let parse = |sheet: &str, payload: &str| {
        Grid::from_json(payload).map_err(|e| ContentError::from(e).in_sheet(sheet))
    };
    let heroes = parse(&sheets.heroes, heroes)?;
    let items = parse(&sheets.items, items)?;
    let skills = parse(&sheets.skills, skills)?;
    build_catalog(sheets, &heroes, &items, &skills)
}
