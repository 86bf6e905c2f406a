//! Asynchronous access to raw sheet payloads.
//!
//! A [`SheetSource`] returns the JSON table of a sheet, already unwrapped from
//! any transport envelope, ready for [`titans_content::Grid::from_json`].
use async_trait::async_trait;
use titans_content::{ContentError, Grid};

use crate::error::Result;

mod local;
mod remote;

pub use local::LocalSource;
pub use remote::RemoteSource;

/// Trait for fetching sheet payloads by name.
///
/// Implementations:
/// - [`LocalSource`]: JSON files in a data directory
/// - [`RemoteSource`]: gviz queries against a published spreadsheet
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the unwrapped payload of `sheet`.
    async fn fetch(&self, sheet: &str) -> Result<String>;

    /// Fetch `sheet` and parse it into a [`Grid`].
    async fn load_grid(&self, sheet: &str) -> Result<Grid> {
        let payload = self.fetch(sheet).await?;
        let grid = Grid::from_json(&payload).map_err(|e| ContentError::from(e).in_sheet(sheet))?;
        Ok(grid)
    }
}
