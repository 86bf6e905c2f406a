//! Runtime loading of the balance catalog.
//!
//! Consumers pick a sheet source through [`SourceConfig`] (environment or
//! TOML), then let [`CatalogLoader`] fetch the three sheets concurrently and
//! build an immutable, shareable [`titans_core::Catalog`].
//!
//! Modules are organized by responsibility:
//! - [`config`] selects the source and the sheet names
//! - [`source`] fetches raw payloads from disk or over HTTP
//! - [`loader`] joins the fetches and builds the catalog
pub mod config;
pub mod error;
pub mod loader;
pub mod source;

pub use config::{ConfigLoader, SourceConfig, SourceMode};
pub use error::{Result, RuntimeError};
pub use loader::CatalogLoader;
pub use source::{LocalSource, RemoteSource, SheetSource};
