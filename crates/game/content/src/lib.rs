//! Sheet parsing and catalog construction.
//!
//! This crate turns loosely typed balance sheets into the typed records of
//! `titans-core`:
//! - [`grid`]: row/column addressing over a gviz-style JSON table
//! - [`envelope`]: unwrapping of the remote response envelope
//! - [`builders`]: hero class, item and skill builders plus [`build_catalog`]
//! - [`loaders`]: reading sheet payloads from a data directory
//!
//! Fetching sheets over the network lives in `titans-runtime`.

pub mod builders;
pub mod envelope;
pub mod error;
pub mod grid;
pub mod sheets;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use builders::{HeroClassBuilder, ItemBuilder, SkillBuilder, build_catalog};
pub use envelope::strip_envelope;
pub use error::{ContentError, ContentResult};
pub use grid::{CellValue, Column, Grid, GridError};
pub use sheets::SheetSet;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, SheetLoader};
