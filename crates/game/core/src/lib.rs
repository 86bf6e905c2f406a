//! Typed balance catalog and stat engine shared by loaders and frontends.
//!
//! `titans-core` defines the records built from the balance sheets (hero
//! classes, items, skills), the immutable [`Catalog`] that owns them, mutable
//! [`Hero`] instances that borrow from it, and the pure stat engine that
//! combines the two. The crate performs no I/O; sheet parsing lives in
//! `titans-content` and source fetching in `titans-runtime`.
pub mod catalog;
pub mod config;
pub mod error;
pub mod hero;
pub mod id;
pub mod model;
pub mod quality;
pub mod stats;

pub use catalog::{Catalog, CatalogError, EntityKind, Keyed, Registry};
pub use config::CatalogConfig;
pub use error::{ErrorSeverity, ModelError};
pub use hero::{Equipment, EquippedItem, Hero, HeroError};
pub use id::EntityId;
pub use model::{ClassProfile, Faction, HeroClass, Item, Skill, SkillRecord, SlotTags};
pub use quality::Quality;
pub use stats::{StatKind, StatSheet};
