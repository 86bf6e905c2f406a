//! Typed catalog records built from the balance sheets.
//!
//! Records are immutable once built. Recursive ownership is bounded by type:
//! a base [`HeroClass`] owns exactly one promoted class that owns nothing, and
//! a [`Skill`] owns exactly [`CatalogConfig::SKILL_TIERS`] tier records that
//! cannot own tiers themselves.
//!
//! [`CatalogConfig::SKILL_TIERS`]: crate::CatalogConfig::SKILL_TIERS

pub(crate) mod hero_class;
mod item;
mod skill;

pub use hero_class::{ClassProfile, Faction, HeroClass, SlotTags};
pub use item::Item;
pub use skill::{Skill, SkillRecord};
