//! Mutable hero instances built on catalog records.
//!
//! A [`Hero`] borrows its class and items from a [`Catalog`], so the catalog
//! must outlive every hero built from it. Level and equipment change freely;
//! derived stats are recomputed on every call.
//!
//! [`Catalog`]: crate::Catalog

mod equipment;

pub use equipment::{EquippedItem, Equipment};

use crate::config::CatalogConfig;
use crate::error::{ErrorSeverity, ModelError};
use crate::id::EntityId;
use crate::model::HeroClass;
use crate::stats::{StatKind, StatSheet, compute_stat};

/// Errors raised by hero mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeroError {
    #[error(
        "level {level} outside {}..={}",
        CatalogConfig::MIN_LEVEL,
        CatalogConfig::MAX_LEVEL
    )]
    LevelOutOfRange { level: u32 },

    #[error("equipment slot {slot} does not exist")]
    SlotOutOfRange { slot: usize },

    #[error("class '{class}' cannot equip '{item}' ({item_type:?}) in slot {slot}")]
    SlotRejectsItem {
        class: EntityId,
        item: EntityId,
        item_type: String,
        slot: usize,
    },

    #[error("class '{class}' has no promotion")]
    NoPromotion { class: EntityId },
}

impl ModelError for HeroError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            HeroError::LevelOutOfRange { .. } | HeroError::SlotRejectsItem { .. } => {
                ErrorSeverity::Validation
            }
            HeroError::SlotOutOfRange { .. } | HeroError::NoPromotion { .. } => {
                ErrorSeverity::NotFound
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            HeroError::LevelOutOfRange { .. } => "HERO_LEVEL_OUT_OF_RANGE",
            HeroError::SlotOutOfRange { .. } => "HERO_SLOT_OUT_OF_RANGE",
            HeroError::SlotRejectsItem { .. } => "HERO_SLOT_REJECTS_ITEM",
            HeroError::NoPromotion { .. } => "HERO_NO_PROMOTION",
        }
    }
}

/// A hero: one class, a level, and six equipment slots.
#[derive(Clone, Debug, PartialEq)]
pub struct Hero<'c> {
    name: String,
    class: &'c HeroClass,
    level: u32,
    equipment: Equipment<'c>,
}

impl<'c> Hero<'c> {
    pub const DEFAULT_NAME: &'static str = "My Hero";

    /// Creates a level 1 hero with nothing equipped.
    pub fn new(class: &'c HeroClass) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            class,
            level: CatalogConfig::MIN_LEVEL,
            equipment: Equipment::empty(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn class(&self) -> &'c HeroClass {
        self.class
    }

    pub fn is_promoted(&self) -> bool {
        self.class.is_promoted()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) -> Result<(), HeroError> {
        if !(CatalogConfig::MIN_LEVEL..=CatalogConfig::MAX_LEVEL).contains(&level) {
            return Err(HeroError::LevelOutOfRange { level });
        }
        self.level = level;
        Ok(())
    }

    /// Switches the hero to its class's promoted variant.
    ///
    /// Level and equipment are kept.
    pub fn promote(&mut self) -> Result<(), HeroError> {
        let promotion = self.class.promotion().ok_or_else(|| HeroError::NoPromotion {
            class: self.class.id().clone(),
        })?;
        self.class = promotion;
        Ok(())
    }

    pub fn equipment(&self) -> &Equipment<'c> {
        &self.equipment
    }

    /// Occupied slots in slot order.
    pub fn equipped(&self) -> impl Iterator<Item = &EquippedItem<'c>> {
        self.equipment.iter_equipped()
    }

    /// Equips an item, returning the item previously in `slot`.
    ///
    /// # Errors
    ///
    /// - [`HeroError::SlotOutOfRange`] if `slot` is not a valid slot index
    /// - [`HeroError::SlotRejectsItem`] if the item type is not listed in the
    ///   class's tags for that slot
    pub fn equip(
        &mut self,
        slot: usize,
        equipped: EquippedItem<'c>,
    ) -> Result<Option<EquippedItem<'c>>, HeroError> {
        if slot >= CatalogConfig::SLOT_COUNT {
            return Err(HeroError::SlotOutOfRange { slot });
        }
        let item = equipped.item;
        if !self.class.profile().accepts(slot, &item.item_type) {
            return Err(HeroError::SlotRejectsItem {
                class: self.class.id().clone(),
                item: item.id.clone(),
                item_type: item.item_type.clone(),
                slot,
            });
        }
        self.equipment
            .replace(slot, equipped)
            .ok_or(HeroError::SlotOutOfRange { slot })
    }

    /// Empties `slot`, returning what it held.
    pub fn unequip(&mut self, slot: usize) -> Result<Option<EquippedItem<'c>>, HeroError> {
        self.equipment
            .take(slot)
            .ok_or(HeroError::SlotOutOfRange { slot })
    }

    // ===== derived stats =====

    pub fn stat(&self, kind: StatKind) -> f64 {
        compute_stat(self, kind, kind.scales_with_level())
    }

    pub fn atk(&self) -> f64 {
        compute_stat(self, StatKind::Atk, true)
    }

    pub fn def(&self) -> f64 {
        compute_stat(self, StatKind::Def, true)
    }

    pub fn hp(&self) -> f64 {
        compute_stat(self, StatKind::Hp, true)
    }

    pub fn eva(&self) -> f64 {
        compute_stat(self, StatKind::Eva, false)
    }

    pub fn crit_chance(&self) -> f64 {
        compute_stat(self, StatKind::CritChance, false)
    }

    pub fn crit_damage(&self) -> f64 {
        self.class.profile().crit_multiplier * self.atk()
    }

    pub fn stat_sheet(&self) -> StatSheet {
        StatSheet::of(self)
    }
}
