use arrayvec::ArrayVec;

use crate::catalog::{CatalogError, EntityKind};
use crate::config::CatalogConfig;
use crate::id::EntityId;
use crate::stats::StatKind;

/// Allowed item types for one equipment slot, placeholders already removed.
pub type SlotTags = ArrayVec<String, { CatalogConfig::SLOT_ROWS }>;

/// Faction colour of a hero class column on the hero sheet.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Red,
    Green,
    Blue,
}

/// Stats and equipment rules shared by base and promoted classes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassProfile {
    pub id: EntityId,
    pub name: String,
    pub faction: Faction,
    pub element: Option<String>,
    /// Fraction in `[0, 1]`.
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub threat: f64,
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    /// Fraction in `[0, 1]`.
    pub eva: f64,
    pub equipment_slots: [SlotTags; CatalogConfig::SLOT_COUNT],
}

impl ClassProfile {
    /// Class value for a stat before level scaling and equipment.
    pub fn base_stat(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Atk => self.atk,
            StatKind::Def => self.def,
            StatKind::Hp => self.hp,
            StatKind::Eva => self.eva,
            StatKind::CritChance => self.crit_chance,
        }
    }

    pub fn slot_tags(&self, slot: usize) -> Option<&SlotTags> {
        self.equipment_slots.get(slot)
    }

    /// Returns true if `item_type` is listed for `slot` (case-insensitive).
    pub fn accepts(&self, slot: usize, item_type: &str) -> bool {
        let wanted = item_type.trim();
        self.slot_tags(slot)
            .is_some_and(|tags| tags.iter().any(|tag| tag.trim().eq_ignore_ascii_case(wanted)))
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Rank {
    Base(Box<HeroClass>),
    Promoted,
}

/// A playable class archetype.
///
/// Base classes always own their promoted variant; promoted classes own
/// nothing. Construction enforces the one-level depth.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroClass {
    profile: ClassProfile,
    rank: Rank,
}

impl HeroClass {
    /// Creates a promoted (terminal) class.
    pub fn promoted(profile: ClassProfile) -> Self {
        Self {
            profile,
            rank: Rank::Promoted,
        }
    }

    /// Creates a base class owning `promotion`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidShape`] if `promotion` is itself a base
    /// class, which would make the promotion chain deeper than one level.
    pub fn base(profile: ClassProfile, promotion: HeroClass) -> Result<Self, CatalogError> {
        if !promotion.is_promoted() {
            return Err(CatalogError::InvalidShape {
                kind: EntityKind::HeroClass,
                id: profile.id,
                reason: "promotion must not own a further promotion",
            });
        }
        Ok(Self {
            profile,
            rank: Rank::Base(Box::new(promotion)),
        })
    }

    pub fn profile(&self) -> &ClassProfile {
        &self.profile
    }

    pub fn id(&self) -> &EntityId {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn is_promoted(&self) -> bool {
        matches!(self.rank, Rank::Promoted)
    }

    /// The promoted variant, present only on base classes.
    pub fn promotion(&self) -> Option<&HeroClass> {
        match &self.rank {
            Rank::Base(promotion) => Some(&**promotion),
            Rank::Promoted => None,
        }
    }
}
