use arrayvec::ArrayVec;

use crate::catalog::{CatalogError, EntityKind};
use crate::config::CatalogConfig;
use crate::id::EntityId;

/// One row of the skill sheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRecord {
    pub id: EntityId,
    pub name: String,
    pub rarity: String,
    /// Free-form tag naming the classes that can learn the skill.
    pub classes: String,
    pub effect: Option<String>,
    pub required_element: f64,
}

impl SkillRecord {
    pub const DEFAULT_RARITY: &'static str = "Normal";
}

/// A base skill together with its upgrade tiers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    record: SkillRecord,
    tiers: [SkillRecord; CatalogConfig::SKILL_TIERS],
}

impl Skill {
    pub fn new(record: SkillRecord, tiers: [SkillRecord; CatalogConfig::SKILL_TIERS]) -> Self {
        Self { record, tiers }
    }

    /// Assembles a skill from tier records collected one row at a time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidShape`] unless exactly
    /// [`CatalogConfig::SKILL_TIERS`] tiers were collected.
    pub fn from_parts(
        record: SkillRecord,
        tiers: ArrayVec<SkillRecord, { CatalogConfig::SKILL_TIERS }>,
    ) -> Result<Self, CatalogError> {
        match tiers.into_inner() {
            Ok(tiers) => Ok(Self::new(record, tiers)),
            Err(_) => Err(CatalogError::InvalidShape {
                kind: EntityKind::Skill,
                id: record.id,
                reason: "a base skill must own exactly three upgrade tiers",
            }),
        }
    }

    pub fn record(&self) -> &SkillRecord {
        &self.record
    }

    pub fn id(&self) -> &EntityId {
        &self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Upgrade tiers in sheet order.
    pub fn tiers(&self) -> &[SkillRecord; CatalogConfig::SKILL_TIERS] {
        &self.tiers
    }
}
