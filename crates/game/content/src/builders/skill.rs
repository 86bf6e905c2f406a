use arrayvec::ArrayVec;
use titans_core::{CatalogConfig, EntityKind, Registry, Skill, SkillRecord};

use crate::error::ContentResult;
use crate::grid::Grid;

use super::{derive_id, optional_cell, optional_text};

/// Builds skills from the skill sheet.
///
/// A base skill row (`Tier` = 1) is followed by its three upgrade rows.
pub struct SkillBuilder<'g> {
    grid: &'g Grid,
}

impl<'g> SkillBuilder<'g> {
    pub const RARITY: &'static str = "Rarity";
    pub const CLASSES: &'static str = "Classes";
    pub const NAME: &'static str = "Name";
    pub const EFFECT: &'static str = "Skill Effect(s)";
    pub const TIER: &'static str = "Tier";

    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Reads a single row without looking at the rows below it.
    pub fn build_record(&self, row: usize) -> ContentResult<SkillRecord> {
        let name = self.grid.require_text(row, Self::NAME)?.trim().to_string();
        let id = derive_id(EntityKind::Skill, &name)?;

        Ok(SkillRecord {
            id,
            name,
            rarity: optional_text(self.grid, row, Self::RARITY)?
                .unwrap_or_else(|| SkillRecord::DEFAULT_RARITY.to_string()),
            classes: optional_text(self.grid, row, Self::CLASSES)?.unwrap_or_default(),
            effect: optional_text(self.grid, row, Self::EFFECT)?,
            required_element: self
                .grid
                .get_number(row, CatalogConfig::REQUIRED_ELEMENT_COLUMN)?,
        })
    }

    /// Builds the base skill at `row` together with the tier rows that follow it.
    pub fn build(&self, row: usize) -> ContentResult<Skill> {
        let record = self.build_record(row)?;
        let mut tiers = ArrayVec::<SkillRecord, { CatalogConfig::SKILL_TIERS }>::new();
        for offset in 1..=CatalogConfig::SKILL_TIERS {
            tiers.push(self.build_record(row + offset)?);
        }
        Ok(Skill::from_parts(record, tiers)?)
    }

    /// Scans the sheet and builds a skill at every row whose tier is 1.
    ///
    /// Rows with an empty tier cell are skipped.
    pub fn create_skills(&self) -> ContentResult<Registry<Skill>> {
        // The tier column is required even though individual cells may be blank.
        self.grid.column_index(Self::TIER)?;

        let mut skills = Registry::new();
        for row in 0..self.grid.size() {
            if optional_cell(self.grid, row, Self::TIER)?.is_none() {
                continue;
            }
            if self.grid.get_number(row, Self::TIER)? == 1.0 {
                let skill = self.build(row)?;
                tracing::trace!(id = %skill.id(), row, "skill built");
                skills.insert(skill)?;
            }
        }
        tracing::debug!(count = skills.len(), "skills created");
        Ok(skills)
    }
}
