use titans_core::{
    CatalogConfig, ClassProfile, EntityKind, Faction, HeroClass, Registry, SlotTags,
};

use crate::error::ContentResult;
use crate::grid::Grid;

use super::derive_id;

/// Builds hero classes from the hero sheet.
///
/// # Sheet Layout
///
/// Each class occupies a fixed block anchored at its name cell `(r, c)`:
///
/// ```text
///        c        c+3            c+5         c+6
/// r      name                    hp
/// r+1             crit chance %  atk
/// r+2             crit mult      def         element
/// r+3             threat         eva %
/// r+5..r+9  six columns c..c+5 of allowed item types ("---" = unused)
/// ```
///
/// The promoted variant uses the same layout at `(r + 10, c)`.
pub struct HeroClassBuilder<'g> {
    grid: &'g Grid,
}

impl<'g> HeroClassBuilder<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Builds the class anchored at `(row, col)`.
    ///
    /// Base classes (`is_promoted == false`) also build and own their
    /// promotion; promoted classes stop there, so recursion is one level deep.
    pub fn build(
        &self,
        row: usize,
        col: usize,
        faction: Faction,
        is_promoted: bool,
    ) -> ContentResult<HeroClass> {
        let profile = self.read_profile(row, col, faction)?;
        if is_promoted {
            return Ok(HeroClass::promoted(profile));
        }

        let promotion = self.build(row + CatalogConfig::PROMOTION_ROW_OFFSET, col, faction, true)?;
        Ok(HeroClass::base(profile, promotion)?)
    }

    /// Builds every base class of the sheet: tier blocks top to bottom,
    /// factions left to right.
    pub fn create_hero_classes(&self) -> ContentResult<Registry<HeroClass>> {
        let mut classes = Registry::new();

        for block in 0..CatalogConfig::TIER_BLOCKS {
            let row = block * CatalogConfig::BLOCK_HEIGHT;
            for (faction, col) in CatalogConfig::FACTION_ANCHORS {
                let class = self.build(row, col, faction, false)?;
                tracing::trace!(id = %class.id(), %faction, block, "hero class built");
                classes.insert(class)?;
            }
        }

        tracing::debug!(count = classes.len(), "hero classes created");
        Ok(classes)
    }

    fn read_profile(&self, row: usize, col: usize, faction: Faction) -> ContentResult<ClassProfile> {
        let grid = self.grid;

        let anchor = grid.require_text(row, col)?;
        let name = anchor.lines().next().unwrap_or_default().trim().to_string();
        let id = derive_id(EntityKind::HeroClass, &name)?;

        let element = grid
            .get_text(row + 2, col + 6)?
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(ClassProfile {
            id,
            name,
            faction,
            element,
            crit_chance: grid.get_percent(row + 1, col + 3)?,
            crit_multiplier: grid.get_number(row + 2, col + 3)?,
            threat: grid.get_number(row + 3, col + 3)?,
            hp: grid.get_number(row, col + 5)?,
            atk: grid.get_number(row + 1, col + 5)?,
            def: grid.get_number(row + 2, col + 5)?,
            eva: grid.get_percent(row + 3, col + 5)?,
            equipment_slots: self.read_slots(row, col)?,
        })
    }

    fn read_slots(
        &self,
        row: usize,
        col: usize,
    ) -> ContentResult<[SlotTags; CatalogConfig::SLOT_COUNT]> {
        let mut slots: [SlotTags; CatalogConfig::SLOT_COUNT] = Default::default();
        let first_row = row + CatalogConfig::SLOT_ROW_OFFSET;

        for (offset, tags) in slots.iter_mut().enumerate() {
            for tag_row in first_row..first_row + CatalogConfig::SLOT_ROWS {
                let Some(text) = self.grid.get_text(tag_row, col + offset)? else {
                    continue;
                };
                let tag = text.trim();
                if tag.is_empty() || tag == CatalogConfig::SLOT_PLACEHOLDER {
                    continue;
                }
                tags.push(tag.to_string());
            }
        }

        Ok(slots)
    }
}
