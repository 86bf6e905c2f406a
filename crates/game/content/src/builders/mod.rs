//! Entity builders walking a [`Grid`] with fixed addressing templates.
//!
//! Each builder is independent and reads one sheet layout:
//! - [`HeroClassBuilder`]: anchor-relative offsets, three faction columns per tier block
//! - [`ItemBuilder`]: one item per row, fields by column label
//! - [`SkillBuilder`]: a base row followed by its upgrade tier rows
//!
//! [`build_catalog`] runs all three and assembles the [`Catalog`].

mod hero_class;
mod item;
mod skill;

pub use hero_class::HeroClassBuilder;
pub use item::ItemBuilder;
pub use skill::SkillBuilder;

use titans_core::{Catalog, CatalogError, EntityId, EntityKind};

use crate::error::{ContentError, ContentResult};
use crate::grid::{CellValue, Grid, GridError};
use crate::sheets::SheetSet;

/// Builds a catalog from the three parsed sheets.
///
/// Any failure aborts the whole build; errors carry the sheet name.
pub fn build_catalog(
    names: &SheetSet,
    heroes: &Grid,
    items: &Grid,
    skills: &Grid,
) -> ContentResult<Catalog> {
    let hero_classes = HeroClassBuilder::new(heroes)
        .create_hero_classes()
        .map_err(|e| e.in_sheet(&names.heroes))?;
    let items = ItemBuilder::new(items)
        .create_items()
        .map_err(|e| e.in_sheet(&names.items))?;
    let skills = SkillBuilder::new(skills)
        .create_skills()
        .map_err(|e| e.in_sheet(&names.skills))?;

    let catalog = Catalog::new(hero_classes, items, skills);
    tracing::info!(
        hero_classes = catalog.hero_classes().len(),
        class_records = catalog.class_record_count(),
        items = catalog.items().len(),
        skills = catalog.skills().len(),
        "catalog built"
    );
    Ok(catalog)
}

/// Derives an id from `name`, rejecting names without any alphanumerics.
pub(crate) fn derive_id(kind: EntityKind, name: &str) -> ContentResult<EntityId> {
    let id = EntityId::from_name(name);
    if id.is_empty() {
        return Err(ContentError::Catalog(CatalogError::EmptyId {
            kind,
            name: name.to_string(),
        }));
    }
    Ok(id)
}

/// Cell under an optional label; a missing column or blank text reads as unset.
pub(crate) fn optional_cell<'g>(
    grid: &'g Grid,
    row: usize,
    label: &str,
) -> Result<Option<&'g CellValue>, GridError> {
    if !grid.has_column(label) {
        return Ok(None);
    }
    Ok(grid.get(row, label)?.filter(|cell| !cell.is_blank()))
}

/// Trimmed text under an optional label.
pub(crate) fn optional_text(
    grid: &Grid,
    row: usize,
    label: &str,
) -> Result<Option<String>, GridError> {
    Ok(optional_cell(grid, row, label)?.map(|cell| cell.to_text().trim().to_string()))
}
