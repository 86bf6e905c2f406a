use titans_core::{EntityKind, Item, Registry};

use crate::error::ContentResult;
use crate::grid::{CellValue, Grid, GridError, coerce_digits};

use super::{derive_id, optional_cell, optional_text};

/// Builds items from the blueprint sheet, one item per row.
///
/// Only `Name` is required. Every other column may be missing from the sheet
/// or blank in a row; such fields stay unset rather than becoming zero.
pub struct ItemBuilder<'g> {
    grid: &'g Grid,
}

impl<'g> ItemBuilder<'g> {
    pub const NAME: &'static str = "Name";
    pub const TYPE: &'static str = "Type";
    pub const TIER: &'static str = "Tier";
    pub const ATK: &'static str = "ATK";
    pub const DEF: &'static str = "DEF";
    pub const HP: &'static str = "HP";
    pub const EVA: &'static str = "EVA";
    pub const CRIT: &'static str = "CRIT";

    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    pub fn build(&self, row: usize) -> ContentResult<Item> {
        let name = self.grid.require_text(row, Self::NAME)?.trim().to_string();
        let id = derive_id(EntityKind::Item, &name)?;

        Ok(Item {
            id,
            name,
            item_type: optional_text(self.grid, row, Self::TYPE)?.unwrap_or_default(),
            tier: self.tier(row)?,
            atk: self.stat(row, Self::ATK)?,
            def: self.stat(row, Self::DEF)?,
            hp: self.stat(row, Self::HP)?,
            eva: self.stat(row, Self::EVA)?,
            crit: self.stat(row, Self::CRIT)?,
        })
    }

    /// Builds one item per row of the sheet.
    pub fn create_items(&self) -> ContentResult<Registry<Item>> {
        let mut items = Registry::new();
        for row in 0..self.grid.size() {
            items.insert(self.build(row)?)?;
        }
        tracing::debug!(count = items.len(), "items created");
        Ok(items)
    }

    fn tier(&self, row: usize) -> Result<Option<u32>, GridError> {
        if optional_cell(self.grid, row, Self::TIER)?.is_none() {
            return Ok(None);
        }
        let tier = self.grid.get_number(row, Self::TIER)?;
        if tier.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&tier) {
            return Err(GridError::NotWholeNumber {
                row,
                column: format!("'{}'", Self::TIER),
                value: tier,
            });
        }
        Ok(Some(tier as u32))
    }

    /// Numbers are taken as-is, `"12"` and `"1,200"` parse, `"5%"` becomes `0.05`.
    fn stat(&self, row: usize, label: &str) -> Result<Option<f64>, GridError> {
        match optional_cell(self.grid, row, label)? {
            None => Ok(None),
            Some(CellValue::Number(n)) => Ok(Some(*n)),
            Some(CellValue::Text(text)) => {
                parse_stat(text)
                    .map(Some)
                    .ok_or_else(|| GridError::NotNumeric {
                        row,
                        column: format!("'{}'", label),
                        value: text.clone(),
                    })
            }
        }
    }
}

fn parse_stat(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if let Some(percent) = trimmed.strip_suffix('%') {
        return parse_signed(percent).map(|n| n / 100.0);
    }
    parse_signed(trimmed).or_else(|| coerce_digits(trimmed))
}

fn parse_signed(text: &str) -> Option<f64> {
    let text = text.trim();
    text.strip_prefix('+')
        .unwrap_or(text)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use titans_core::CatalogError;

    fn sheet(rows: serde_json::Value) -> Grid {
        let cols: Vec<_> = ["Name", "Type", "Tier", "ATK", "DEF", "HP", "EVA", "CRIT"]
            .iter()
            .map(|label| json!({ "label": label }))
            .collect();
        Grid::from_json(&json!({ "table": { "cols": cols, "rows": rows } }).to_string()).unwrap()
    }

    fn row(cells: &[serde_json::Value]) -> serde_json::Value {
        let c: Vec<_> = cells
            .iter()
            .map(|v| if v.is_null() { json!(null) } else { json!({ "v": v }) })
            .collect();
        json!({ "c": c })
    }

    #[test]
    fn reads_fields_by_label() {
        let grid = sheet(json!([row(&[
            json!("Fire Blade"),
            json!("Sword"),
            json!(5),
            json!(40),
            json!(null),
            json!("+12"),
            json!("5%"),
            json!(0.1)
        ])]));
        let item = ItemBuilder::new(&grid).build(0).unwrap();

        assert_eq!(item.id.as_str(), "fireBlade");
        assert_eq!(item.item_type, "Sword");
        assert_eq!(item.tier, Some(5));
        assert_eq!(item.atk, Some(40.0));
        assert_eq!(item.def, None);
        assert_eq!(item.hp, Some(12.0));
        assert_eq!(item.eva, Some(0.05));
        assert_eq!(item.crit, Some(0.1));
    }

    #[test]
    fn zero_and_blank_stay_distinct() {
        let grid = sheet(json!([row(&[
            json!("Cap"),
            json!(""),
            json!(null),
            json!(0),
            json!("  "),
        ])]));
        let item = ItemBuilder::new(&grid).build(0).unwrap();

        assert_eq!(item.atk, Some(0.0));
        assert_eq!(item.def, None);
        assert_eq!(item.tier, None);
        assert_eq!(item.item_type, "");
        assert_eq!(item.crit, None);
    }

    #[test]
    fn missing_columns_read_as_unset() {
        let payload = json!({
            "table": {
                "cols": [{ "label": "Name" }],
                "rows": [{ "c": [{ "v": "Stick" }] }]
            }
        });
        let grid = Grid::from_json(&payload.to_string()).unwrap();
        let item = ItemBuilder::new(&grid).build(0).unwrap();
        assert_eq!(item, Item::named("Stick"));
    }

    #[test]
    fn garbage_stat_text_is_rejected() {
        let grid = sheet(json!([row(&[json!("Stick"), json!("Club"), json!(1), json!("lots")])]));
        let err = ItemBuilder::new(&grid).build(0).unwrap_err();
        assert!(matches!(
            err,
            crate::ContentError::Grid(GridError::NotNumeric { .. })
        ));
    }

    #[test]
    fn grouped_stat_text_parses_like_numbers() {
        let grid = sheet(json!([row(&[
            json!("Great Axe"),
            json!("Axe"),
            json!(3),
            json!("1,200"),
            json!("+2,500 "),
        ])]));
        let items = ItemBuilder::new(&grid).create_items().unwrap();
        let axe = items.get("greatAxe").unwrap();

        assert_eq!(axe.atk, Some(1200.0));
        assert_eq!(axe.def, Some(2500.0));
        assert_eq!(grid.get_number(0, "ATK").unwrap(), 1200.0);
    }

    #[test]
    fn fractional_or_negative_tier_is_rejected() {
        for tier in [json!(2.5), json!(-1)] {
            let grid = sheet(json!([row(&[json!("Stick"), json!("Club"), tier])]));
            let err = ItemBuilder::new(&grid).build(0).unwrap_err();
            assert!(matches!(
                err,
                crate::ContentError::Grid(GridError::NotWholeNumber { row: 0, .. })
            ));
        }

        let grid = sheet(json!([row(&[json!("Stick"), json!("Club"), json!("Tier 4")])]));
        assert_eq!(ItemBuilder::new(&grid).build(0).unwrap().tier, Some(4));
    }

    #[test]
    fn create_items_builds_every_row() {
        let grid = sheet(json!([
            row(&[json!("Fire Blade"), json!("Sword")]),
            row(&[json!("Ice Wand"), json!("Wand")]),
            row(&[json!("Oak Bow"), json!("Bow")]),
        ]));
        let items = ItemBuilder::new(&grid).create_items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items.get("iceWand").unwrap().item_type, "Wand");
    }

    #[test]
    fn colliding_ids_fail_instead_of_overwriting() {
        let grid = sheet(json!([
            row(&[json!("Fire Blade"), json!("Sword")]),
            row(&[json!("Fire-Blade"), json!("Dagger")]),
        ]));
        let err = ItemBuilder::new(&grid).create_items().unwrap_err();
        assert!(matches!(
            err,
            crate::ContentError::Catalog(CatalogError::DuplicateKey { .. })
        ));
    }
}
