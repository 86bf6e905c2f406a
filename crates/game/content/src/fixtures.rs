//! Synthetic sheet payloads shaped like the live balance sheets.
//!
//! The hero sheet holds 21 base classes (7 tier blocks × 3 factions), each with
//! its promotion ten rows below. Used by tests here and in dependent crates.

use std::path::Path;

use serde_json::{Value, json};
use titans_core::{CatalogConfig, Faction};

use crate::sheets::SheetSet;

/// Columns in the hero sheet.
pub const HERO_SHEET_WIDTH: usize = 24;

/// Rows in the hero sheet.
pub const HERO_SHEET_HEIGHT: usize = CatalogConfig::TIER_BLOCKS * CatalogConfig::BLOCK_HEIGHT;

/// Item types accepted by every fixture class, one list per slot.
pub const SLOT_TYPES: [&[&str]; CatalogConfig::SLOT_COUNT] =
    [&["Sword", "Axe"], &["Helmet"], &["Boots"], &[], &[], &[]];

/// Display name of the base class in `block` for `faction`.
pub fn base_class_name(faction: Faction, block: usize) -> String {
    format!("{faction} Recruit {block}")
}

/// Display name of the promoted class in `block` for `faction`.
pub fn promoted_class_name(faction: Faction, block: usize) -> String {
    format!("{faction} Champion {block}")
}

fn table(cols: Vec<Value>, rows: Vec<Vec<Value>>) -> String {
    let rows: Vec<Value> = rows.into_iter().map(|c| json!({ "c": c })).collect();
    json!({ "table": { "cols": cols, "rows": rows } }).to_string()
}

fn cell(value: impl Into<Value>) -> Value {
    json!({ "v": value.into() })
}

fn labelled(labels: &[&str]) -> Vec<Value> {
    labels.iter().map(|label| json!({ "label": label })).collect()
}

fn write_class(rows: &mut [Vec<Value>], row: usize, col: usize, name: &str, block: usize) {
    rows[row][col] = cell(format!("{name}\nA fixture class"));
    rows[row + 1][col + 3] = cell("5%");
    rows[row + 2][col + 3] = cell(2);
    rows[row + 3][col + 3] = cell(20);
    rows[row][col + 5] = cell(30 + block as u64);
    rows[row + 1][col + 5] = cell(format!("{}", 10 + block));
    rows[row + 2][col + 5] = cell(8);
    rows[row + 3][col + 5] = cell("5%");
    rows[row + 2][col + 6] = cell("Fire");

    let first = row + CatalogConfig::SLOT_ROW_OFFSET;
    for (slot, types) in SLOT_TYPES.iter().enumerate() {
        for tag_row in 0..CatalogConfig::SLOT_ROWS {
            rows[first + tag_row][col + slot] = match types.get(tag_row) {
                Some(tag) => cell(*tag),
                None => cell(CatalogConfig::SLOT_PLACEHOLDER),
            };
        }
    }
}

/// Hero sheet payload with every class block filled in.
pub fn hero_sheet() -> String {
    let mut rows = vec![vec![Value::Null; HERO_SHEET_WIDTH]; HERO_SHEET_HEIGHT];
    for block in 0..CatalogConfig::TIER_BLOCKS {
        let row = block * CatalogConfig::BLOCK_HEIGHT;
        for (faction, col) in CatalogConfig::FACTION_ANCHORS {
            write_class(&mut rows, row, col, &base_class_name(faction, block), block);
            write_class(
                &mut rows,
                row + CatalogConfig::PROMOTION_ROW_OFFSET,
                col,
                &promoted_class_name(faction, block),
                block,
            );
        }
    }
    let cols = (0..HERO_SHEET_WIDTH).map(|_| json!({ "label": "" })).collect();
    table(cols, rows)
}

/// Blueprint sheet payload: a handful of items with mixed cell formats.
pub fn item_sheet() -> String {
    let cols = labelled(&["Name", "Type", "Tier", "ATK", "DEF", "HP", "EVA", "CRIT"]);
    let null = Value::Null;
    let rows = vec![
        vec![cell("Fire Blade"), cell("Sword"), cell(3), cell(40), null.clone(), null.clone(), null.clone(), cell("10%")],
        vec![cell("Iron Helm"), cell("Helmet"), cell(2), null.clone(), cell(25), cell("+10"), null.clone(), null.clone()],
        vec![cell("Swift Boots"), cell("Boots"), cell(1), null.clone(), cell(5), null.clone(), cell("5%"), null.clone()],
        vec![cell("Oak Bow"), cell("Bow"), cell(1), cell(18), null.clone(), null.clone(), null.clone(), null],
    ];
    table(cols, rows)
}

/// Skill sheet payload: four base skills, each followed by three tiers.
pub fn skill_sheet() -> String {
    let cols = labelled(&["Rarity", "Classes", "Name", "Skill Effect(s)", "Element", "Tier"]);
    let mut rows = Vec::new();
    for name in ["Whirlwind", "Fireball", "Heal", "Shield Bash"] {
        for tier in 1..=4u64 {
            let label = match tier {
                1 => name.to_string(),
                n => format!("{name} {}", "I".repeat(n as usize - 1)),
            };
            rows.push(vec![
                cell("Common"),
                cell("Fighter"),
                cell(label),
                cell(format!("{name} effect")),
                cell(tier * 5),
                cell(tier),
            ]);
        }
    }
    table(cols, rows)
}

/// Wraps a payload in the fixed response envelope the remote service adds.
pub fn wrap_envelope(payload: &str) -> String {
    format!("/*O_o*/\ngoogle.visualization.Query.setResponse({payload});")
}

/// Writes `<sheet>.json` for all three sheets into `dir`.
pub fn write_data_dir(dir: &Path, sheets: &SheetSet) -> std::io::Result<()> {
    std::fs::write(dir.join(format!("{}.json", sheets.heroes)), hero_sheet())?;
    std::fs::write(dir.join(format!("{}.json", sheets.items)), item_sheet())?;
    std::fs::write(dir.join(format!("{}.json", sheets.skills)), skill_sheet())?;
    Ok(())
}
