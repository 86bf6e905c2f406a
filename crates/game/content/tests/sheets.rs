//! Public-API tests: payload unwrapping, file loading and row builders.

use serde_json::json;
use titans_content::{
    CellValue, ContentError, ContentFactory, Grid, GridError, ItemBuilder, SheetSet,
    SkillBuilder, strip_envelope,
};
use titans_core::{CatalogError, ModelError};

fn item_payload(names: &[&str]) -> String {
    let rows: Vec<_> = names
        .iter()
        .map(|name| json!({ "c": [{ "v": name }, { "v": "Sword" }, { "v": 1 }, { "v": 12 }] }))
        .collect();
    json!({
        "table": {
            "cols": [{ "label": "Name" }, { "label": "Type" }, { "label": "Tier" }, { "label": "ATK" }],
            "rows": rows
        }
    })
    .to_string()
}

fn skill_payload() -> String {
    let rows: Vec<_> = (1..=8u64)
        .map(|n| {
            let tier = (n - 1) % 4 + 1;
            json!({ "c": [
                { "v": "Epic" },
                { "v": "Mage" },
                { "v": format!("Spell {n}") },
                null,
                { "v": format!("{} fire", tier * 3) },
                { "v": tier },
            ]})
        })
        .collect();
    json!({
        "table": {
            "cols": [
                { "label": "Rarity" }, { "label": "Classes" }, { "label": "Name" },
                { "label": "Skill Effect(s)" }, { "label": "Element" }, { "label": "Tier" }
            ],
            "rows": rows
        }
    })
    .to_string()
}

fn wrap(payload: &str) -> String {
    format!("/*O_o*/\ngoogle.visualization.Query.setResponse({payload});")
}

// ============================================================================
// Envelope + Grid
// ============================================================================

#[test]
fn wrapped_payload_parses_after_stripping() {
    let wrapped = wrap(&item_payload(&["Fire Blade"]));
    let grid = Grid::from_json(strip_envelope(&wrapped).expect("envelope strips"))
        .expect("payload parses");

    assert_eq!(grid.size(), 1);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.get(0, "atk").unwrap(), Some(&CellValue::Number(12.0)));
}

#[test]
fn wrapped_payload_does_not_parse_directly() {
    let wrapped = wrap(&item_payload(&["Fire Blade"]));
    let err = Grid::from_json(&wrapped).expect_err("envelope is not JSON");
    assert!(matches!(err, GridError::Json(_)));
    assert_eq!(err.error_code(), "GRID_JSON");
}

#[test]
fn empty_tables_are_rejected() {
    let no_rows = json!({ "table": { "cols": [{ "label": "Name" }], "rows": [] } });
    let no_cols = json!({ "table": { "cols": [], "rows": [{ "c": [] }] } });

    for payload in [no_rows, no_cols] {
        let err = Grid::from_json(&payload.to_string()).expect_err("empty table");
        assert!(matches!(err, GridError::Validation(_)));
    }
}

// ============================================================================
// Builders over parsed sheets
// ============================================================================

#[test]
fn items_and_skills_build_from_payloads() {
    let items = Grid::from_json(&item_payload(&["Fire Blade", "Ice Wand"])).unwrap();
    let skills = Grid::from_json(&skill_payload()).unwrap();

    let items = ItemBuilder::new(&items).create_items().expect("items build");
    let skills = SkillBuilder::new(&skills).create_skills().expect("skills build");

    assert_eq!(items.len(), 2);
    assert_eq!(items.get("iceWand").and_then(|i| i.atk), Some(12.0));

    assert_eq!(skills.len(), 2);
    let second = skills.get("spell5").expect("second base skill");
    assert_eq!(second.record().rarity, "Epic");
    assert_eq!(second.tiers()[2].name, "Spell 8");
    assert_eq!(second.tiers()[2].required_element, 12.0);
}

#[test]
fn duplicate_item_names_are_a_conflict() {
    let grid = Grid::from_json(&item_payload(&["Fire Blade", "fire blade"])).unwrap();
    let err = ItemBuilder::new(&grid).create_items().expect_err("duplicate ids");

    assert!(matches!(
        err,
        ContentError::Catalog(CatalogError::DuplicateKey { .. })
    ));
    assert_eq!(err.error_code(), "CATALOG_DUPLICATE_KEY");
}

// ============================================================================
// Data directory loading
// ============================================================================

#[test]
fn factory_loads_named_sheets_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Blueprints.json"), item_payload(&["Oak Bow"])).unwrap();

    let factory = ContentFactory::new(dir.path());
    let grid = factory.load_grid("Blueprints").expect("sheet loads");
    assert_eq!(grid.require_text(0, "Name").unwrap(), "Oak Bow");
}

#[test]
fn broken_hero_sheet_aborts_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let sheets = SheetSet::default();
    // Parses fine but has none of the class blocks.
    std::fs::write(dir.path().join("Heroes.json"), item_payload(&["Nobody"])).unwrap();
    std::fs::write(dir.path().join("Blueprints.json"), item_payload(&["Oak Bow"])).unwrap();
    std::fs::write(dir.path().join("Skills.json"), skill_payload()).unwrap();

    let err = ContentFactory::new(dir.path())
        .load_catalog(&sheets)
        .expect_err("hero sheet has no class blocks");
    assert_eq!(err.sheet(), Some("Heroes"));
    assert!(matches!(err.root(), ContentError::Grid(_)));
}
