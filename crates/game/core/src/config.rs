use crate::model::Faction;

/// Sheet layout constants and tunable bounds for the balance catalog.
///
/// The hero sheet is addressed by fixed offsets from an anchor cell, so the
/// numbers below are part of the sheet contract rather than preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig;

impl CatalogConfig {
    // ===== hero sheet layout =====
    /// Number of tier blocks stacked vertically on the hero sheet.
    pub const TIER_BLOCKS: usize = 7;
    /// Height of one tier block in rows.
    pub const BLOCK_HEIGHT: usize = 20;
    /// Anchor column of each faction inside a tier block.
    pub const FACTION_ANCHORS: [(Faction, usize); 3] =
        [(Faction::Red, 1), (Faction::Green, 9), (Faction::Blue, 17)];
    /// Row distance between a base class anchor and its promotion anchor.
    pub const PROMOTION_ROW_OFFSET: usize = 10;
    /// Row distance between a class anchor and its first equipment tag row.
    pub const SLOT_ROW_OFFSET: usize = 5;
    /// Number of equipment slots per class (and per hero).
    pub const SLOT_COUNT: usize = 6;
    /// Number of tag rows scanned per equipment slot.
    pub const SLOT_ROWS: usize = 5;
    /// Cell text marking an unused equipment tag.
    pub const SLOT_PLACEHOLDER: &'static str = "---";

    // ===== skill sheet layout =====
    /// Upgrade tiers owned by every base skill.
    pub const SKILL_TIERS: usize = 3;
    /// Column index of the required element count on the skill sheet.
    pub const REQUIRED_ELEMENT_COLUMN: usize = 4;

    // ===== catalog shape =====
    /// Base classes produced from a well-formed hero sheet.
    pub const BASE_CLASS_COUNT: usize = Self::TIER_BLOCKS * Self::FACTION_ANCHORS.len();

    // ===== hero bounds =====
    pub const MIN_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 40;

    // ===== remote payload envelope =====
    /// Characters preceding the JSON object in a remote sheet response.
    pub const ENVELOPE_PREFIX: usize = 47;
    /// Characters following the JSON object in a remote sheet response.
    pub const ENVELOPE_SUFFIX: usize = 2;
}
