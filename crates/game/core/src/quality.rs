//! Item quality tiers and their multipliers.

/// Quality of an equipped item.
///
/// Scales the item's attack, defense, and health contributions. The factors
/// live in a single process-wide table and never change.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Quality {
    #[default]
    Normal,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Multipliers indexed by `Quality as usize`.
static QUALITY_FACTORS: [f64; 5] = [1.0, 1.25, 1.5, 2.0, 7.0 / 3.0];

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Normal,
        Quality::Uncommon,
        Quality::Rare,
        Quality::Epic,
        Quality::Legendary,
    ];

    /// Multiplier applied to scalable item stats.
    pub fn factor(self) -> f64 {
        QUALITY_FACTORS[self as usize]
    }

    /// Lower-case display name (`"legendary"`).
    pub fn name(self) -> &'static str {
        match self {
            Quality::Normal => "normal",
            Quality::Uncommon => "uncommon",
            Quality::Rare => "rare",
            Quality::Epic => "epic",
            Quality::Legendary => "legendary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn factors_match_quality_order() {
        let factors: Vec<f64> = Quality::ALL.iter().map(|q| q.factor()).collect();
        assert_eq!(factors[..4], [1.0, 1.25, 1.5, 2.0]);
        assert!((factors[4] - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn factors_never_decrease() {
        for pair in Quality::ALL.windows(2) {
            assert!(pair[0].factor() < pair[1].factor());
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Quality::from_str("LEGENDARY").unwrap(), Quality::Legendary);
        assert_eq!(Quality::from_str("rare").unwrap(), Quality::Rare);
        assert!(Quality::from_str("mythic").is_err());
        assert_eq!(Quality::Epic.to_string(), "epic");
        assert_eq!(Quality::Epic.name(), "epic");
    }
}
