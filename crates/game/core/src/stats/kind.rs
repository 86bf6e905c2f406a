/// Closed set of stats the engine knows how to aggregate.
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
pub enum StatKind {
    Atk,
    Def,
    Hp,
    Eva,
    CritChance,
}

impl StatKind {
    pub const COUNT: usize = 5;

    pub const ALL: [StatKind; Self::COUNT] = [
        StatKind::Atk,
        StatKind::Def,
        StatKind::Hp,
        StatKind::Eva,
        StatKind::CritChance,
    ];

    /// Whether the class base value is multiplied by the hero level.
    pub const fn scales_with_level(self) -> bool {
        matches!(self, StatKind::Atk | StatKind::Def | StatKind::Hp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn discriminants_index_all() {
        for (position, kind) in StatKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, position);
        }
    }

    #[test]
    fn only_flat_stats_scale_with_level() {
        let scaling: Vec<StatKind> = StatKind::ALL
            .into_iter()
            .filter(|kind| kind.scales_with_level())
            .collect();
        assert_eq!(scaling, [StatKind::Atk, StatKind::Def, StatKind::Hp]);
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(StatKind::from_str("crit_chance").unwrap(), StatKind::CritChance);
        assert_eq!(StatKind::CritChance.to_string(), "crit_chance");
    }
}
