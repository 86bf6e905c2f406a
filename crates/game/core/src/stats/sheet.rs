use crate::hero::Hero;

/// Every derived stat of a hero, computed in one pass for display.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSheet {
    pub atk: f64,
    pub def: f64,
    pub hp: f64,
    pub eva: f64,
    pub crit_chance: f64,
    pub crit_damage: f64,
}

impl StatSheet {
    pub fn of(hero: &Hero<'_>) -> Self {
        Self {
            atk: hero.atk(),
            def: hero.def(),
            hp: hero.hp(),
            eva: hero.eva(),
            crit_chance: hero.crit_chance(),
            crit_damage: hero.crit_damage(),
        }
    }
}
