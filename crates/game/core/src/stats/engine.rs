use crate::hero::{EquippedItem, Hero};
use crate::quality::Quality;

use super::StatKind;

/// Per-slot contribution of an equipped item to one stat.
pub type Contribution = fn(&EquippedItem<'_>) -> f64;

/// Contribution functions indexed by `StatKind as usize`.
static CONTRIBUTIONS: [Contribution; StatKind::COUNT] = [
    atk_contribution,
    def_contribution,
    hp_contribution,
    eva_contribution,
    crit_chance_contribution,
];

/// Returns the contribution function for `kind`.
pub fn contribution(kind: StatKind) -> Contribution {
    CONTRIBUTIONS[kind as usize]
}

/// Computes one stat for `hero`.
///
/// The class base value is multiplied by the hero level when
/// `include_level` is set, then every occupied slot adds its contribution.
pub fn compute_stat(hero: &Hero<'_>, kind: StatKind, include_level: bool) -> f64 {
    let base = hero.class().profile().base_stat(kind);
    let base = if include_level {
        base * f64::from(hero.level())
    } else {
        base
    };

    let contribute = contribution(kind);
    hero.equipment()
        .iter_equipped()
        .fold(base, |total, slot| total + contribute(slot))
}

fn scaled(value: Option<f64>, quality: Quality) -> f64 {
    value.unwrap_or(0.0) * quality.factor()
}

fn atk_contribution(slot: &EquippedItem<'_>) -> f64 {
    scaled(slot.item.atk, slot.quality)
}

fn def_contribution(slot: &EquippedItem<'_>) -> f64 {
    scaled(slot.item.def, slot.quality)
}

fn hp_contribution(slot: &EquippedItem<'_>) -> f64 {
    scaled(slot.item.hp, slot.quality)
}

fn eva_contribution(slot: &EquippedItem<'_>) -> f64 {
    slot.item.eva.unwrap_or(0.0)
}

// Crit is weighted by the slot's attack, not added flat.
fn crit_chance_contribution(slot: &EquippedItem<'_>) -> f64 {
    slot.item.crit.unwrap_or(0.0) * atk_contribution(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn table_order_matches_kind() {
        let item = Item::named("Probe")
            .with_atk(1.0)
            .with_def(2.0)
            .with_hp(3.0)
            .with_eva(4.0)
            .with_crit(5.0);
        let slot = EquippedItem::new(&item);

        let values: Vec<f64> = StatKind::ALL
            .into_iter()
            .map(|kind| contribution(kind)(&slot))
            .collect();
        assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn quality_scales_flat_stats_only() {
        let item = Item::named("Probe").with_atk(3.0).with_eva(0.1);
        let slot = EquippedItem::new(&item).with_quality(Quality::Epic);

        assert_eq!(contribution(StatKind::Atk)(&slot), 6.0);
        assert_eq!(contribution(StatKind::Eva)(&slot), 0.1);
    }

    #[test]
    fn crit_multiplies_scaled_attack() {
        let item = Item::named("Probe").with_atk(10.0).with_crit(0.5);
        let slot = EquippedItem::new(&item).with_quality(Quality::Rare);

        assert_eq!(contribution(StatKind::CritChance)(&slot), 0.5 * 15.0);
    }

    #[test]
    fn unset_stats_contribute_nothing() {
        let item = Item::named("Probe");
        let slot = EquippedItem::new(&item).with_quality(Quality::Legendary);

        for kind in StatKind::ALL {
            assert_eq!(contribution(kind)(&slot), 0.0);
        }
    }
}
