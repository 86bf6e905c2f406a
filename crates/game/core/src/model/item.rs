use crate::id::EntityId;

/// An equippable blueprint.
///
/// Stat fields are `None` when the sheet leaves them blank, which is distinct
/// from an explicit zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub item_type: String,
    pub tier: Option<u32>,
    pub atk: Option<f64>,
    pub def: Option<f64>,
    pub hp: Option<f64>,
    pub eva: Option<f64>,
    pub crit: Option<f64>,
}

impl Item {
    /// Creates an item with a derived id and every stat unset.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: EntityId::from_name(&name),
            name,
            item_type: String::new(),
            tier: None,
            atk: None,
            def: None,
            hp: None,
            eva: None,
            crit: None,
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn with_atk(mut self, atk: f64) -> Self {
        self.atk = Some(atk);
        self
    }

    pub fn with_def(mut self, def: f64) -> Self {
        self.def = Some(def);
        self
    }

    pub fn with_hp(mut self, hp: f64) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_eva(mut self, eva: f64) -> Self {
        self.eva = Some(eva);
        self
    }

    pub fn with_crit(mut self, crit: f64) -> Self {
        self.crit = Some(crit);
        self
    }
}
