/// Names of the three sheets a catalog is built from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SheetSet {
    pub heroes: String,
    pub items: String,
    pub skills: String,
}

impl SheetSet {
    pub const DEFAULT_HEROES: &'static str = "Heroes";
    pub const DEFAULT_ITEMS: &'static str = "Blueprints";
    pub const DEFAULT_SKILLS: &'static str = "Skills";
}

impl Default for SheetSet {
    fn default() -> Self {
        Self {
            heroes: Self::DEFAULT_HEROES.to_string(),
            items: Self::DEFAULT_ITEMS.to_string(),
            skills: Self::DEFAULT_SKILLS.to_string(),
        }
    }
}
