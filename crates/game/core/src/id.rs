//! Entity ids derived from display names.
//!
//! Hero classes, items, and skills are keyed by the camel form of their sheet
//! name: the name is lower-cased, every run of non-alphanumeric characters is
//! dropped, and the character after a dropped run is upper-cased. The first
//! character of an id is never upper-cased.

use core::borrow::Borrow;
use core::fmt;

/// Catalog key derived from an entity name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(String);

impl EntityId {
    /// Derives the id for a sheet name.
    ///
    /// ```
    /// # use titans_core::EntityId;
    /// assert_eq!(EntityId::from_name("Fire Blade").as_str(), "fireBlade");
    /// assert_eq!(EntityId::from_name("HP +10%").as_str(), "hp10");
    /// ```
    pub fn from_name(name: &str) -> Self {
        let mut id = String::with_capacity(name.len());
        let mut after_separator = false;

        for ch in name.chars().flat_map(char::to_lowercase) {
            if !ch.is_ascii_alphanumeric() {
                after_separator = true;
                continue;
            }
            if after_separator && !id.is_empty() {
                id.push(ch.to_ascii_uppercase());
            } else {
                id.push(ch);
            }
            after_separator = false;
        }

        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
