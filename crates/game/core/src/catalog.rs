//! Id-keyed registries and the immutable catalog built from them.
//!
//! Every insert is insert-or-fail: a second record deriving the same id is a
//! sheet-authoring mistake and surfaces as [`CatalogError::DuplicateKey`]
//! instead of silently replacing the first record.

use std::collections::HashMap;

use crate::error::{ErrorSeverity, ModelError};
use crate::id::EntityId;
use crate::model::{HeroClass, Item, Skill};

/// Kind of record stored in a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    HeroClass,
    Item,
    Skill,
}

/// Errors raised while assembling catalog records.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateKey { kind: EntityKind, id: EntityId },

    #[error("{kind} name '{name}' yields an empty id")]
    EmptyId { kind: EntityKind, name: String },

    #[error("{kind} '{id}' has an invalid shape: {reason}")]
    InvalidShape {
        kind: EntityKind,
        id: EntityId,
        reason: &'static str,
    },
}

impl ModelError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::DuplicateKey { .. } => ErrorSeverity::Conflict,
            CatalogError::EmptyId { .. } => ErrorSeverity::Format,
            CatalogError::InvalidShape { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateKey { .. } => "CATALOG_DUPLICATE_KEY",
            CatalogError::EmptyId { .. } => "CATALOG_EMPTY_ID",
            CatalogError::InvalidShape { .. } => "CATALOG_INVALID_SHAPE",
        }
    }
}

/// A record that can live in a [`Registry`].
pub trait Keyed {
    const KIND: EntityKind;

    /// Primary key of the record.
    fn id(&self) -> &EntityId;

    /// Display name the key was derived from.
    fn name(&self) -> &str;

    /// Ids of records owned by this one that must also stay unique.
    fn nested_ids(&self) -> impl Iterator<Item = &EntityId> {
        core::iter::empty()
    }
}

impl Keyed for HeroClass {
    const KIND: EntityKind = EntityKind::HeroClass;

    fn id(&self) -> &EntityId {
        HeroClass::id(self)
    }

    fn name(&self) -> &str {
        HeroClass::name(self)
    }

    fn nested_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.promotion().map(HeroClass::id).into_iter()
    }
}

impl Keyed for Item {
    const KIND: EntityKind = EntityKind::Item;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Skill {
    const KIND: EntityKind = EntityKind::Skill;

    fn id(&self) -> &EntityId {
        Skill::id(self)
    }

    fn name(&self) -> &str {
        Skill::name(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Slot {
    Primary(usize),
    Nested(usize),
}

/// Insertion-ordered, id-keyed collection with insert-or-fail semantics.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<EntityId, Slot>,
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts a record, failing if its id or any nested id is already taken.
    ///
    /// Nothing is inserted when the call fails.
    pub fn insert(&mut self, value: T) -> Result<(), CatalogError> {
        let id = value.id();
        if id.is_empty() {
            return Err(CatalogError::EmptyId {
                kind: T::KIND,
                name: value.name().to_string(),
            });
        }

        let mut claimed: Vec<&EntityId> = Vec::with_capacity(2);
        for key in core::iter::once(id).chain(value.nested_ids()) {
            if self.index.contains_key(key) || claimed.contains(&key) {
                return Err(CatalogError::DuplicateKey {
                    kind: T::KIND,
                    id: key.clone(),
                });
            }
            claimed.push(key);
        }

        let position = self.entries.len();
        self.index.insert(id.clone(), Slot::Primary(position));
        for nested in value.nested_ids() {
            self.index.insert(nested.clone(), Slot::Nested(position));
        }
        self.entries.push(value);
        Ok(())
    }

    /// Looks up a record by its primary id.
    pub fn get(&self, id: &str) -> Option<&T> {
        match self.index.get(id)? {
            Slot::Primary(position) => self.entries.get(*position),
            Slot::Nested(_) => None,
        }
    }

    /// Looks up the record that owns `id`, either as its primary id or nested.
    pub fn owner_of(&self, id: &str) -> Option<&T> {
        match self.index.get(id)? {
            Slot::Primary(position) | Slot::Nested(position) => self.entries.get(*position),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.entries.iter().map(Keyed::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The immutable collection of hero classes, items, and skills.
///
/// Built once from three independently loaded sheets and never mutated
/// afterwards, so it can be shared freely between readers.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    hero_classes: Registry<HeroClass>,
    items: Registry<Item>,
    skills: Registry<Skill>,
}

impl Catalog {
    pub fn new(
        hero_classes: Registry<HeroClass>,
        items: Registry<Item>,
        skills: Registry<Skill>,
    ) -> Self {
        Self {
            hero_classes,
            items,
            skills,
        }
    }

    /// Base hero class by id.
    pub fn hero_class(&self, id: &str) -> Option<&HeroClass> {
        self.hero_classes.get(id)
    }

    /// Base or promoted hero class by id.
    pub fn find_class(&self, id: &str) -> Option<&HeroClass> {
        let owner = self.hero_classes.owner_of(id)?;
        if owner.id().as_str() == id {
            Some(owner)
        } else {
            owner.promotion()
        }
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.get(id)
    }

    pub fn hero_classes(&self) -> &Registry<HeroClass> {
        &self.hero_classes
    }

    pub fn items(&self) -> &Registry<Item> {
        &self.items
    }

    pub fn skills(&self) -> &Registry<Skill> {
        &self.skills
    }

    /// Base and promoted class records together.
    pub fn class_record_count(&self) -> usize {
        self.hero_classes
            .iter()
            .map(|class| 1 + usize::from(class.promotion().is_some()))
            .sum()
    }
}
