//! Equipment slots of a hero.

use crate::config::CatalogConfig;
use crate::model::Item;
use crate::quality::Quality;

/// An item placed in one equipment slot.
///
/// The item itself is borrowed from the catalog; quality, element, and the
/// ghost flag belong to this particular copy.
#[derive(Clone, Debug, PartialEq)]
pub struct EquippedItem<'c> {
    pub item: &'c Item,
    pub quality: Quality,
    pub element: Option<String>,
    pub ghost: bool,
}

impl<'c> EquippedItem<'c> {
    /// Normal quality, no element, not a ghost.
    pub fn new(item: &'c Item) -> Self {
        Self {
            item,
            quality: Quality::Normal,
            element: None,
            ghost: false,
        }
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn with_ghost(mut self, ghost: bool) -> Self {
        self.ghost = ghost;
        self
    }
}

/// Fixed set of equipment slots, each empty or holding one item.
#[derive(Clone, Debug, PartialEq)]
pub struct Equipment<'c> {
    slots: [Option<EquippedItem<'c>>; CatalogConfig::SLOT_COUNT],
}

impl<'c> Equipment<'c> {
    /// Creates equipment with every slot empty.
    pub fn empty() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Returns the item in `slot`, or `None` if the slot is empty or absent.
    pub fn get(&self, slot: usize) -> Option<&EquippedItem<'c>> {
        self.slots.get(slot)?.as_ref()
    }

    /// Puts `item` into `slot`, returning what was there before.
    ///
    /// Returns `None` without touching anything if `slot` does not exist.
    pub(crate) fn replace(
        &mut self,
        slot: usize,
        item: EquippedItem<'c>,
    ) -> Option<Option<EquippedItem<'c>>> {
        self.slots.get_mut(slot).map(|entry| entry.replace(item))
    }

    pub(crate) fn take(&mut self, slot: usize) -> Option<Option<EquippedItem<'c>>> {
        self.slots.get_mut(slot).map(Option::take)
    }

    /// Occupied slots in slot order.
    pub fn iter_equipped(&self) -> impl Iterator<Item = &EquippedItem<'c>> {
        self.slots.iter().flatten()
    }

    pub fn occupied(&self) -> usize {
        self.iter_equipped().count()
    }
}

impl Default for Equipment<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
