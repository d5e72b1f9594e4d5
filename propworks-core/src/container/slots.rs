//! Fixed-size slot container

use heapless::Vec;

use super::item::Item;
use super::point::Point3;
use crate::error::SlotError;

/// Maximum slots per container
pub const MAX_SLOTS: usize = 16;

/// One addressable position
#[derive(Debug, Clone, PartialEq)]
struct Slot {
    /// World-space anchor for placed items
    anchor: Point3,
    /// Current occupant
    item: Option<Item>,
}

/// Ordered, fixed-size sequence of slots
///
/// The slot count is set at construction and never changes. Items always
/// enter the lowest-index empty slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    slots: Vec<Slot, MAX_SLOTS>,
}

impl Container {
    /// Create a container with one empty slot per anchor
    ///
    /// Fails with [`SlotError::Capacity`] if more than [`MAX_SLOTS`]
    /// anchors are given.
    pub fn new(anchors: &[Point3]) -> Result<Self, SlotError> {
        let mut slots = Vec::new();
        for anchor in anchors {
            slots
                .push(Slot {
                    anchor: *anchor,
                    item: None,
                })
                .map_err(|_| SlotError::Capacity)?;
        }
        Ok(Self { slots })
    }

    /// Number of slots (constant)
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.item.is_some()).count()
    }

    /// Every slot holds an item
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.item.is_some())
    }

    /// No slot holds an item
    pub fn is_vacant(&self) -> bool {
        self.slots.iter().all(|s| s.item.is_none())
    }

    /// Place `item` in the lowest-index empty slot
    ///
    /// Returns the slot index, or [`SlotError::Capacity`] when full (the
    /// container is left untouched).
    pub fn add(&mut self, item: Item) -> Result<usize, SlotError> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, s)| s.item.is_none())
            .ok_or(SlotError::Capacity)?;
        slot.item = Some(item);
        Ok(index)
    }

    /// Whether slot `index` is empty
    pub fn is_empty(&self, index: usize) -> Result<bool, SlotError> {
        Ok(self.slot(index)?.item.is_none())
    }

    /// Item in slot `index`, `None` if the slot is empty
    pub fn get(&self, index: usize) -> Result<Option<&Item>, SlotError> {
        Ok(self.slot(index)?.item.as_ref())
    }

    /// Mutable access to the item in slot `index`
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut Item>, SlotError> {
        let slot = self.slots.get_mut(index).ok_or(SlotError::Index)?;
        Ok(slot.item.as_mut())
    }

    /// Remove and return the item in slot `index`
    pub fn take(&mut self, index: usize) -> Result<Option<Item>, SlotError> {
        let slot = self.slots.get_mut(index).ok_or(SlotError::Index)?;
        Ok(slot.item.take())
    }

    /// World-space anchor of slot `index`
    pub fn position(&self, index: usize) -> Result<Point3, SlotError> {
        Ok(self.slot(index)?.anchor)
    }

    /// Occupants in slot order, empty slots skipped
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().filter_map(|s| s.item.as_ref())
    }

    /// Drop every item, leaving all slots empty
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.item = None;
        }
    }

    fn slot(&self, index: usize) -> Result<&Slot, SlotError> {
        self.slots.get(index).ok_or(SlotError::Index)
    }
}
