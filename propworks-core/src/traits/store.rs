//! Abstract slot storage

use crate::container::{Container, Item, Point3};
use crate::error::SlotError;

/// Slot storage a transport arm can pick from and deposit into
///
/// Implemented by plain [`Container`]s and by processing stations, so an
/// arm can unload a station's slots directly.
pub trait SlotStore {
    /// Number of slots (constant)
    fn slot_count(&self) -> usize;

    /// Whether slot `index` is empty
    fn is_empty(&self, index: usize) -> Result<bool, SlotError>;

    /// Item in slot `index`
    fn get(&self, index: usize) -> Result<Option<&Item>, SlotError>;

    /// Mutable item in slot `index`
    fn get_mut(&mut self, index: usize) -> Result<Option<&mut Item>, SlotError>;

    /// Remove and return the item in slot `index`
    fn take(&mut self, index: usize) -> Result<Option<Item>, SlotError>;

    /// World-space anchor of slot `index`
    fn position(&self, index: usize) -> Result<Point3, SlotError>;

    /// Slot `index` exists and holds an item
    ///
    /// Out-of-range indices read as "not occupied".
    fn is_occupied(&self, index: usize) -> bool {
        matches!(self.is_empty(index), Ok(false))
    }

    /// Contents are locked: `get_mut` and `take` will refuse
    fn is_sealed(&self) -> bool {
        false
    }

    /// `take(index)` would hand out an item
    fn can_take(&self, index: usize) -> bool {
        !self.is_sealed() && self.is_occupied(index)
    }
}

impl SlotStore for Container {
    fn slot_count(&self) -> usize {
        Container::slot_count(self)
    }

    fn is_empty(&self, index: usize) -> Result<bool, SlotError> {
        Container::is_empty(self, index)
    }

    fn get(&self, index: usize) -> Result<Option<&Item>, SlotError> {
        Container::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<Option<&mut Item>, SlotError> {
        Container::get_mut(self, index)
    }

    fn take(&mut self, index: usize) -> Result<Option<Item>, SlotError> {
        Container::take(self, index)
    }

    fn position(&self, index: usize) -> Result<Point3, SlotError> {
        Container::position(self, index)
    }
}
