//! Slot operation errors
//!
//! Every public command either succeeds or declines with one of these.
//! Nothing in this crate panics on a rejected request.

use core::fmt;

/// Reasons a slot operation was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotError {
    /// No empty slot left, or the destination is at capacity
    Capacity,
    /// Slot index outside the container
    Index,
    /// Item category does not match the admission filter
    WrongKind,
    /// Command issued while a sequence is still running
    InvalidState,
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::Capacity => f.write_str("no free capacity"),
            SlotError::Index => f.write_str("slot index out of bounds"),
            SlotError::WrongKind => f.write_str("item kind not accepted"),
            SlotError::InvalidState => f.write_str("busy with a running sequence"),
        }
    }
}
