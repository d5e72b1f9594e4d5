//! Slot containers
//!
//! A container is a fixed number of slots, each anchored at a position in
//! the world and holding at most one item.

pub mod item;
pub mod point;
pub mod slots;

pub use item::{join_ids, Item, ItemKind, ID_SEPARATOR};
pub use point::Point3;
pub use slots::{Container, MAX_SLOTS};
