//! Collaborator interfaces
//!
//! These traits define the seams between the prop logic and whatever
//! hosts it: slot storage the arm can reach into, and observers that
//! receive notifications the engine would turn into sound, animation or
//! follow-up actions, and the item lookup used by assembly.

pub mod catalog;
pub mod observer;
pub mod store;

pub use catalog::{FirstPick, ItemCatalog, Picker};
pub use observer::{ArmObserver, NullObserver, OnComplete, StationObserver};
pub use store::SlotStore;
