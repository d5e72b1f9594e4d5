//! Engine-agnostic core logic for interactive props
//!
//! This crate contains everything a prop does that does not depend on a
//! game engine:
//!
//! - Fixed-size slot containers and the items they hold
//! - Processing station (timed job once every slot is filled)
//! - Transport arm (move/pick/place sequencer across two containers)
//! - Creature assembly planning from a station's combined identifier
//! - Configuration type definitions
//!
//! Everything is driven by an explicit `update(dt)` tick; there are no
//! threads, no blocking calls and no global state.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod actuator;
pub mod assembly;
pub mod config;
pub mod container;
pub mod error;
pub mod station;
pub mod traits;

pub use actuator::{ActionState, TransportArm};
pub use assembly::{plan_print, AssemblyError, PrintPlan};
pub use container::{Container, Item, ItemKind, Point3};
pub use error::SlotError;
pub use station::{ProcessingStation, StationPhase};
pub use traits::{
    ArmObserver, FirstPick, ItemCatalog, NullObserver, OnComplete, Picker, SlotStore,
    StationObserver,
};
