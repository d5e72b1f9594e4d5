//! Transport arm
//!
//! Moves a single-item carrier between the slots of two containers and
//! runs a lower/raise sequence to pick items up or deposit them.

pub mod arm;
pub mod motion;

pub use arm::{SlotTarget, TransportArm};
pub use motion::{ActionState, ArrivalTracker, LiftProfile};
