//! Creature assembly
//!
//! Turns the composite id a station produces into a print plan: which
//! body or head forms the base and what gets attached to it.

pub mod parts;
pub mod printer;

pub use parts::{PartInfo, PartKind, Species};
pub use printer::{plan_print, AssemblyError, HeadPart, PrintPlan};
