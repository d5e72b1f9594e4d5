//! Processing station
//!
//! A slot container that, once every slot is filled, runs a timed job and
//! emits the combined identifier of what it consumed.

pub mod machine;
pub mod processor;
pub mod readout;

pub use machine::{StationEvent, StationPhase};
pub use processor::{ProcessingJob, ProcessingStation};
pub use readout::Readout;
