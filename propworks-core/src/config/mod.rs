//! Configuration types
//!
//! Engine-agnostic settings for stations and arms. With the `serde`
//! feature they load from any serde format; missing fields take defaults.

pub mod types;

pub use types::*;
