//! Headless scene runner for propworks props
//!
//! Loads a scene file, drives a processing station and a transport arm
//! at a fixed tick rate, and logs what happens.

pub mod config;
pub mod logger;
pub mod runner;

pub use config::{SceneConfig, SceneError};
pub use runner::{run, Scene, Summary};
