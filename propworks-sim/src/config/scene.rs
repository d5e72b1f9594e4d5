//! Scene description types

use std::collections::BTreeMap;

use propworks_core::assembly::PartInfo;
use propworks_core::config::{ArmConfig, StationConfig};
use propworks_core::{Item, Point3};
use serde::{Deserialize, Serialize};

/// Current scene format version
pub const SCENE_VERSION: u8 = 1;

/// Default simulation rate (ticks per second)
pub const DEFAULT_TICK_HZ: u32 = 30;

/// Default simulated time (seconds)
pub const DEFAULT_DURATION_S: f32 = 10.0;

/// Everything needed to run a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Format version, must equal [`SCENE_VERSION`]
    pub version: u8,
    /// Ticks per second
    pub tick_hz: u32,
    /// Simulated time (seconds)
    pub duration_s: f32,
    /// Seed for assembly choices; entropy when absent
    pub seed: Option<u64>,
    /// Station serving as the arm's inputs
    pub station: StationConfig,
    /// Output slot anchors
    pub outputs: Vec<Point3>,
    /// Vessels placed in the output slots at start, in slot order
    pub vessels: Vec<Item>,
    pub arm: ArmConfig,
    /// Initial carriage position
    pub carriage: Point3,
    /// Part metadata by item id
    pub catalog: BTreeMap<String, PartInfo>,
    /// Commands to apply, by time
    pub timeline: Vec<TimedCommand>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            version: SCENE_VERSION,
            tick_hz: DEFAULT_TICK_HZ,
            duration_s: DEFAULT_DURATION_S,
            seed: None,
            station: StationConfig::default(),
            outputs: Vec::new(),
            vessels: Vec::new(),
            arm: ArmConfig::default(),
            carriage: Point3::ZERO,
            catalog: BTreeMap::new(),
            timeline: Vec::new(),
        }
    }
}

/// A command scheduled at an absolute time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedCommand {
    /// Seconds from scene start
    pub at_s: f32,
    pub command: Command,
}

/// Scene commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Offer an item to the station
    Place(Item),
    /// Step the arm target left
    Left,
    /// Step the arm target right
    Right,
    /// Start a pick or deposit
    Act,
    /// Text the station shows after its end text
    SetNextText(String),
    /// Replace the station readout now
    SetText(String),
}
