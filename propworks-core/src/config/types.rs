//! Configuration type definitions

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::container::{ItemKind, Point3, MAX_SLOTS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delay between a station filling up and its timer starting (seconds)
pub const DEFAULT_PREROLL_S: f32 = 1.0;

/// How long the end text stays up after a job completes (seconds)
pub const DEFAULT_DISPLAY_HOLD_S: f32 = 2.0;

/// How far the arm lowers to reach a slot
pub const DEFAULT_DROP_HEIGHT: f32 = 0.05;

/// Action timer rate; each lower/raise phase lasts `1 / rate` seconds
pub const DEFAULT_ACTION_RATE: f32 = 2.0;

/// Items a vessel can receive before the arm refuses to deposit
pub const VESSEL_CAPACITY: u8 = 4;

/// Vessel layer shown for the n-th deposit (cycled)
pub const VESSEL_LAYERS: [u8; 4] = [1, 3, 4, 2];

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Station has no slots
    NoSlots,
    /// More slots than a container can hold
    TooManySlots,
    /// Process duration is zero, negative or not finite
    InvalidDuration,
    /// A delay is negative or not finite
    InvalidDelay,
    /// Arm speed is zero, negative or not finite
    InvalidSpeed,
    /// Action rate is zero, negative or not finite
    InvalidRate,
    /// Rail direction has no horizontal component
    InvalidRail,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::NoSlots => "station needs at least one slot",
            ConfigError::TooManySlots => "too many slots",
            ConfigError::InvalidDuration => "process duration must be positive",
            ConfigError::InvalidDelay => "delays must be non-negative",
            ConfigError::InvalidSpeed => "arm speed must be positive",
            ConfigError::InvalidRate => "action rate must be positive",
            ConfigError::InvalidRail => "rail must have a horizontal direction",
        };
        f.write_str(msg)
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Processing station configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StationConfig {
    /// Slot anchors; one slot per entry
    pub slots: Vec<Point3>,
    /// Process duration once the timer starts (seconds)
    pub duration_s: f32,
    /// Start processing automatically when every slot is filled
    ///
    /// When false the station is a plain holding container.
    pub process_on_done: bool,
    /// Only items of this kind are admitted (`None` admits all)
    pub accepts: Option<ItemKind>,
    /// Readout text shown when a job completes
    pub end_text: String,
    /// Pre-roll between filling up and the timer starting (seconds)
    pub preroll_s: f32,
    /// How long the end text stays before `next_text` replaces it (seconds)
    pub display_hold_s: f32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            duration_s: 5.0,
            process_on_done: true,
            accepts: None,
            end_text: String::new(),
            preroll_s: DEFAULT_PREROLL_S,
            display_hold_s: DEFAULT_DISPLAY_HOLD_S,
        }
    }
}

impl StationConfig {
    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }
        if self.slots.len() > MAX_SLOTS {
            return Err(ConfigError::TooManySlots);
        }
        if !positive(self.duration_s) {
            return Err(ConfigError::InvalidDuration);
        }
        if !non_negative(self.preroll_s) || !non_negative(self.display_hold_s) {
            return Err(ConfigError::InvalidDelay);
        }
        Ok(())
    }
}

/// Transport arm configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmConfig {
    /// Horizontal travel speed (units per second)
    pub speed: f32,
    /// Distance the arm lowers to reach a slot
    pub drop_height: f32,
    /// Action timer increment per second
    pub action_rate: f32,
    /// Deposits a vessel accepts
    pub vessel_capacity: u8,
    /// Direction the carriage travels when moving to a higher slot index
    pub rail: Point3,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            drop_height: DEFAULT_DROP_HEIGHT,
            action_rate: DEFAULT_ACTION_RATE,
            vessel_capacity: VESSEL_CAPACITY,
            rail: Point3::RIGHT,
        }
    }
}

impl ArmConfig {
    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.speed) {
            return Err(ConfigError::InvalidSpeed);
        }
        if !positive(self.action_rate) {
            return Err(ConfigError::InvalidRate);
        }
        if !non_negative(self.drop_height) {
            return Err(ConfigError::InvalidDelay);
        }
        if self.rail.x == 0.0 && self.rail.z == 0.0 {
            return Err(ConfigError::InvalidRail);
        }
        Ok(())
    }

    /// Vessel layer for a vessel now holding `count` deposits
    pub fn layer_for(count: usize) -> u8 {
        match count {
            0 => 0,
            n => VESSEL_LAYERS[(n - 1) % VESSEL_LAYERS.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn station(slots: usize) -> StationConfig {
        StationConfig {
            slots: vec![Point3::ZERO; slots],
            ..Default::default()
        }
    }

    #[test]
    fn test_station_defaults() {
        let config = StationConfig::default();
        assert_eq!(config.preroll_s, 1.0);
        assert_eq!(config.display_hold_s, 2.0);
        assert!(config.process_on_done);
        assert!(config.accepts.is_none());
    }

    #[test]
    fn test_station_validation() {
        assert_eq!(station(0).validate(), Err(ConfigError::NoSlots));
        assert_eq!(
            station(MAX_SLOTS + 1).validate(),
            Err(ConfigError::TooManySlots)
        );
        assert_eq!(station(2).validate(), Ok(()));

        let mut config = station(2);
        config.duration_s = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDuration));

        config.duration_s = f32::NAN;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDuration));

        let mut config = station(2);
        config.preroll_s = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDelay));
    }

    #[test]
    fn test_arm_validation() {
        assert_eq!(ArmConfig::default().validate(), Ok(()));

        let config = ArmConfig {
            speed: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed));

        let config = ArmConfig {
            rail: Point3::new(0.0, 1.0, 0.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRail));
    }

    #[test]
    fn test_vessel_layers() {
        assert_eq!(ArmConfig::layer_for(1), 1);
        assert_eq!(ArmConfig::layer_for(2), 3);
        assert_eq!(ArmConfig::layer_for(3), 4);
        assert_eq!(ArmConfig::layer_for(4), 2);
        // Cycles past the table
        assert_eq!(ArmConfig::layer_for(5), 1);
    }
}
