//! Scene loading errors

use std::fmt;

use propworks_core::config::ConfigError;
use propworks_core::SlotError;

/// Errors raised while loading or building a scene
#[derive(Debug)]
pub enum SceneError {
    /// Scene file could not be read
    Io(std::io::Error),
    /// Scene is not valid TOML
    Toml(toml::de::Error),
    /// Binary scene could not be encoded or decoded
    Binary(postcard::Error),
    /// Station or arm configuration rejected
    Config(ConfigError),
    /// Vessels do not fit the output slots
    Slot(SlotError),
    /// Scene was written for another format version
    VersionMismatch(u8),
    /// Tick rate or duration is not positive
    InvalidTiming,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {}", e),
            Self::Toml(e) => write!(f, "toml: {}", e),
            Self::Binary(e) => write!(f, "binary: {}", e),
            Self::Config(e) => write!(f, "config: {}", e),
            Self::Slot(e) => write!(f, "slots: {}", e),
            Self::VersionMismatch(found) => write!(
                f,
                "scene version {} (expected {})",
                found,
                super::SCENE_VERSION
            ),
            Self::InvalidTiming => write!(f, "tick rate and duration must be positive"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for SceneError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<postcard::Error> for SceneError {
    fn from(e: postcard::Error) -> Self {
        Self::Binary(e)
    }
}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SlotError> for SceneError {
    fn from(e: SlotError) -> Self {
        Self::Slot(e)
    }
}
