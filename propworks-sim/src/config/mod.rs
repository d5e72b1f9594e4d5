//! Scene files
//!
//! A scene is read as TOML first; files that are not valid TOML are
//! decoded as postcard binary.

pub mod error;
pub mod loader;
pub mod scene;

pub use error::SceneError;
pub use loader::{encode_binary, load, load_bytes, parse_scene};
pub use scene::{Command, SceneConfig, TimedCommand, SCENE_VERSION};
