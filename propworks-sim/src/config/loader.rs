//! Scene loading
//!
//! Reads a scene file, trying TOML first and falling back to postcard
//! binary, then checks version and timing.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::error::SceneError;
use super::scene::{SceneConfig, SCENE_VERSION};

/// Load a scene from `path`
pub fn load(path: &Path) -> Result<SceneConfig, SceneError> {
    info!("Loading scene from {}", path.display());
    let bytes = fs::read(path)?;
    debug!("Read {} bytes", bytes.len());
    load_bytes(&bytes)
}

/// Load a scene from raw file contents
///
/// When neither format decodes, the TOML error is reported for UTF-8
/// input and the binary error otherwise.
pub fn load_bytes(bytes: &[u8]) -> Result<SceneConfig, SceneError> {
    let scene = match std::str::from_utf8(bytes) {
        Ok(text) => match parse_scene(text) {
            Ok(scene) => {
                info!("Loaded scene from TOML");
                scene
            }
            Err(toml_err) => {
                warn!("TOML parse failed, trying binary: {}", toml_err);
                decode_binary(bytes).map_err(|_| toml_err)?
            }
        },
        Err(_) => {
            debug!("Scene is not UTF-8, trying binary");
            decode_binary(bytes)?
        }
    };

    check(&scene)?;
    log_scene_summary(&scene);
    Ok(scene)
}

/// Parse a TOML scene
pub fn parse_scene(text: &str) -> Result<SceneConfig, SceneError> {
    Ok(toml::from_str(text)?)
}

/// Encode a scene in the binary fallback format
pub fn encode_binary(scene: &SceneConfig) -> Result<Vec<u8>, SceneError> {
    Ok(postcard::to_allocvec(scene)?)
}

fn decode_binary(bytes: &[u8]) -> Result<SceneConfig, SceneError> {
    let scene = postcard::from_bytes(bytes)?;
    info!("Loaded scene from binary");
    Ok(scene)
}

fn check(scene: &SceneConfig) -> Result<(), SceneError> {
    if scene.version != SCENE_VERSION {
        warn!(
            "Scene version mismatch: found {}, expected {}",
            scene.version, SCENE_VERSION
        );
        return Err(SceneError::VersionMismatch(scene.version));
    }
    if scene.tick_hz == 0 || !(scene.duration_s.is_finite() && scene.duration_s > 0.0) {
        return Err(SceneError::InvalidTiming);
    }
    if scene
        .timeline
        .iter()
        .any(|c| !(c.at_s.is_finite() && c.at_s >= 0.0))
    {
        return Err(SceneError::InvalidTiming);
    }
    scene.station.validate()?;
    scene.arm.validate()?;
    Ok(())
}

fn log_scene_summary(scene: &SceneConfig) {
    debug!("  {} station slots", scene.station.slots.len());
    debug!("  {} output slots, {} vessels", scene.outputs.len(), scene.vessels.len());
    debug!("  {} catalog entries", scene.catalog.len());
    debug!("  {} timeline commands", scene.timeline.len());
}
