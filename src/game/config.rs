//! Game Configuration
//!
//! Centralized tuning for the arena demo, loadable from a JSON file so
//! rotation rates and camera zoom can be adjusted without recompiling.
//! Missing fields fall back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::camera2d::DEFAULT_VIEW_HEIGHT;
use crate::controller::DEFAULT_ROTATION_SPEED;
use crate::schedule::DEFAULT_FIXED_DT;

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning parameters for the arena demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum angular rate for entity bodies, in degrees per second.
    pub rotation_speed: f32,
    /// Fixed simulation step in seconds.
    pub fixed_dt: f32,
    /// World units visible vertically through the camera.
    pub view_height: f32,
    /// Sentry placement in the XY plane.
    pub sentry_position: [f32; 2],
    /// Radius of the sentry's scan sweep in world units.
    pub sentry_scan_radius: f32,
    /// Sweep speed of the sentry's scan in degrees per second.
    pub sentry_scan_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            fixed_dt: DEFAULT_FIXED_DT,
            view_height: DEFAULT_VIEW_HEIGHT,
            sentry_position: [6.0, 4.0],
            sentry_scan_radius: 3.0,
            sentry_scan_speed: 45.0,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load from `path` when the file exists, falling back to defaults
    /// (with a logged warning) when it is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("ignoring config {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.rotation_speed, DEFAULT_ROTATION_SPEED);
        assert_eq!(config.fixed_dt, DEFAULT_FIXED_DT);
        assert_eq!(config.view_height, DEFAULT_VIEW_HEIGHT);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"rotation_speed": 90.0}"#).unwrap();
        assert_eq!(config.rotation_speed, 90.0);
        assert_eq!(config.fixed_dt, DEFAULT_FIXED_DT);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            rotation_speed: 120.0,
            sentry_position: [-2.0, 3.5],
            ..GameConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GameConfig::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
