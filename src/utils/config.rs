//! Tuning values, loaded from an optional TOML file.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_INITIAL_DISTANCE, CAMERA_3D_MAX_ZOOM, CAMERA_3D_MIN_ZOOM, ORBIT_PITCH_LIMIT,
    ORBIT_SENSITIVITY,
};
use crate::utils::constants::cube_constants::ROTATION_DURATION_MS;
use crate::utils::constants::game_constants::{
    DEBUG_SCRAMBLE_MOVES, INITIAL_SCRAMBLE_MOVES, SEED,
};
use crate::utils::constants::gesture_constants::{
    HIT_REGION_HALF_EXTENT, SLICE_BAND_THRESHOLD, SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE,
    ZOOM_SCALE,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Every field falls back to its default when missing from the file.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub animation_duration_ms: u64,

    pub hit_region_half_extent: f32,
    pub slice_band_threshold: f32,
    pub swipe_min_distance: f32,
    pub swipe_max_duration_ms: u64,
    pub zoom_scale: f32,

    pub orbit_sensitivity: f32,
    pub orbit_pitch_limit: f32,
    pub camera_distance: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,

    pub initial_scramble_moves: u32,
    pub debug_scramble_moves: u32,
    pub seed: u64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: ROTATION_DURATION_MS,
            hit_region_half_extent: HIT_REGION_HALF_EXTENT,
            slice_band_threshold: SLICE_BAND_THRESHOLD,
            swipe_min_distance: SWIPE_MIN_DISTANCE,
            swipe_max_duration_ms: SWIPE_MAX_DURATION_MS,
            zoom_scale: ZOOM_SCALE,
            orbit_sensitivity: ORBIT_SENSITIVITY,
            orbit_pitch_limit: ORBIT_PITCH_LIMIT,
            camera_distance: CAMERA_3D_INITIAL_DISTANCE,
            min_zoom: CAMERA_3D_MIN_ZOOM,
            max_zoom: CAMERA_3D_MAX_ZOOM,
            initial_scramble_moves: INITIAL_SCRAMBLE_MOVES,
            debug_scramble_moves: DEBUG_SCRAMBLE_MOVES,
            seed: SEED,
        }
    }
}

impl CubeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Defaults when the file is missing; a malformed file is reported and ignored.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                log::warn!("ignoring {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
