use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CYCLE_DURATION_MS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("point_count must be at least 1")]
    NoPoints,
}

/// Tunables for the scatter scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub sphere_radius: f64,
    pub point_count: usize,
    pub point_radius: f32,
    /// Multiplier from a sampled point to where its marker is drawn
    pub placement_scale: f32,
    pub cycle_duration_ms: f64,
    /// Fixed seed for reproducible scatter; entropy when unset
    pub seed: Option<u64>,
    pub fov_degrees: f32,
    pub camera_distance: f32,
    pub show_fps: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere_radius: 2.0,
            point_count: 400,
            point_radius: 0.1,
            placement_scale: 2.0,
            cycle_duration_ms: CYCLE_DURATION_MS,
            seed: None,
            fov_degrees: 75.0,
            camera_distance: 5.0,
            show_fps: true,
        }
    }
}

impl SceneConfig {
    /// Parse a JSON config file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("sphere_radius", self.sphere_radius),
            ("point_radius", self.point_radius as f64),
            ("placement_scale", self.placement_scale as f64),
            ("cycle_duration_ms", self.cycle_duration_ms),
            ("fov_degrees", self.fov_degrees as f64),
            ("camera_distance", self.camera_distance as f64),
        ];

        if let Some((field, value)) = positive
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigError::NotPositive { field, value });
        }

        if self.point_count == 0 {
            return Err(ConfigError::NoPoints);
        }

        Ok(())
    }
}
