//! Generation parameters, with defaults matching the classic 64x64 level.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, GenerationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub width: usize,
    pub height: usize,
    /// Spatial frequency of the noise field
    pub noise_scale: f64,
    /// Threshold in `[0, 1)`; samples above it are open cells
    pub noise_sensitivity: f64,
    /// Room box half-extent range, `min` inclusive and `max` exclusive
    pub room_half_extent: (i32, i32),
    /// Room pairs closer than this get a corridor. `None` means `(width + height) / 2`.
    pub corridor_min_distance: Option<f64>,
    /// `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Distinct rooms required before objects are placed; never fewer than six
    pub required_rooms: usize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            noise_scale: NOISE_DEFAULT_SCALE,
            noise_sensitivity: NOISE_DEFAULT_SENSITIVITY,
            room_half_extent: (ROOM_MIN_HALF_EXTENT, ROOM_MAX_HALF_EXTENT),
            corridor_min_distance: None,
            seed: None,
            required_rooms: REQUIRED_ROOMS,
        }
    }
}

impl LevelConfig {
    pub fn with_size(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Corridor distance threshold, falling back to the integer mean of the dimensions.
    pub fn corridor_threshold(&self) -> f64 {
        self.corridor_threshold_for(self.height, self.width)
    }

    /// Corridor distance threshold for a level of the given size. An explicit
    /// `corridor_min_distance` wins; otherwise the integer mean of `height` and `width`.
    pub fn corridor_threshold_for(&self, height: usize, width: usize) -> f64 {
        self.corridor_min_distance
            .unwrap_or(((width + height) / 2) as f64)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerationError::invalid(format!(
                "dimensions must be positive, got {}x{}",
                self.height, self.width
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(GenerationError::invalid(format!(
                "dimensions {}x{} exceed the limit of {}",
                self.height, self.width, MAX_DIMENSION
            )));
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(GenerationError::invalid(format!(
                "noise scale must be positive, got {}",
                self.noise_scale
            )));
        }
        if !(0.0..1.0).contains(&self.noise_sensitivity) {
            return Err(GenerationError::invalid(format!(
                "noise sensitivity must be in [0, 1), got {}",
                self.noise_sensitivity
            )));
        }
        let (min, max) = self.room_half_extent;
        if min < 0 || min >= max {
            return Err(GenerationError::invalid(format!(
                "room half-extent range [{}, {}) is empty",
                min, max
            )));
        }
        let threshold = self.corridor_threshold();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(GenerationError::invalid(format!(
                "corridor distance must be positive, got {}",
                threshold
            )));
        }
        if self.required_rooms < REQUIRED_ROOMS {
            return Err(GenerationError::invalid(format!(
                "required rooms must be at least {}, got {}",
                REQUIRED_ROOMS, self.required_rooms
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
