//! Session settings
//!
//! Play-area bounds, the frame delta cap and the RNG seed. Read from a JSON
//! file by hosts that want something other than the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Bounds;

/// Seed used when none is configured (keeps headless runs reproducible)
pub const DEFAULT_SEED: u64 = 0x5EED_BA11;

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play-area width
    pub width: f32,
    /// Play-area height
    pub height: f32,
    /// Frame delta cap in seconds (bounds integration error on frame hitches)
    pub max_frame_dt: f32,
    /// Seed for wander headings and user-ball spawn placement
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Play-area bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        // Obstacles need room between the top limit and the floor margin
        if self.height <= OBSTACLE_TOP_LIMIT + OBSTACLE_BOTTOM_MARGIN {
            return Err(ConfigError::InvalidSettings(format!(
                "height {} leaves no room for obstacles",
                self.height
            )));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        Ok(())
    }

    /// Clamp a host frame delta into `[0, max_frame_dt]`
    ///
    /// Never panics; a NaN delta or an unusable cap gives 0.
    pub fn cap_frame_dt(&self, frame_dt: f32) -> f32 {
        if frame_dt.is_nan() || self.max_frame_dt.is_nan() || self.max_frame_dt <= 0.0 {
            return 0.0;
        }
        frame_dt.clamp(0.0, self.max_frame_dt)
    }
}
