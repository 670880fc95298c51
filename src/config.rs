// src/config.rs
//! # Generator Configuration
//!
//! Everything a caller can tune about a generation pass. Configurations are
//! plain serde structs so they can be kept in JSON next to a game's other
//! assets; any field left out of the file takes its default.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::generator::{Personality, DEFAULT_ROOM_WIDTH, MIN_ROOM_WIDTH, MIN_WELL_WIDTH};
use crate::map::{Grid, MAX_GRID_CELLS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of columns in the well, outer walls included.
    pub width: i32,
    /// Number of rows in the well.
    pub height: i32,
    /// Walker steps. `None` walks the full height.
    pub walk_length: Option<i32>,
    /// Walker start column. `None` starts in the middle of the well.
    pub start_column: Option<i32>,
    pub personality: Personality,
    /// Redraw the personality on every walker step.
    pub randomize_personality: bool,
    pub noise_x_frequency: f64,
    pub noise_y_frequency: f64,
    /// Seed for the per-generation random stream. `None` draws a fresh one.
    pub seed: Option<u64>,
    pub room_width: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: 20,
            height: 100,
            walk_length: None,
            start_column: None,
            personality: Personality::Random,
            randomize_personality: false,
            noise_x_frequency: 0.15,
            noise_y_frequency: 0.35,
            seed: None,
            room_width: DEFAULT_ROOM_WIDTH,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective walk length.
    pub fn walk_length(&self) -> i32 {
        self.walk_length.unwrap_or(self.height)
    }

    /// Effective walker start column, kept off the outer walls.
    pub fn start_column(&self) -> i32 {
        let max = (self.width - 2).max(1);
        self.start_column.unwrap_or(self.width / 2).clamp(1, max)
    }

    /// Rejects configurations the generator cannot honour. Runs before any
    /// state is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(ref e) = result {
            warn!("Rejected generator config: {}", e);
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WELL_WIDTH {
            return Err(ConfigError::WidthTooSmall {
                width: self.width,
                min: MIN_WELL_WIDTH,
            });
        }
        if self.height <= 0 {
            return Err(ConfigError::NonPositiveHeight(self.height));
        }
        if !Grid::fits(self.width, self.height) {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_CELLS,
            });
        }
        let length = self.walk_length();
        if length <= 0 || length > self.height {
            return Err(ConfigError::InvalidWalkLength {
                length,
                height: self.height,
            });
        }
        if self.room_width < MIN_ROOM_WIDTH {
            return Err(ConfigError::RoomWidthTooSmall {
                width: self.room_width,
                min: MIN_ROOM_WIDTH,
            });
        }
        if !self.noise_x_frequency.is_finite() || !self.noise_y_frequency.is_finite() {
            return Err(ConfigError::NonFiniteNoiseFrequency {
                x: self.noise_x_frequency,
                y: self.noise_y_frequency,
            });
        }
        Ok(())
    }
}
