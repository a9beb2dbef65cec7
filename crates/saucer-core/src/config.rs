//! Simulation configuration.
//!
//! Every field has a default matching the constants module, so partial JSON
//! documents are accepted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Failure to load a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub world: WorldConfig,
}

/// Shape of the world and tuning of the entities in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub ground_y: f64,
    pub wrap_margin: f64,
    pub target_cows: usize,
    pub fall_rate: f64,
    pub lift_rate: f64,
    pub beam_width: f64,
    pub saucer_start: (f64, f64),
    pub saucer_speed: f64,
    /// Maximum hover displacement per axis per tick. 0 disables hovering.
    pub hover_jitter: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world: WorldConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_y: GROUND_Y,
            wrap_margin: WRAP_MARGIN,
            target_cows: TARGET_COWS,
            fall_rate: COW_FALL_RATE,
            lift_rate: LIFT_RATE,
            beam_width: BEAM_WIDTH,
            saucer_start: (SAUCER_START_X, SAUCER_START_Y),
            saucer_speed: SAUCER_SPEED,
            hover_jitter: HOVER_JITTER,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("width", self.width),
            ("height", self.height),
            ("ground_y", self.ground_y),
            ("wrap_margin", self.wrap_margin),
            ("fall_rate", self.fall_rate),
            ("lift_rate", self.lift_rate),
            ("beam_width", self.beam_width),
            ("saucer_start.x", self.saucer_start.0),
            ("saucer_start.y", self.saucer_start.1),
            ("saucer_speed", self.saucer_speed),
            ("hover_jitter", self.hover_jitter),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite")));
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "world must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=self.height).contains(&self.ground_y) {
            return Err(ConfigError::Invalid(format!(
                "ground_y {} outside 0..={}",
                self.ground_y, self.height
            )));
        }

        let non_negative = [
            ("wrap_margin", self.wrap_margin),
            ("fall_rate", self.fall_rate),
            ("lift_rate", self.lift_rate),
            ("beam_width", self.beam_width),
            ("saucer_speed", self.saucer_speed),
            ("hover_jitter", self.hover_jitter),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{name} must not be negative, got {value}"
            )));
        }

        Ok(())
    }
}
