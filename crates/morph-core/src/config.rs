//! Configuration System
//!
//! Loads tuning parameters from a TOML file. Every field defaults to the
//! standard MorphLink constants, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::components::world::{GRID_HEIGHT, GRID_WIDTH};

/// Default tuning file path
pub const DEFAULT_CONFIG_PATH: &str = "morphlink.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// World generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    /// Rows with `y < light_rows` are all light
    pub light_rows: usize,
    pub food_chance: f64,
    pub obstacle_chance: f64,
    pub pain_chance: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            light_rows: 3,
            food_chance: 0.07,
            obstacle_chance: 0.06,
            pain_chance: 0.04,
        }
    }
}

/// Action thresholds and energy/health bookkeeping applied by the tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Winning movement activation must exceed this to move
    pub move_threshold: f64,
    /// `eat`, `rest` and `scream` fire above this
    pub action_threshold: f64,
    pub move_cost: f64,
    pub eat_gain: f64,
    pub rest_gain: f64,
    pub scream_cost: f64,
    pub pain_damage: f64,
    /// Charged every tick the agent does not rest
    pub upkeep_cost: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            move_threshold: 0.5,
            action_threshold: 0.8,
            move_cost: 1.0,
            eat_gain: 10.0,
            rest_gain: 0.5,
            scream_cost: 2.0,
            pain_damage: 5.0,
            upkeep_cost: 1.0,
        }
    }
}

/// Driver loop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub ticks: u64,
    pub seed: u64,
    /// Ticks between world snapshots, 0 disables periodic snapshots
    pub snapshot_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 200,
            seed: 42,
            snapshot_interval: 50,
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a path, or use defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.world.width, 30);
        assert_eq!(config.world.height, 20);
        assert_eq!(config.world.light_rows, 3);
        assert_eq!(config.rules.move_threshold, 0.5);
        assert_eq!(config.rules.action_threshold, 0.8);
        assert_eq!(config.rules.eat_gain, 10.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = SimConfig::from_toml(
            r#"
            [world]
            width = 8
            height = 6

            [run]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.world.width, 8);
        assert_eq!(config.world.food_chance, 0.07);
        assert_eq!(config.run.seed, 7);
        assert_eq!(config.run.ticks, 200);
        assert_eq!(config.rules, RulesConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SimConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(SimConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(
            SimConfig::from_toml("[world]\nwidth = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("morphlink.toml");
        fs::write(&path, "[rules]\nscream_cost = 3.5\n").unwrap();

        let config = SimConfig::load(&path).unwrap();
        assert_eq!(config.rules.scream_cost, 3.5);

        let missing = SimConfig::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(missing, SimConfig::default());
    }
}
