//! Game configuration
//!
//! Every tunable of the game lives here. The defaults reproduce the classic
//! setup; a TOML or RON file can override any subset of fields.

use rust_engine::config::{Config, ConfigError};
use rust_engine::EngineConfig;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas, timing and physics settings handed to the engine
    pub engine: EngineConfig,

    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Asset declarations
    pub assets: AssetsConfig,

    /// Life counter overlay
    pub hud: HudConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Starting lives
    pub starting_lives: u32,

    /// Starting ammunition
    pub starting_ammo: u32,

    /// Starting score
    pub starting_score: u32,

    /// Ship speed on each axis while a direction key is held (units/sec)
    pub ship_speed: f32,

    /// Distance every active asteroid falls per frame
    pub fall_step: f32,

    /// Fewest asteroids requested per spawn wave
    pub min_asteroids: u32,

    /// Most asteroids requested per spawn wave
    pub max_asteroids: u32,

    /// Time between spawn waves in milliseconds
    pub spawn_interval_ms: u64,

    /// Maximum number of asteroids in play
    pub pool_capacity: usize,

    /// Vertical position new asteroids appear at (above the canvas)
    pub spawn_y: f32,

    /// Number of asteroid sprite variants to choose from
    pub asteroid_frames: u32,

    /// How many times a freshly spawned asteroid is moved sideways to get
    /// clear of the others before it is left where it is
    pub spawn_overlap_retries: u32,

    /// Fixed RNG seed for reproducible sessions
    pub rng_seed: Option<u64>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            starting_ammo: 10,
            starting_score: 0,
            ship_speed: 500.0,
            fall_step: 5.0,
            min_asteroids: 2,
            max_asteroids: 6,
            spawn_interval_ms: 1600,
            pool_capacity: 50,
            spawn_y: -192.0,
            asteroid_frames: 3,
            spawn_overlap_retries: 8,
            rng_seed: None,
        }
    }
}

/// Asset declarations, relative to the engine's asset root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Key of the ship image
    pub ship_key: String,

    /// Path of the ship image
    pub ship_path: String,

    /// Key of the asteroid sprite sheet
    pub asteroid_key: String,

    /// Path of the asteroid sprite sheet
    pub asteroid_path: String,

    /// Width of one asteroid frame
    pub frame_width: u32,

    /// Height of one asteroid frame
    pub frame_height: u32,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            ship_key: "vessel".to_string(),
            ship_path: "vessel.png".to_string(),
            asteroid_key: "asteroids".to_string(),
            asteroid_path: "asteroid_sprite.png".to_string(),
            frame_width: 96,
            frame_height: 96,
        }
    }
}

/// Life counter overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Left edge of the text in pixels
    pub x: f32,

    /// Top edge of the text in pixels
    pub y: f32,

    /// Font size in pixels
    pub font_size: f32,

    /// Text color (RGBA, 0.0 - 1.0)
    pub color: [f32; 4],

    /// Layering depth
    pub depth: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            x: 16.0,
            y: 16.0,
            font_size: 32.0,
            color: [1.0, 1.0, 1.0, 1.0],
            depth: 0.1,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Reject settings a session cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let gameplay = &self.gameplay;
        if gameplay.min_asteroids > gameplay.max_asteroids {
            return Err(ConfigError::Invalid(format!(
                "min_asteroids ({}) exceeds max_asteroids ({})",
                gameplay.min_asteroids, gameplay.max_asteroids
            )));
        }
        if gameplay.pool_capacity == 0 {
            return Err(ConfigError::Invalid("pool_capacity must be at least 1".to_string()));
        }
        if gameplay.asteroid_frames == 0 {
            return Err(ConfigError::Invalid("asteroid_frames must be at least 1".to_string()));
        }
        if gameplay.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid("spawn_interval_ms must be positive".to_string()));
        }
        if !(gameplay.ship_speed.is_finite() && gameplay.ship_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ship_speed must be finite and non-negative, got {}",
                gameplay.ship_speed
            )));
        }
        if !gameplay.fall_step.is_finite() || !gameplay.spawn_y.is_finite() {
            return Err(ConfigError::Invalid("fall_step and spawn_y must be finite".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_setup() {
        let config = GameConfig::default();
        assert_eq!(config.gameplay.starting_lives, 3);
        assert_eq!(config.gameplay.starting_ammo, 10);
        assert_eq!(config.gameplay.pool_capacity, 50);
        assert_eq!(config.gameplay.spawn_interval_ms, 1600);
        assert_eq!((config.gameplay.min_asteroids, config.gameplay.max_asteroids), (2, 6));
        assert_eq!(config.gameplay.spawn_y, -192.0);
        assert_eq!((config.engine.width, config.engine.height), (1200, 800));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_wave_range_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.min_asteroids = 7;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.pool_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let path = std::env::temp_dir().join(format!("asteroids_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[gameplay]\nstarting_lives = 5\nrng_seed = 42\n\n[engine]\nwidth = 640\n").unwrap();

        let config = GameConfig::load_from_file(&path).unwrap();
        assert_eq!(config.gameplay.starting_lives, 5);
        assert_eq!(config.gameplay.rng_seed, Some(42));
        assert_eq!(config.gameplay.starting_ammo, 10);
        assert_eq!(config.engine.width, 640);
        assert_eq!(config.engine.height, 800);

        std::fs::remove_file(path).ok();
    }
}
