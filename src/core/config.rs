//! Game configuration with documented constants
//!
//! All tuning numbers for the player and the dungeon scene are collected
//! here. Values can be overridden from a TOML file; any section or field
//! left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{DungeonError, Result};
use crate::core::types::Millis;

/// Movement and combat timing for the player actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Walking speed (world units per second)
    pub speed: f32,

    /// Speed the velocity is rescaled to while an attack is committed
    ///
    /// The attack is a lunge: direction is kept from the walking input,
    /// only the magnitude changes.
    pub attack_speed: f32,

    /// Length of the attack window (ms)
    ///
    /// Input is ignored for this long once an attack starts.
    pub attack_duration: Millis,

    /// Cooldown after the attack window, as a multiple of `attack_duration`
    ///
    /// At the default of 2.0 a new attack can start no earlier than
    /// three attack durations after the previous one began.
    pub attack_cooldown_factor: f64,

    /// Length of the hit-reaction window (ms)
    pub stagger_duration: Millis,

    /// Knockback speed applied when a stagger starts
    pub stagger_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 125.0,
            attack_speed: 500.0,
            attack_duration: 165.0,
            attack_cooldown_factor: 2.0,
            stagger_duration: 200.0,
            stagger_speed: 100.0,
        }
    }
}

impl PlayerTuning {
    /// Cooldown following the attack window (ms)
    pub fn attack_cooldown(&self) -> Millis {
        self.attack_duration * self.attack_cooldown_factor
    }

    /// Total time from attack start until another attack may start (ms)
    pub fn attack_lockout(&self) -> Millis {
        self.attack_duration + self.attack_cooldown()
    }
}

/// Dungeon scene layout and camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Map width in tiles
    pub world_tile_width: u32,

    /// Map height in tiles
    pub world_tile_height: u32,

    /// Edge length of one square tile (world units / pixels)
    pub tile_size: f32,

    /// Camera zoom; the world view is `viewport / zoom`
    pub camera_zoom: f32,

    /// Host viewport width in screen pixels
    pub viewport_width: f32,

    /// Host viewport height in screen pixels
    pub viewport_height: f32,

    /// Spawn tile for the player (column, row)
    pub spawn_tile: (i32, i32),

    /// Radius in tiles lit around the player by the bundled visibility layer
    pub light_radius: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_tile_width: 81,
            world_tile_height: 81,
            tile_size: 16.0,
            camera_zoom: 2.5,
            viewport_width: 800.0,
            viewport_height: 600.0,
            spawn_tile: (40, 40),
            light_radius: 7,
        }
    }
}

/// Top-level configuration for a game session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerTuning,
    pub scene: SceneConfig,
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let p = &self.player;

        if p.attack_duration <= 0.0 || p.stagger_duration <= 0.0 {
            return Err(DungeonError::InvalidConfig(format!(
                "durations must be positive (attack_duration = {}, stagger_duration = {})",
                p.attack_duration, p.stagger_duration
            )));
        }

        // Lockout must cover the attack window
        if p.attack_cooldown_factor < 0.0 {
            return Err(DungeonError::InvalidConfig(format!(
                "attack_cooldown_factor ({}) must not be negative",
                p.attack_cooldown_factor
            )));
        }

        if p.speed <= 0.0 || p.attack_speed <= 0.0 || p.stagger_speed < 0.0 {
            return Err(DungeonError::InvalidConfig(format!(
                "speeds must be positive (speed = {}, attack_speed = {}, stagger_speed = {})",
                p.speed, p.attack_speed, p.stagger_speed
            )));
        }

        let s = &self.scene;

        if s.world_tile_width == 0 || s.world_tile_height == 0 {
            return Err(DungeonError::InvalidConfig("world must be at least one tile".into()));
        }

        if s.tile_size <= 0.0 || s.camera_zoom <= 0.0 {
            return Err(DungeonError::InvalidConfig(format!(
                "tile_size ({}) and camera_zoom ({}) must be positive",
                s.tile_size, s.camera_zoom
            )));
        }

        let (sx, sy) = s.spawn_tile;
        if sx < 0 || sy < 0 || sx as u32 >= s.world_tile_width || sy as u32 >= s.world_tile_height {
            return Err(DungeonError::InvalidConfig(format!(
                "spawn_tile ({}, {}) lies outside the {}x{} map",
                sx, sy, s.world_tile_width, s.world_tile_height
            )));
        }

        Ok(())
    }
}
