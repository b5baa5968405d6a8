//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunable constants for the window, movement rules and level layout.
//
// Every section has serde defaults, so a RON file only needs to list the
// values it overrides:
//
// ```text
// (
//     movement: (jump_speed: 18.0, max_jumps: 3),
//     level: (levels_dir: "assets/levels"),
// )
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::error::{GameError, GameResult};

//=== GameConfig ==========================================================

/// Complete configuration consumed by the engine and the frame core.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub movement: MovementConfig,
    pub level: LevelConfig,
}

impl GameConfig {
    /// Parses a configuration from RON text.
    pub fn from_ron_str(text: &str) -> GameResult<Self> {
        ron::from_str(text).map_err(|e| GameError::Config(e.to_string()))
    }

    /// Loads a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;

        let config = Self::from_ron_str(&text)?;
        info!(target: "core", "Loaded configuration from {}", path.display());
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            movement: MovementConfig::default(),
            level: LevelConfig::default(),
        }
    }
}

//=== WindowConfig ========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Platformer".to_string(),
            width: 1000,
            height: 650,
        }
    }
}

//=== MovementConfig ======================================================

/// Speeds are in pixels per frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub move_speed: f32,
    pub climb_speed: f32,
    pub jump_speed: f32,
    /// Jumps allowed before touching ground again (1 = no double jump).
    pub max_jumps: u8,
    /// Handed to physics backends; the frame core never applies gravity.
    pub gravity: f32,
    pub enemy_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            climb_speed: 10.0,
            jump_speed: 15.0,
            max_jumps: 2,
            gravity: 0.9,
            enemy_speed: 2.0,
        }
    }
}

//=== LevelConfig =========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Directory holding `world<N>.ron` files.
    pub levels_dir: PathBuf,
    /// Width of one map tile in pixels after scaling.
    pub grid_pixel_size: f32,
    /// Spawn point used when a level file omits one.
    pub player_start: (f32, f32),
    /// Player hitbox (width, height).
    pub player_size: (f32, f32),
    /// Falling below this y counts as a failure.
    pub fall_threshold: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            levels_dir: PathBuf::from("resources"),
            grid_pixel_size: 64.0,
            player_start: (256.0, 225.0),
            player_size: (32.0, 64.0),
            fall_threshold: -100.0,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
