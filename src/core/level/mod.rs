//=========================================================================
// Level Loading
//
// Turns level descriptions into playable level worlds.
//
// Responsibilities:
// - Define the `LevelLoader` seam (where descriptions come from)
// - Map layer names onto collision categories and validate them
// - Assign stable sprite handles and place the player on the spawn point
//
// Notes:
// Handle 0 is always the player. Objects receive handles in the order
// their layers and objects are listed.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod ron_loader;

pub use ron_loader::RonLevelLoader;

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::path::PathBuf;

use log::debug;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::world::{
    Category, EnemyKind, Entity, LevelWorld, PatrolBounds, Rect, Sprite, SpriteHandle,
    TravelBounds,
};
use crate::error::{GameError, GameResult};

//=== LevelLoader =========================================================

/// Source of level descriptions, indexed from 1.
pub trait LevelLoader: Send {
    /// Loads the description of a level.
    ///
    /// A missing level is `GameError::LevelNotFound`.
    fn load_level(&mut self, index: u32) -> GameResult<LevelDescription>;
}

//=== Descriptions ========================================================

/// Serialized form of one level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDescription {
    /// Falls back to the configured player start.
    #[serde(default)]
    pub spawn: Option<(f32, f32)>,
    /// Map width in tiles.
    pub width_tiles: u32,
    #[serde(default)]
    pub background_color: Option<(u8, u8, u8)>,
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

/// One placed object. Positions are centers in world pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Collectible value, 1 when absent.
    #[serde(default)]
    pub points: Option<u32>,
    /// Enemy subtype tag, "robot" when absent.
    #[serde(default)]
    pub kind: Option<String>,
    /// Enemy patrol range (left, right).
    #[serde(default)]
    pub patrol: Option<(f32, f32)>,
    /// Moving platform velocity per frame.
    #[serde(default)]
    pub velocity: Option<(f32, f32)>,
    /// Moving platform turnaround edges.
    #[serde(default)]
    pub boundaries: Option<TravelBounds>,
}

impl ObjectSpec {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

//=== build_world() =======================================================
//
// Validates every layer before anything is returned: an unknown layer or
// enemy tag fails the whole level.
//
pub fn build_world(
    index: u32,
    description: &LevelDescription,
    config: &GameConfig,
) -> GameResult<LevelWorld> {
    let level = &config.level;
    let movement = &config.movement;

    let spawn = description.spawn.unwrap_or(level.player_start);
    let map_width = description.width_tiles as f32 * level.grid_pixel_size;

    let player = Entity::player(SpriteHandle(0), spawn, level.player_size, movement.max_jumps);
    let mut world = LevelWorld::new(index, spawn, map_width, player);
    world.background_color = description.background_color;

    let mut next_handle = 1u32;

    for layer in &description.layers {
        let category = Category::from_layer(&layer.name)?;

        for object in &layer.objects {
            let handle = SpriteHandle(next_handle);
            next_handle += 1;

            match category {
                None => world.decorations.push(Sprite::new(handle, object.bounds())),

                Some(Category::Enemy) => {
                    let kind = match &object.kind {
                        Some(tag) => EnemyKind::from_tag(tag)?,
                        None => EnemyKind::Robot,
                    };
                    let patrol = object
                        .patrol
                        .map(|(left, right)| PatrolBounds { left, right });
                    world.categories.register(handle, Category::Enemy)?;
                    world.enemies.push(Entity::enemy(
                        handle,
                        kind,
                        object.bounds(),
                        patrol,
                        movement.enemy_speed,
                    ));
                }

                Some(category) => {
                    let mut sprite = Sprite::new(handle, object.bounds());
                    if let Some(points) = object.points {
                        sprite.points = points;
                    }
                    if let Some(velocity) = object.velocity {
                        sprite.velocity = velocity;
                    }
                    if let Some(travel) = object.boundaries {
                        sprite.travel = travel;
                    }
                    world.categories.insert(category, sprite)?;
                }
            }
        }
    }

    debug!(
        target: "core::level",
        "Built level {}: {} sprites, {} enemies, width {}",
        index,
        next_handle - 1,
        world.enemies.len(),
        map_width
    );

    Ok(world)
}

//=== MemoryLevelLoader ===================================================

/// Loader serving descriptions held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelLoader {
    levels: HashMap<u32, LevelDescription>,
}

impl MemoryLevelLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a level.
    pub fn with_level(mut self, index: u32, description: LevelDescription) -> Self {
        self.levels.insert(index, description);
        self
    }
}

impl LevelLoader for MemoryLevelLoader {
    fn load_level(&mut self, index: u32) -> GameResult<LevelDescription> {
        self.levels
            .get(&index)
            .cloned()
            .ok_or_else(|| GameError::LevelNotFound {
                index,
                path: PathBuf::from(format!("<memory>/world{}", index)),
            })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
