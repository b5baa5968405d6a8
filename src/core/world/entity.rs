//=========================================================================
// Entities
//=========================================================================
//
// One record for every dynamic object: the player and all enemy
// subtypes. Subtype differences (speed, animation frames) are looked up
// from the `kind` tag instead of being encoded in a type hierarchy.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::category::SpriteHandle;
use super::Rect;
use crate::error::{GameError, GameResult};

//=== Facing ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

//=== EnemyKind ===========================================================

/// Enemy subtype tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Robot,
    Zombie,
    Headcrab,
}

impl EnemyKind {
    /// Resolves a level-file tag (case-insensitive).
    pub fn from_tag(tag: &str) -> GameResult<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "robot" => Ok(Self::Robot),
            "zombie" => Ok(Self::Zombie),
            "headcrab" => Ok(Self::Headcrab),
            _ => Err(GameError::UnknownEnemyKind { tag: tag.to_string() }),
        }
    }

    /// Patrol speed relative to the configured enemy speed.
    pub fn speed_factor(self) -> f32 {
        match self {
            Self::Robot => 1.0,
            Self::Zombie => 0.5,
            Self::Headcrab => 1.5,
        }
    }
}

//=== EntityKind ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy(EnemyKind),
}

//=== PatrolBounds ========================================================

/// Horizontal range an enemy walks back and forth in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolBounds {
    pub left: f32,
    pub right: f32,
}

//=== Animation ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    Climb,
}

/// Current animation state plus the frame within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Animation {
    pub state: AnimationState,
    pub frame: usize,
}

//=== Entity ==============================================================

/// Dynamic game object. Positions are sprite centers in world pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub handle: SpriteHandle,
    pub kind: EntityKind,

    pub x: f32,
    pub y: f32,
    pub change_x: f32,
    pub change_y: f32,

    pub width: f32,
    pub height: f32,

    pub facing: Facing,
    pub on_ladder: bool,
    pub crouching: bool,
    pub animation: Animation,

    /// Enemies only.
    pub patrol: Option<PatrolBounds>,

    /// Airborne jumps left before ground contact is needed again.
    pub jumps_remaining: u8,
}

impl Entity {
    //--- Construction -----------------------------------------------------

    /// Creates the player at rest on a spawn point.
    pub fn player(handle: SpriteHandle, spawn: (f32, f32), size: (f32, f32), max_jumps: u8) -> Self {
        Self {
            handle,
            kind: EntityKind::Player,
            x: spawn.0,
            y: spawn.1,
            change_x: 0.0,
            change_y: 0.0,
            width: size.0,
            height: size.1,
            facing: Facing::Right,
            on_ladder: false,
            crouching: false,
            animation: Animation::default(),
            patrol: None,
            jumps_remaining: max_jumps,
        }
    }

    /// Creates an enemy; one with patrol bounds starts walking right.
    pub fn enemy(
        handle: SpriteHandle,
        kind: EnemyKind,
        bounds: Rect,
        patrol: Option<PatrolBounds>,
        base_speed: f32,
    ) -> Self {
        let change_x = if patrol.is_some() {
            base_speed * kind.speed_factor()
        } else {
            0.0
        };

        Self {
            handle,
            kind: EntityKind::Enemy(kind),
            x: bounds.x,
            y: bounds.y,
            change_x,
            change_y: 0.0,
            width: bounds.width,
            height: bounds.height,
            facing: Facing::Right,
            on_ladder: false,
            crouching: false,
            animation: Animation::default(),
            patrol,
            jumps_remaining: 0,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.change_x, self.change_y)
    }

    /// Collision box; crouching halves the height and keeps the feet planted.
    pub fn hitbox(&self) -> Rect {
        if self.crouching {
            let height = self.height * 0.5;
            Rect::new(self.x, self.y - height * 0.5, self.width, height)
        } else {
            Rect::new(self.x, self.y, self.width, self.height)
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Teleports to a point and drops all velocity.
    pub fn place_at(&mut self, point: (f32, f32)) {
        self.x = point.0;
        self.y = point.1;
        self.stop();
    }

    pub fn stop(&mut self) {
        self.change_x = 0.0;
        self.change_y = 0.0;
    }

    /// Moves by the current velocity (one frame).
    pub fn advance(&mut self) {
        self.x += self.change_x;
        self.y += self.change_y;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
