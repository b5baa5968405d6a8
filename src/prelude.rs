//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use platformer_core::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine and configuration
pub use crate::config::{GameConfig, LevelConfig, MovementConfig, WindowConfig};
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::{GameError, GameResult};

// Frame core
pub use crate::core::collision::{BoundsOverlap, FailCause, OverlapQuery, Outcome};
pub use crate::core::feedback::{Feedback, FrameView, LogPresenter, Presenter};
pub use crate::core::input::{InputLatch, Intent, KeyBindings, KeyCode, KeyEvent};
pub use crate::core::level::{LevelDescription, LevelLoader, MemoryLevelLoader, RonLevelLoader};
pub use crate::core::physics::PhysicsEngine;
pub use crate::core::session::{GameState, Session};
pub use crate::core::world::{
    Category, EnemyKind, Entity, LevelWorld, SpriteHandle, TravelBounds,
};
pub use crate::core::{Game, GameSystems};
