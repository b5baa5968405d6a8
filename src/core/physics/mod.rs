//=========================================================================
// Physics Seam
//
// Contact queries and integration supplied by an external backend.
//
// Responsibilities:
// - Define the `PhysicsEngine` trait the frame core drives
// - Snapshot the contact flags the kinematic rules read
//
// Notes:
// The frame core sets velocities and moves enemies and moving platforms
// along their routes. Moving the player, applying gravity and resolving
// wall/platform contacts (including riding a platform) belong to the
// backend.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod kinematics;

pub use kinematics::{update_enemies, update_platforms, update_player};

//=== Internal Dependencies ===============================================

use crate::core::world::LevelWorld;

//=== PhysicsEngine =======================================================

pub trait PhysicsEngine: Send {
    /// Rebuilds backend state for a freshly set-up level.
    fn reset(&mut self, world: &LevelWorld);

    /// Returns `true` while the player stands on something.
    fn can_jump(&self, world: &LevelWorld) -> bool;

    /// Returns `true` while the player overlaps a ladder.
    fn is_on_ladder(&self, world: &LevelWorld) -> bool;

    /// Advances the player by its velocity over `dt` seconds.
    ///
    /// Moving platforms have already taken this frame's step; the backend
    /// only resolves the player against their new bounds.
    fn integrate(&mut self, world: &mut LevelWorld, dt: f32);
}

//=== Contacts ============================================================

/// Contact flags sampled before the kinematic update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub on_ladder: bool,
    pub grounded: bool,
}

impl Contacts {
    pub fn query(physics: &dyn PhysicsEngine, world: &LevelWorld) -> Self {
        Self {
            on_ladder: physics.is_on_ladder(world),
            grounded: physics.can_jump(world),
        }
    }
}
