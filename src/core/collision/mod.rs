//=========================================================================
// Collision Resolution
//
// Applies gameplay rules to the overlaps found after integration.
//
// Responsibilities:
// - Collect overlapping collectibles exactly once each
// - Fail the player on falling off the map, hazards or enemies
// - Detect reaching the level end
//
// Notes:
// Fail checks always run before end checks. A frame that both fails and
// reaches the end resets the player and does not advance.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod overlap;

pub use overlap::{BoundsOverlap, OverlapQuery};

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::feedback::{Feedback, FeedbackQueue};
use crate::core::session::Session;
use crate::core::world::{Category, LevelWorld};

//=== FailCause ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailCause {
    FellOff,
    Hazard,
    Enemy,
}

//=== Outcome =============================================================

/// Result of one resolution pass, consumed by progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Failed(FailCause),
    LevelComplete,
}

//=== resolve() ===========================================================

pub fn resolve(
    world: &mut LevelWorld,
    session: &mut Session,
    overlap: &dyn OverlapQuery,
    fall_threshold: f32,
    feedback: &mut FeedbackQueue,
) -> Outcome {
    //--- Collectibles -----------------------------------------------------
    let coins = overlap.overlaps(&world.player, Category::Collectible, world);
    for handle in coins {
        // A handle listed twice is gone after the first take
        if let Some(coin) = world.categories.take(Category::Collectible, handle) {
            session.add_score(coin.points);
            feedback.push(Feedback::CoinCollected { points: coin.points });
        }
    }

    //--- Fail checks ------------------------------------------------------
    if let Some(cause) = fail_cause(world, overlap, fall_threshold) {
        debug!(target: "core", "Player failed ({:?}) at ({}, {})", cause, world.player.x, world.player.y);
        world.respawn_player();
        feedback.push(Feedback::PlayerDied(cause));
        return Outcome::Failed(cause);
    }

    //--- Level end --------------------------------------------------------
    let reached_end = !overlap
        .overlaps(&world.player, Category::LevelEnd, world)
        .is_empty()
        || world.player.x >= world.map_width;

    if reached_end {
        Outcome::LevelComplete
    } else {
        Outcome::Continue
    }
}

fn fail_cause(
    world: &LevelWorld,
    overlap: &dyn OverlapQuery,
    fall_threshold: f32,
) -> Option<FailCause> {
    let player = &world.player;

    if player.y < fall_threshold {
        Some(FailCause::FellOff)
    } else if !overlap.overlaps(player, Category::Hazard, world).is_empty() {
        Some(FailCause::Hazard)
    } else if !overlap.overlaps(player, Category::Enemy, world).is_empty() {
        Some(FailCause::Enemy)
    } else {
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
