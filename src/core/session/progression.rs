//=========================================================================
// Level Progression
//=========================================================================
//
// Level setup and the transitions driven by collision outcomes.
//
//   Continue       → nothing
//   Failed(_)      → setup of the same level
//   LevelComplete  → level + 1, score kept, setup
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error};

//=== Internal Dependencies ===============================================

use super::Session;
use crate::config::GameConfig;
use crate::core::collision::Outcome;
use crate::core::feedback::{Feedback, FeedbackQueue};
use crate::core::level::{build_world, LevelLoader};
use crate::core::physics::PhysicsEngine;
use crate::core::world::LevelWorld;
use crate::error::GameResult;

//=== setup_level() =======================================================
//
// Builds a fresh world for `session.level`. The session is only touched
// once the level has loaded, so a failed load leaves the score intact.
//
pub fn setup_level(
    session: &mut Session,
    loader: &mut dyn LevelLoader,
    physics: &mut dyn PhysicsEngine,
    config: &GameConfig,
    feedback: &mut FeedbackQueue,
) -> GameResult<LevelWorld> {
    let index = session.level;

    let world = loader
        .load_level(index)
        .and_then(|description| build_world(index, &description, config))
        .map_err(|e| {
            error!(target: "core::level", "Setup of level {} failed: {}", index, e);
            e
        })?;

    session.begin_setup();
    physics.reset(&world);
    feedback.push(Feedback::LevelStarted(index));

    debug!(target: "core::level", "Level {} set up, score {}", index, session.score);
    Ok(world)
}

//=== apply_outcome() =====================================================
//
// Returns `true` when the level has to be set up again.
//
pub fn apply_outcome(outcome: Outcome, session: &mut Session, feedback: &mut FeedbackQueue) -> bool {
    match outcome {
        Outcome::Continue => false,
        Outcome::Failed(_) => true,
        Outcome::LevelComplete => {
            session.advance();
            feedback.push(Feedback::LevelAdvanced(session.level));
            true
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
