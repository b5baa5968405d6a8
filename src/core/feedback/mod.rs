//=========================================================================
// Feedback & Presentation
//
// Fire-and-forget events and the read-only frame view handed to the
// presentation backend.
//
// Responsibilities:
// - Name every gameplay event a presenter may react to (sounds, effects)
// - Define the `Presenter` seam and a logging default
//
// Notes:
// Presenters never report back. Whatever they do with an event cannot
// influence the next frame.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod queue;

pub use queue::FeedbackQueue;

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::collision::FailCause;
use crate::core::world::{AnimationTable, LevelWorld};

//=== Feedback ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Jumped,
    CoinCollected { points: u32 },
    PlayerDied(FailCause),
    LevelStarted(u32),
    LevelAdvanced(u32),
}

//=== FrameView ===========================================================

/// Snapshot of what a presenter may draw this frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub level: u32,
    pub score: u32,
    pub world: &'a LevelWorld,
}

impl FrameView<'_> {
    /// Texture name of the player's current animation frame.
    pub fn player_texture(&self) -> &'static str {
        let player = &self.world.player;
        AnimationTable::for_kind(player.kind).texture(player.animation)
    }
}

//=== Presenter ===========================================================

pub trait Presenter: Send {
    fn feedback(&mut self, feedback: &Feedback);
    fn present(&mut self, view: &FrameView<'_>);
}

//=== LogPresenter ========================================================

/// Presenter that only logs; the default when no backend is attached.
#[derive(Debug, Default)]
pub struct LogPresenter {
    last_score: Option<u32>,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for LogPresenter {
    fn feedback(&mut self, feedback: &Feedback) {
        match feedback {
            Feedback::LevelStarted(level) => info!(target: "core", "Level {} started", level),
            Feedback::LevelAdvanced(level) => info!(target: "core", "Advanced to level {}", level),
            Feedback::PlayerDied(cause) => info!(target: "core", "Player died: {:?}", cause),
            other => debug!(target: "core", "{:?}", other),
        }
    }

    fn present(&mut self, view: &FrameView<'_>) {
        if self.last_score != Some(view.score) {
            debug!(target: "core", "Level {} score {}", view.level, view.score);
            self.last_score = Some(view.score);
        }
        trace!(
            target: "core",
            "Player at ({:.1}, {:.1}) showing {}",
            view.world.player.x,
            view.world.player.y,
            view.player_texture()
        );
    }
}
