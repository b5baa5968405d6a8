//=========================================================================
// Session
//
// Run-wide state that outlives individual level instances.
//
// Responsibilities:
// - Hold score, current level index and the reset-score flag
// - Apply the score/level bookkeeping of setup, advance and restart
//
// Notes:
// Setup zeroes the score only when `reset_score` is set and then sets it
// again, so only an advance (which clears the flag) carries score into
// the next setup. Dying re-sets up with the flag still set.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod progression;

pub use progression::{apply_outcome, setup_level};

//=== External Dependencies ===============================================

use log::debug;

//=== GameState ===========================================================

/// The only state a run can be in; there is no game-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing(u32),
}

//=== Session =============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    /// Current level, starting at 1.
    pub level: u32,
    pub reset_score: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            reset_score: true,
        }
    }

    pub fn state(&self) -> GameState {
        GameState::Playing(self.level)
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    //--- Progression ------------------------------------------------------

    /// Score bookkeeping performed by every level setup.
    pub fn begin_setup(&mut self) {
        if self.reset_score {
            self.score = 0;
        }
        self.reset_score = true;
    }

    /// Moves to the next level keeping the score.
    pub fn advance(&mut self) {
        self.level += 1;
        self.reset_score = false;
        debug!(target: "core", "Session advancing to level {} with score {}", self.level, self.score);
    }

    /// Goes back to level 1 with the score to be zeroed.
    pub fn restart_run(&mut self) {
        self.level = 1;
        self.reset_score = true;
        debug!(target: "core", "Session restarting");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
