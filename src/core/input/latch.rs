//=========================================================================
// Input Latch
//=========================================================================
//
// Persistent intent state with per-frame deltas.
//
// Architecture:
//   press()/release() → HashSet (intents held) → query
//
// Frame lifecycle: begin_frame() → press()/release() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::action::Intent;

//=== InputLatch ==========================================================

/// Tracks which intents are held and which changed this frame.
///
/// `press` and `release` are idempotent: pressing a held intent or
/// releasing an idle one changes nothing and records no edge.
#[derive(Clone, Default)]
pub struct InputLatch {
    //--- Persistent State (survives frame boundary) ----------------------
    held: HashSet<Intent>,

    //--- Frame Deltas (reset each frame via begin_frame()) --------------
    pressed_this_frame: HashSet<Intent>,
    released_this_frame: HashSet<Intent>,
}

impl InputLatch {
    /// Creates a latch with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas; held intents persist.
    pub fn begin_frame(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }

    /// Marks an intent as held. Returns `true` if it was newly pressed.
    pub fn press(&mut self, intent: Intent) -> bool {
        let newly = self.held.insert(intent);
        if newly {
            self.pressed_this_frame.insert(intent);
        }
        newly
    }

    /// Marks an intent as released. Returns `true` if it was held.
    pub fn release(&mut self, intent: Intent) -> bool {
        let was_held = self.held.remove(&intent);
        if was_held {
            self.released_this_frame.insert(intent);
        }
        was_held
    }

    /// Releases everything (used when a level is rebuilt).
    pub fn release_all(&mut self) {
        for intent in self.held.drain() {
            self.released_this_frame.insert(intent);
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if the intent transitioned UP → DOWN this frame.
    ///
    /// Use for discrete actions like jumping or restarting.
    pub fn is_pressed(&self, intent: Intent) -> bool {
        self.pressed_this_frame.contains(&intent)
    }

    /// Returns `true` while the intent is held.
    pub fn is_down(&self, intent: Intent) -> bool {
        self.held.contains(&intent)
    }

    /// Returns `true` if the intent transitioned DOWN → UP this frame.
    pub fn is_released(&self, intent: Intent) -> bool {
        self.released_this_frame.contains(&intent)
    }

    /// Net horizontal direction: -1, 0 or +1.
    pub fn horizontal_axis(&self) -> f32 {
        axis(self.is_down(Intent::MoveLeft), self.is_down(Intent::MoveRight))
    }

    /// Net ladder direction: -1 (down), 0 or +1 (up).
    pub fn vertical_axis(&self) -> f32 {
        axis(self.is_down(Intent::ClimbDown), self.is_down(Intent::ClimbUp))
    }

    /// Iterates all held intents.
    pub fn held(&self) -> impl Iterator<Item = &Intent> {
        self.held.iter()
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

//=== Debug Trait =========================================================

impl fmt::Debug for InputLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut held: Vec<_> = self.held.iter().collect();
        held.sort();

        f.debug_struct("InputLatch")
            .field("held", &held)
            .field("pressed", &self.pressed_this_frame.len())
            .field("released", &self.released_this_frame.len())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that pressed only reports on the transition frame.
    #[test]
    fn pressed_only_on_transition_frame() {
        let mut latch = InputLatch::new();

        // Frame 1: press
        latch.begin_frame();
        latch.press(Intent::Jump);
        assert!(latch.is_pressed(Intent::Jump));
        assert!(latch.is_down(Intent::Jump));

        // Frame 2: still held
        latch.begin_frame();
        assert!(!latch.is_pressed(Intent::Jump));
        assert!(latch.is_down(Intent::Jump));

        // Frame 3: released
        latch.begin_frame();
        latch.release(Intent::Jump);
        assert!(!latch.is_down(Intent::Jump));
        assert!(latch.is_released(Intent::Jump));
    }

    #[test]
    fn balanced_press_release_ends_released() {
        let mut latch = InputLatch::new();

        for frame in 0..5 {
            latch.begin_frame();
            for _ in 0..frame + 1 {
                latch.press(Intent::MoveLeft);
                latch.release(Intent::MoveLeft);
            }
            assert!(!latch.is_down(Intent::MoveLeft));
        }
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut latch = InputLatch::new();

        assert!(latch.press(Intent::MoveRight));
        latch.begin_frame();
        assert!(!latch.press(Intent::MoveRight), "Repeat must not re-trigger");
        assert!(!latch.is_pressed(Intent::MoveRight));
        assert!(latch.is_down(Intent::MoveRight));
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut latch = InputLatch::new();

        assert!(!latch.release(Intent::ClimbUp));
        assert!(!latch.is_released(Intent::ClimbUp));
    }

    #[test]
    fn fast_tap_registers_both_edges() {
        let mut latch = InputLatch::new();

        latch.press(Intent::Jump);
        latch.release(Intent::Jump);

        assert!(latch.is_pressed(Intent::Jump));
        assert!(latch.is_released(Intent::Jump));
        assert!(!latch.is_down(Intent::Jump));
    }

    #[test]
    fn axes_cancel_when_both_held() {
        let mut latch = InputLatch::new();

        latch.press(Intent::MoveLeft);
        assert_eq!(latch.horizontal_axis(), -1.0);

        latch.press(Intent::MoveRight);
        assert_eq!(latch.horizontal_axis(), 0.0);

        latch.press(Intent::ClimbUp);
        assert_eq!(latch.vertical_axis(), 1.0);
        latch.press(Intent::ClimbDown);
        assert_eq!(latch.vertical_axis(), 0.0);
        assert!(latch.is_down(Intent::ClimbUp));
    }

    #[test]
    fn release_all_clears_held() {
        let mut latch = InputLatch::new();
        latch.press(Intent::MoveLeft);
        latch.press(Intent::ClimbDown);

        latch.release_all();

        assert_eq!(latch.held().count(), 0);
        assert!(latch.is_released(Intent::MoveLeft));
    }
}
