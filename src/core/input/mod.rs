//=========================================================================
// Input System
//
// Turns the key events of one frame into latched intents.
//
// Responsibilities:
// - Track which physical keys are held
// - Translate key transitions into intent press/release via bindings
// - Keep an intent held while ANY of its bound keys is still down
//
// Notes:
// The system owns bindings and key state; the `InputLatch` it writes to
// lives in the game context so the frame core can read it.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod bindings;
pub mod event;
pub mod latch;

//=== Public API ==========================================================

pub use action::Intent;
pub use bindings::KeyBindings;
pub use event::{KeyCode, KeyEvent};
pub use latch::InputLatch;

//=== External Crates =====================================================

use std::collections::HashSet;

use log::{debug, trace};

//=== InputSystem =========================================================

/// Key-to-intent translation with multi-key awareness.
pub struct InputSystem {
    bindings: KeyBindings,
    keys_down: HashSet<KeyCode>,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys_down: HashSet::new(),
        }
    }

    //--- Binding Access ---------------------------------------------------

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Swaps in new bindings, releasing every held key and intent first.
    ///
    /// A key held across the swap would otherwise release whatever intent
    /// it maps to afterwards, leaving the old intent latched.
    pub fn set_bindings(&mut self, bindings: KeyBindings, latch: &mut InputLatch) {
        self.reset(latch);
        self.bindings = bindings;
    }

    //--- process_frame() --------------------------------------------------
    //
    // Starts a new latch frame, then applies every batch in arrival order.
    //
    pub fn process_frame(&mut self, latch: &mut InputLatch, batches: &[Vec<KeyEvent>]) {
        latch.begin_frame();

        for batch in batches {
            for event in batch {
                self.process_event(latch, *event);
            }
        }

        if batches.iter().any(|b| !b.is_empty()) {
            trace!(target: "core::input", "Latch after frame: {:?}", latch);
        }
    }

    /// Clears key state (both physical keys and the latch).
    pub fn reset(&mut self, latch: &mut InputLatch) {
        debug!(target: "core::input", "Resetting input state");
        self.keys_down.clear();
        latch.release_all();
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, latch: &mut InputLatch, event: KeyEvent) {
        match event {
            KeyEvent::Down(key) => {
                // OS key repeat arrives as repeated Down events
                if !self.keys_down.insert(key) {
                    return;
                }
                if let Some(intent) = self.bindings.intent_for(key) {
                    latch.press(intent);
                }
            }

            KeyEvent::Up(key) => {
                if !self.keys_down.remove(&key) {
                    return;
                }
                let Some(intent) = self.bindings.intent_for(key) else {
                    return;
                };
                let still_held = self
                    .bindings
                    .keys_for(intent)
                    .any(|other| self.keys_down.contains(&other));
                if !still_held {
                    latch.release(intent);
                }
            }
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// Returns `true` if the physical key is currently held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
