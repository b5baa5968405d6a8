//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys to intents.
//
// Architecture:
//   KeyCode → HashMap → Intent
//
// Several keys may share one intent (A and ← both move left); each key
// maps to at most one intent.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{action::Intent, event::KeyCode};

//=== KeyBindings =========================================================

/// Key → intent table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Intent>,
}

impl KeyBindings {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an intent, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, intent: Intent) {
        self.bindings.insert(key, intent);
    }

    /// Removes the binding of a key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Removes every key bound to an intent.
    pub fn unbind_intent(&mut self, intent: Intent) {
        self.bindings.retain(|_, bound| *bound != intent);
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the intent bound to a key.
    pub fn intent_for(&self, key: KeyCode) -> Option<Intent> {
        self.bindings.get(&key).copied()
    }

    /// Iterates the keys bound to an intent.
    pub fn keys_for(&self, intent: Intent) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == intent)
            .map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    /// WASD + arrows for movement, Space to jump, R to restart.
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::KeyA, Intent::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, Intent::MoveLeft);
        bindings.bind(KeyCode::KeyD, Intent::MoveRight);
        bindings.bind(KeyCode::ArrowRight, Intent::MoveRight);
        bindings.bind(KeyCode::Space, Intent::Jump);
        bindings.bind(KeyCode::KeyW, Intent::ClimbUp);
        bindings.bind(KeyCode::ArrowUp, Intent::ClimbUp);
        bindings.bind(KeyCode::KeyS, Intent::ClimbDown);
        bindings.bind(KeyCode::ArrowDown, Intent::ClimbDown);
        bindings.bind(KeyCode::KeyR, Intent::Restart);

        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_intent() {
        let bindings = KeyBindings::default();
        for intent in Intent::ALL {
            assert!(
                bindings.keys_for(intent).next().is_some(),
                "{:?} has no default key",
                intent
            );
        }
    }

    #[test]
    fn unbound_key_maps_to_none() {
        let bindings = KeyBindings::empty();
        assert_eq!(bindings.intent_for(KeyCode::Space), None);
    }

    #[test]
    fn rebinding_replaces_previous() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::Space, Intent::Jump);
        bindings.bind(KeyCode::Space, Intent::ClimbUp);

        assert_eq!(bindings.intent_for(KeyCode::Space), Some(Intent::ClimbUp));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn unbind_removes_only_that_key() {
        let mut bindings = KeyBindings::default();
        bindings.unbind(KeyCode::KeyA);

        assert_eq!(bindings.intent_for(KeyCode::KeyA), None);
        assert_eq!(bindings.intent_for(KeyCode::ArrowLeft), Some(Intent::MoveLeft));
    }

    #[test]
    fn unbind_intent_removes_all_its_keys() {
        let mut bindings = KeyBindings::default();
        bindings.unbind_intent(Intent::MoveRight);

        assert_eq!(bindings.keys_for(Intent::MoveRight).count(), 0);
        assert_eq!(bindings.intent_for(KeyCode::KeyA), Some(Intent::MoveLeft));
    }
}
