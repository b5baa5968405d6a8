//=========================================================================
// Key Events
//=========================================================================
//
// Portable representation of the keyboard events the platform layer
// forwards to the logic thread.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    KeyEvent (this module)
//         ↓
//    KeyBindings (key → Intent)
//         ↓
//    InputLatch (held / pressed / released)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// `KeyA` is the same key on QWERTY and AZERTY layouts. Only the keys a
/// platformer can reasonably bind are listed; everything else arrives as
/// `Unidentified` and is filtered by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    //--- Letters ----------------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrows -----------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special ----------------------------------------------------------
    Space,
    Enter,
    Escape,
    ShiftLeft,
    ControlLeft,

    /// Any key the input layer does not map.
    Unidentified,
}

//=== KeyEvent ============================================================

/// Low-level key transition from the platform layer.
///
/// Equality and hashing cover the transition kind and the key, which lets
/// the platform buffer drop consecutive duplicates (OS key repeat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Key pressed down (or auto-repeated by the OS).
    Down(KeyCode),

    /// Key released.
    Up(KeyCode),
}

impl KeyEvent {
    /// Returns the key carried by this event.
    pub fn key(&self) -> KeyCode {
        match *self {
            Self::Down(key) | Self::Up(key) => key,
        }
    }

    /// Returns `true` for a press.
    pub fn is_down(&self) -> bool {
        matches!(self, Self::Down(_))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
