//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit keyboard events into engine KeyEvents.
//
// Architecture:
//   Winit KeyEvent → InputProcessor → KeyEvent (engine type) → InputBuffer
//
// OS auto-repeat and keys without an engine KeyCode are filtered here
// (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent as WinitKeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, KeyEvent};

//=== InputProcessor ======================================================

#[derive(Debug, Default)]
pub(crate) struct InputProcessor;

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit key event (filters repeats and unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &WinitKeyEvent) -> Option<KeyEvent> {
        if key_event.repeat {
            return None;
        }
        let code = match key_event.physical_key {
            PhysicalKey::Code(code) => code,
            PhysicalKey::Unidentified(_) => return None,
        };
        self.convert(code, key_event.state)
    }

    fn convert(&self, code: WinitKeyCode, state: ElementState) -> Option<KeyEvent> {
        let key = KeyCode::from(code);
        if key == KeyCode::Unidentified {
            return None;
        }

        Some(match state {
            ElementState::Pressed => KeyEvent::Down(key),
            ElementState::Released => KeyEvent::Up(key),
        })
    }
}

//=== Type Conversions ====================================================

/// Keys outside the engine's bindable set become `Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;

        match code {
            //--- Letters (A-Z) ------------------------------------------------
            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------
            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            ShiftLeft => KeyCode::ShiftLeft,
            ControlLeft => KeyCode::ControlLeft,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
