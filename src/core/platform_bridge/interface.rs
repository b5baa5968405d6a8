//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing the thread boundary in both directions.
//
//   platform → core : PlatformEvent  (bounded crossbeam channel)
//   core → platform : CoreSignal     (winit event-loop proxy)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::KeyEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlatformEvent {
    /// Key events of one display frame, in arrival order. Never empty.
    Inputs { events: Vec<KeyEvent> },

    /// The window lost keyboard focus; every held key counts as released.
    FocusLost,

    /// Window close requested.
    WindowClosed,
}

//=== CoreSignal ==========================================================

/// Notifications from the logic thread to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CoreSignal {
    /// The logic thread stopped on an error; the window must close.
    Fatal(String),
}
