//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the windowing layer and the logic thread.
//
// Components:
// - `interface`: messages in both directions
// - `event_collector`: core-side draining of platform events per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreSignal, PlatformEvent};
