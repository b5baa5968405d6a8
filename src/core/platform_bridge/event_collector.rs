//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → key batches → TickControl
//
// Bounded polling keeps a flood of events from stalling a tick. The
// collector never blocks; pacing is the orchestrator's job.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::KeyEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    batches: Vec<Vec<KeyEvent>>,
    focus_lost: bool,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            batches: Vec::with_capacity(4),
            focus_lost: false,
        }
    }

    /// Collects pending platform events (bounded per tick).
    ///
    /// A focus loss drops the batches received before it: the core resets
    /// its key state, so only later batches still apply.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        const MAX_EVENTS_PER_FRAME: usize = 100;

        self.batches.clear();
        self.focus_lost = false;
        let mut drained = 0;

        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { events }) => {
                    self.batches.push(events);
                    drained += 1;
                }
                Ok(PlatformEvent::FocusLost) => {
                    self.batches.clear();
                    self.focus_lost = true;
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_EVENTS_PER_FRAME {
            warn!(target: "core", "Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Key batches collected this tick, in arrival order.
    pub(crate) fn batches(&self) -> &[Vec<KeyEvent>] {
        &self.batches
    }

    /// Whether the window lost focus during this tick.
    pub(crate) fn focus_lost(&self) -> bool {
        self.focus_lost
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
