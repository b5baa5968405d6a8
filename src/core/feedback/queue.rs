//=========================================================================
// Feedback Queue
//=========================================================================
//
// Per-frame queue of presentation events.
//
// Rules push events while a frame runs; the runtime drains the queue
// into the presenter once progression has been applied.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Feedback;

//=== FeedbackQueue =======================================================

#[derive(Debug, Clone, Default)]
pub struct FeedbackQueue {
    queue: Vec<Feedback>,
}

impl FeedbackQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues an event for the end of the frame.
    pub fn push(&mut self, feedback: Feedback) {
        self.queue.push(feedback);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feedback> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all queued events in push order, leaving the queue empty.
    pub fn take(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
