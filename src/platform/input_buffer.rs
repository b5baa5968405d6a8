//=========================================================================
// Input Buffer
//
// Collects the key events of one display frame until they are flushed
// to the logic thread.
//
// Responsibilities:
// - Store incoming key events in arrival order
// - Drop consecutive duplicates (a key reported down twice in a row)
// - Hand the whole batch over via `drain()`
//
// Notes:
// Non-consecutive duplicates are kept: Down(A), Up(A), Down(A) is a
// real tap followed by a press and must reach the latch intact.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::KeyEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    events: Vec<KeyEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    pub(crate) fn push(&mut self, event: KeyEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns the frame's events and empties the buffer, or None if there
    // is nothing to send.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<KeyEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut buffer = InputBuffer::new();
        buffer.push(KeyEvent::Down(KeyCode::KeyA));
        buffer.push(KeyEvent::Down(KeyCode::KeyA));

        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn tap_sequence_is_preserved() {
        let mut buffer = InputBuffer::new();
        buffer.push(KeyEvent::Down(KeyCode::Space));
        buffer.push(KeyEvent::Up(KeyCode::Space));
        buffer.push(KeyEvent::Down(KeyCode::Space));

        assert_eq!(
            buffer.drain(),
            Some(vec![
                KeyEvent::Down(KeyCode::Space),
                KeyEvent::Up(KeyCode::Space),
                KeyEvent::Down(KeyCode::Space),
            ])
        );
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(KeyEvent::Down(KeyCode::KeyD));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), None);
    }
}
