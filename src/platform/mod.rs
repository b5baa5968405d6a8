//=========================================================================
// Platform Subsystem
//
// Bridges Winit (window + keyboard) with the logic thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Orchestrator    │
//  │   ↓                      │    │   ↓              │
//  │  InputProcessor          │    │  Game::update    │
//  │   ↓                      │    │                  │
//  │  InputBuffer             │    └──────────────────┘
//  │   ↓                      │       ↑          │
//  │  RedrawRequested (flush) │       │          │ CoreSignal
//  │   ↓                      │       │          ↓ (proxy)
//  │  Channel ────────────────┼───────┘   user_event()
//  └──────────────────────────┘  PlatformEvent
// ```
//
// Responsibilities:
// - Create the window from the configured title and size
// - Convert Winit key events → engine KeyEvents
// - Buffer input until the frame boundary, then send it as one batch
// - Close the window when the logic thread reports a fatal error
//
// Notes:
// RedrawRequested is the frame boundary. Empty buffers are not sent.
// A full channel blocks the flush; a disconnected one only drops input,
// and the window stays closable. Losing focus releases every key.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::WindowConfig;
use crate::core::platform_bridge::{CoreSignal, PlatformEvent};
use crate::error::PlatformError;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and keyboard event aggregator.
///
/// Not `Send`: it lives on the thread that runs the event loop and talks
/// to the logic thread only through the channel and the loop proxy.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    window_config: WindowConfig,

    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,

    /// Set when the logic thread asked us to shut down.
    fatal: Option<String>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, window_config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            window_config,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// Returns the message of a fatal core signal if one ended the loop.
    pub fn run(mut self, event_loop: EventLoop<CoreSignal>) -> Result<Option<String>, PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        Ok(self.fatal)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends the buffered key events as one batch.
    ///
    /// The send blocks while the channel is full so that no release is
    /// ever lost; the core drains a bounded number of batches every tick.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();

        trace!(target: "platform::input", "Flushing {} key events", count);

        if self.event_sender.send(PlatformEvent::Inputs { events }).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping {} key events", count);
        }
    }

    /// Discards unsent keys and tells the core to release everything.
    ///
    /// Key releases that happen while unfocused never reach the window.
    fn release_keys(&mut self) {
        if let Some(dropped) = self.buffer.drain() {
            trace!(target: "platform::input", "Focus lost, discarding {} key events", dropped.len());
        }
        if self.event_sender.send(PlatformEvent::FocusLost).is_err() {
            warn!(target: "platform::input", "Channel disconnected, focus loss not delivered");
        }
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        // Blocking send: the close must not be lost to a full channel
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler<CoreSignal> for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.window_config.title.clone())
            .with_inner_size(LogicalSize::new(self.window_config.width, self.window_config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.shut_down(event_loop);
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, signal: CoreSignal) {
        match signal {
            CoreSignal::Fatal(reason) => {
                error!(target: "platform", "Core stopped: {}", reason);
                self.fatal = Some(reason);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shut_down(event_loop);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform", "Window lost focus");
                self.release_keys();
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{bounded, unbounded};

    use crate::core::input::{InputLatch, InputSystem, Intent, KeyCode, KeyEvent};

    fn platform(sender: Sender<PlatformEvent>) -> Platform {
        Platform::new(sender, WindowConfig::default())
    }

    #[test]
    fn window_is_created_lazily() {
        let (tx, _rx) = unbounded();
        assert!(platform(tx).window().is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = platform(tx);

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (tx, rx) = unbounded();
        let mut platform = platform(tx);
        platform.buffer.push(KeyEvent::Down(KeyCode::Space));

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { events }) => {
                assert_eq!(events, vec![KeyEvent::Down(KeyCode::Space)]);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = platform(tx);
        platform.buffer.push(KeyEvent::Down(KeyCode::Space));
        drop(rx);

        platform.flush_input_buffer();
        assert_eq!(platform.buffer.len(), 0);
    }

    #[test]
    fn flush_waits_for_room_instead_of_dropping() {
        let (tx, rx) = bounded(1);
        let mut platform = platform(tx);

        platform.buffer.push(KeyEvent::Down(KeyCode::KeyD));
        platform.flush_input_buffer();

        let consumer = std::thread::spawn(move || {
            let mut received = Vec::new();
            while let Ok(PlatformEvent::Inputs { events }) = rx.recv() {
                received.extend(events);
            }
            received
        });

        platform.buffer.push(KeyEvent::Up(KeyCode::KeyD));
        platform.flush_input_buffer();
        drop(platform);

        let received = consumer.join().unwrap();
        assert_eq!(
            received,
            vec![KeyEvent::Down(KeyCode::KeyD), KeyEvent::Up(KeyCode::KeyD)]
        );

        let mut system = InputSystem::default();
        let mut latch = InputLatch::new();
        system.process_frame(&mut latch, &[received]);
        assert!(!latch.is_down(Intent::MoveRight), "Release must reach the latch");
    }

    #[test]
    fn focus_loss_discards_buffer_and_notifies_core() {
        let (tx, rx) = unbounded();
        let mut platform = platform(tx);
        platform.buffer.push(KeyEvent::Down(KeyCode::KeyA));

        platform.release_keys();

        assert_eq!(rx.try_recv(), Ok(PlatformEvent::FocusLost));
        assert!(rx.try_recv().is_err());
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (tx, rx) = unbounded();
        let mut platform = platform(tx);
        platform.buffer.push(KeyEvent::Down(KeyCode::KeyA));

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }
}
