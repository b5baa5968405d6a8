//=========================================================================
// Core Systems Orchestrator
//
// Runs the game on the logic (non-platform) thread.
//
// Responsibilities:
// - Own the running `Game` and every collaborator it drives
// - Receive key batches from the platform over a bounded channel
// - Tick the frame update at a fixed rate (TPS)
// - Report a fatal error back to the platform so the window closes
//
// Notes:
// The orchestrator runs independently from the platform layer. Nothing
// mutable is shared: key batches flow in over the channel, and the only
// thing flowing out is the fatal-error notification.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod collision;
pub mod feedback;
pub mod game;
pub mod input;
pub mod level;
pub mod physics;
pub mod session;
pub mod world;

pub(crate) mod platform_bridge;

//=== Public API ==========================================================

pub use game::{Game, GameSystems};

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{error, info};

//=== Internal Modules ====================================================

use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator {
    game: Game,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub fn new(game: Game) -> Self {
        Self { game }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread. Each tick:
    //  1. Collects key batches sent by the platform
    //  2. Releases held input on focus loss, then runs one frame update
    //  3. Sleeps to maintain fixed pacing
    //
    // The thread ends when the window closes or the channel disconnects.
    // On an update error it calls `on_fatal` with the message and returns
    // it as the thread result.
    //
    pub fn spawn_core_thread<F>(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
        on_fatal: F,
    ) -> thread::JoinHandle<Result<(), String>>
    where
        F: FnOnce(String) + Send + 'static,
    {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let mut game = self.game;
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if let TickControl::Exit = collector.collect_frame() {
                    info!(target: "core", "Core thread exiting");
                    return Ok(());
                }

                //--- Step 2: Run the frame ---------------------------------
                if collector.focus_lost() {
                    game.release_input();
                }
                if let Err(e) = game.update(collector.batches(), dt) {
                    let reason = e.to_string();
                    error!(target: "core", "Frame update failed: {}", reason);
                    on_fatal(reason.clone());
                    return Err(reason);
                }

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
