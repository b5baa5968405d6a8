//=========================================================================
// Platformer Core: Library Root
//
// Per-frame gameplay core of a 2D side-scrolling platformer, wired to a
// windowed runtime.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder` / `Engine`)
// - Expose the frame core (`core`) for embedding without a window
// - Keep the Winit integration (`platform`) private
//
// Typical usage:
// ```no_run
// use platformer_core::prelude::*;
//
// fn main() -> Result<(), GameError> {
//     EngineBuilder::new()
//         .with_physics(MyPhysics::default())
//         .build()?
//         .run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the frame core: input latch, kinematics, collision rules,
// progression and the collaborator traits (physics, overlap, levels,
// presentation).
//
pub mod config;
pub mod core;
pub mod error;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and keyboard; `engine` wires it to the
// logic thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use error::{GameError, GameResult, PlatformError};
