//=========================================================================
// Platformer Engine
//
// Main entry point: assembles the game and runs it in a window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_config()              blocks until exit
//         ├─ with_physics()
//         ├─ with_loader()
//         ├─ with_overlap()
//         ├─ with_presenter()
//         └─ with_bindings()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use winit::event_loop::EventLoop;

//=== Internal Dependencies ===============================================

use crate::config::{GameConfig, WindowConfig};
use crate::core::collision::{BoundsOverlap, OverlapQuery};
use crate::core::feedback::{LogPresenter, Presenter};
use crate::core::input::{InputSystem, KeyBindings};
use crate::core::level::{LevelLoader, RonLevelLoader};
use crate::core::physics::PhysicsEngine;
use crate::core::platform_bridge::{CoreSignal, PlatformEvent};
use crate::core::{CoreSystemsOrchestrator, Game, GameSystems};
use crate::error::{GameError, GameResult, PlatformError};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Config**: [`GameConfig::default`]
/// - **Level loader**: [`RonLevelLoader`] over `config.level.levels_dir`
/// - **Overlap query**: [`BoundsOverlap`]
/// - **Presenter**: [`LogPresenter`]
///
/// A physics backend has no default and must be supplied.
///
/// # Examples
///
/// ```no_run
/// # use platformer_core::prelude::*;
/// # struct MyPhysics;
/// # impl PhysicsEngine for MyPhysics {
/// #     fn reset(&mut self, _: &LevelWorld) {}
/// #     fn can_jump(&self, _: &LevelWorld) -> bool { true }
/// #     fn is_on_ladder(&self, _: &LevelWorld) -> bool { false }
/// #     fn integrate(&mut self, _: &mut LevelWorld, _: f32) {}
/// # }
/// EngineBuilder::new()
///     .with_tps(60.0)
///     .with_config(GameConfig::load("game.ron")?)
///     .with_physics(MyPhysics)
///     .build()?
///     .run()?;
/// # Ok::<(), GameError>(())
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    bindings: KeyBindings,
    physics: Option<Box<dyn PhysicsEngine>>,
    loader: Option<Box<dyn LevelLoader>>,
    overlap: Box<dyn OverlapQuery>,
    presenter: Box<dyn Presenter>,
}

impl EngineBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            bindings: KeyBindings::default(),
            physics: None,
            loader: None,
            overlap: Box::new(BoundsOverlap),
            presenter: Box::new(LogPresenter::new()),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// When the logic thread falls this far behind, further key batches
    /// are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_physics(mut self, physics: impl PhysicsEngine + 'static) -> Self {
        self.physics = Some(Box::new(physics));
        self
    }

    pub fn with_loader(mut self, loader: impl LevelLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    pub fn with_overlap(mut self, overlap: impl OverlapQuery + 'static) -> Self {
        self.overlap = Box::new(overlap);
        self
    }

    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    /// Builds the engine and sets up level 1.
    ///
    /// # Errors
    ///
    /// [`GameError::MissingCollaborator`] without a physics backend, or
    /// any error from loading the first level.
    pub fn build(self) -> GameResult<Engine> {
        info!(
            target: "core",
            "Building engine (TPS: {}, channel: {})",
            self.tps,
            self.channel_capacity
        );

        let physics = self
            .physics
            .ok_or(GameError::MissingCollaborator("physics engine"))?;
        let loader = match self.loader {
            Some(loader) => loader,
            None => Box::new(RonLevelLoader::new(self.config.level.levels_dir.clone())),
        };
        let window = self.config.window.clone();

        let game = Game::start(GameSystems {
            input: InputSystem::new(self.bindings),
            physics,
            overlap: self.overlap,
            loader,
            presenter: self.presenter,
            config: self.config,
        })?;

        Ok(Engine {
            orchestrator: CoreSystemsOrchestrator::new(game),
            window,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Platformer runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► Game: input, kinematics, physics, collisions, progression
///   │
///   └─► Platform (Event Loop)
///         └─► Window, keyboard
///
/// Communication: bounded channel (PlatformEvent) + loop proxy (CoreSignal)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    window: WindowConfig,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event loop and the platform → core channel
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On exit: the channel disconnects and the logic thread is joined
    ///
    /// # Errors
    ///
    /// [`GameError::Platform`] if the event loop fails, or
    /// [`GameError::CoreStopped`] if the logic thread ended on an error.
    pub fn run(self) -> GameResult<()> {
        info!(target: "core", "Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Event loop and channel ------------------------------------
        let event_loop = EventLoop::<CoreSignal>::with_user_event()
            .build()
            .map_err(PlatformError::EventLoopCreation)?;
        let proxy = event_loop.create_proxy();

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps, move |reason| {
            let _ = proxy.send_event(CoreSignal::Fatal(reason));
        });
        info!(target: "core", "Core logic thread spawned");

        //--- 3. Run the platform ------------------------------------------
        let platform = Platform::new(tx, self.window);
        let platform_result = platform.run(event_loop);
        info!(target: "platform", "Platform event loop exited");

        //--- 4. Join the logic thread -------------------------------------
        let core_result = match core_handle.join() {
            Ok(result) => result,
            Err(_) => {
                error!(target: "core", "Core thread panicked");
                Err("logic thread panicked".to_string())
            }
        };

        platform_result?;
        core_result.map_err(GameError::CoreStopped)?;

        info!(target: "core", "Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::{LevelDescription, MemoryLevelLoader};
    use crate::core::world::LevelWorld;

    //--- Test Helpers -----------------------------------------------------

    struct NullPhysics;

    impl PhysicsEngine for NullPhysics {
        fn reset(&mut self, _: &LevelWorld) {}
        fn can_jump(&self, _: &LevelWorld) -> bool {
            true
        }
        fn is_on_ladder(&self, _: &LevelWorld) -> bool {
            false
        }
        fn integrate(&mut self, _: &mut LevelWorld, _: f32) {}
    }

    fn one_level() -> MemoryLevelLoader {
        MemoryLevelLoader::new().with_level(
            1,
            LevelDescription {
                spawn: None,
                width_tiles: 10,
                background_color: None,
                layers: Vec::new(),
            },
        )
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.config, GameConfig::default());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn build_requires_physics() {
        let result = EngineBuilder::new().with_loader(one_level()).build();
        assert!(matches!(
            result,
            Err(GameError::MissingCollaborator("physics engine"))
        ));
    }

    #[test]
    fn build_fails_without_first_level() {
        let result = EngineBuilder::new()
            .with_physics(NullPhysics)
            .with_loader(MemoryLevelLoader::new())
            .build();
        assert!(matches!(result, Err(GameError::LevelNotFound { index: 1, .. })));
    }

    #[test]
    fn default_loader_reads_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig::default();
        config.level.levels_dir = dir.path().to_path_buf();

        let result = EngineBuilder::new()
            .with_config(config)
            .with_physics(NullPhysics)
            .build();

        match result {
            Err(GameError::LevelNotFound { path, .. }) => {
                assert_eq!(path, dir.path().join("world1.ron"));
            }
            Err(other) => panic!("Unexpected error: {:?}", other),
            Ok(_) => panic!("Empty directory must not build"),
        }
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_physics(NullPhysics)
            .with_loader(one_level())
            .with_presenter(LogPresenter::new())
            .with_overlap(BoundsOverlap)
            .build()
            .unwrap();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.window, WindowConfig::default());
    }
}
