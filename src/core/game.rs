//=========================================================================
// Game
//
// The per-frame update of a running session.
//
// Responsibilities:
// - Own the session, level world, input latch and feedback queue
// - Drive collaborators through the fixed frame order
//
// Frame order:
//   1. latch input          5. resolve collisions
//   2. restart check        6. apply progression
//   3. kinematic update     7. present
//      (player, enemies, moving platforms)
//   4. physics integration
//
// Notes:
// Gameplay failures are outcomes, never errors. The only error path out
// of `update` is a level that cannot be set up.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::collision::{self, OverlapQuery};
use crate::core::feedback::{Feedback, FeedbackQueue, FrameView, Presenter};
use crate::core::input::{InputLatch, InputSystem, Intent, KeyBindings, KeyEvent};
use crate::core::level::LevelLoader;
use crate::core::physics::{
    update_enemies, update_platforms, update_player, Contacts, PhysicsEngine,
};
use crate::core::session::{apply_outcome, setup_level, Session};
use crate::core::world::{update_animation, LevelWorld};
use crate::error::GameResult;

//=== GameSystems =========================================================

/// Collaborators and tuning used by the frame update.
pub struct GameSystems {
    pub input: InputSystem,
    pub physics: Box<dyn PhysicsEngine>,
    pub overlap: Box<dyn OverlapQuery>,
    pub loader: Box<dyn LevelLoader>,
    pub presenter: Box<dyn Presenter>,
    pub config: GameConfig,
}

//=== Game ================================================================

pub struct Game {
    session: Session,
    world: LevelWorld,
    latch: InputLatch,
    feedback: FeedbackQueue,
    systems: GameSystems,
}

impl Game {
    //--- Construction -----------------------------------------------------

    /// Starts a run on level 1.
    pub fn start(mut systems: GameSystems) -> GameResult<Self> {
        let mut session = Session::new();
        let mut feedback = FeedbackQueue::new();

        let world = setup_level(
            &mut session,
            systems.loader.as_mut(),
            systems.physics.as_mut(),
            &systems.config,
            &mut feedback,
        )?;

        info!(target: "core", "Game started on level {}", session.level);

        let mut game = Self {
            session,
            world,
            latch: InputLatch::new(),
            feedback,
            systems,
        };
        game.present();
        Ok(game)
    }

    //--- update() ---------------------------------------------------------
    //
    // Runs one frame with the key batches received since the last one.
    //
    pub fn update(&mut self, batches: &[Vec<KeyEvent>], dt: f32) -> GameResult<()> {
        //--- Step 1: Latch input --------------------------------------------
        self.systems.input.process_frame(&mut self.latch, batches);

        //--- Step 2: Restart ------------------------------------------------
        if self.latch.is_pressed(Intent::Restart) {
            debug!(target: "core", "Restart requested");
            self.session.restart_run();
            self.reload()?;
            self.present();
            return Ok(());
        }

        //--- Step 3: Kinematic update ---------------------------------------
        let contacts = Contacts::query(self.systems.physics.as_ref(), &self.world);
        let movement = &self.systems.config.movement;
        if update_player(&mut self.world.player, &self.latch, contacts, movement) {
            self.feedback.push(Feedback::Jumped);
        }
        update_enemies(&mut self.world.enemies);
        update_platforms(&mut self.world.categories);

        //--- Step 4: Integration --------------------------------------------
        self.systems.physics.integrate(&mut self.world, dt);
        self.world.player.on_ladder = self.systems.physics.is_on_ladder(&self.world);
        update_animation(&mut self.world.player);
        for enemy in self.world.enemies.iter_mut() {
            update_animation(enemy);
        }

        //--- Step 5: Collision resolution -----------------------------------
        let outcome = collision::resolve(
            &mut self.world,
            &mut self.session,
            self.systems.overlap.as_ref(),
            self.systems.config.level.fall_threshold,
            &mut self.feedback,
        );

        //--- Step 6: Progression --------------------------------------------
        if apply_outcome(outcome, &mut self.session, &mut self.feedback) {
            self.reload()?;
        }

        //--- Step 7: Presentation -------------------------------------------
        self.present();
        Ok(())
    }

    /// Releases every held key and intent, e.g. when the window loses
    /// focus and the matching key releases will never arrive.
    pub fn release_input(&mut self) {
        self.systems.input.reset(&mut self.latch);
    }

    /// Replaces the key bindings.
    ///
    /// Held keys are released first so that no intent stays latched under
    /// a binding that no longer exists.
    pub fn rebind(&mut self, bindings: KeyBindings) {
        self.systems.input.set_bindings(bindings, &mut self.latch);
    }

    //--- Internal Helpers -------------------------------------------------

    fn reload(&mut self) -> GameResult<()> {
        self.world = setup_level(
            &mut self.session,
            self.systems.loader.as_mut(),
            self.systems.physics.as_mut(),
            &self.systems.config,
            &mut self.feedback,
        )?;
        Ok(())
    }

    fn present(&mut self) {
        let presenter = self.systems.presenter.as_mut();
        for feedback in self.feedback.take() {
            presenter.feedback(&feedback);
        }
        presenter.present(&FrameView {
            level: self.session.level,
            score: self.session.score,
            world: &self.world,
        });
    }

    //--- Query Methods ----------------------------------------------------

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn world(&self) -> &LevelWorld {
        &self.world
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    pub fn config(&self) -> &GameConfig {
        &self.systems.config
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
