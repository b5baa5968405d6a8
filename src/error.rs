//=========================================================================
// Errors
//=========================================================================
//
// Fatal error taxonomy for the platformer core.
//
// Gameplay failures (hazards, enemies, falling off the map) are NOT
// errors: they are resolved by a full level reset inside the frame loop.
// Everything in this module is a configuration or platform failure and
// propagates out of the engine unchanged.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== GameError ===========================================================

/// Fatal errors surfaced by level loading, configuration and the runtime.
#[derive(Debug, Error)]
pub enum GameError {
    /// No asset backs the requested level index.
    #[error("level {index} not found at {}", path.display())]
    LevelNotFound { index: u32, path: PathBuf },

    /// The level file exists but could not be read.
    #[error("failed to read level file {}: {source}", path.display())]
    LevelIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The level file is not valid RON for the level schema.
    #[error("failed to parse level file {}: {source}", path.display())]
    LevelParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// A layer tag that maps to no collision category.
    #[error("unknown collision category tag '{tag}'")]
    UnknownCategory { tag: String },

    /// An enemy object tagged with an unrecognized subtype.
    #[error("unknown enemy kind '{tag}'")]
    UnknownEnemyKind { tag: String },

    /// A sprite handle was inserted into a second category.
    #[error("sprite handle {0} already belongs to a category")]
    DuplicateHandle(u32),

    /// Invalid or unreadable game configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The engine was built without a required collaborator.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The logic thread ended on an error or panic.
    #[error("logic thread stopped: {0}")]
    CoreStopped(String),

    /// The windowing layer failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// the engine cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

/// Convenience alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_implement_error_trait() {
        fn assert_error<T: std::error::Error + 'static>() {}
        assert_error::<GameError>();
        assert_error::<PlatformError>();
    }

    #[test]
    fn level_not_found_names_index_and_path() {
        let err = GameError::LevelNotFound {
            index: 7,
            path: PathBuf::from("resources/world7.ron"),
        };
        let msg = err.to_string();
        assert!(msg.contains("level 7"));
        assert!(msg.contains("world7.ron"));
    }

    #[test]
    fn unknown_category_names_tag() {
        let err = GameError::UnknownCategory { tag: "Lava".into() };
        assert_eq!(err.to_string(), "unknown collision category tag 'Lava'");
    }
}
