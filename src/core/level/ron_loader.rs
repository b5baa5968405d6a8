//=========================================================================
// RON Level Loader
//=========================================================================
//
// Reads `world<N>.ron` files from a levels directory.
//
// ```text
// (
//     spawn: Some((256.0, 225.0)),
//     width_tiles: 40,
//     layers: [
//         (name: "Platforms", objects: [(x: 32.0, y: 32.0, width: 64.0, height: 64.0)]),
//         (name: "Coins", objects: [(x: 320.0, y: 160.0, width: 32.0, height: 32.0)]),
//     ],
// )
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::info;

//=== Internal Dependencies ===============================================

use super::{LevelDescription, LevelLoader};
use crate::error::{GameError, GameResult};

//=== RonLevelLoader ======================================================

#[derive(Debug, Clone)]
pub struct RonLevelLoader {
    dir: PathBuf,
}

impl RonLevelLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing a level index.
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.dir.join(format!("world{}.ron", index))
    }
}

impl LevelLoader for RonLevelLoader {
    fn load_level(&mut self, index: u32) -> GameResult<LevelDescription> {
        let path = self.path_for(index);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(GameError::LevelNotFound { index, path });
            }
            Err(source) => return Err(GameError::LevelIo { path, source }),
        };

        let description = ron::from_str(&text)
            .map_err(|source| GameError::LevelParse { path: path.clone(), source })?;

        info!(target: "core::level", "Loaded level {} from {}", index, path.display());
        Ok(description)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
