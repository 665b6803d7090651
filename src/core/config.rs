//! Game configuration.
//!
//! Hosts supply a `GameConfig` once at startup, alongside a value policy and
//! a tile pool. Nothing is reconfigured during play.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Board and session parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Tiles spawned when the game is created.
    pub initial_tiles: usize,

    /// Spawn a tile after every effective move.
    pub spawn_after_move: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 4,
            width: 4,
            seed: None,
            initial_tiles: 1,
            spawn_after_move: true,
        }
    }
}

impl GameConfig {
    /// Create a config for a `height x width` board with default settings.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of tiles spawned at creation.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Disable or enable spawning after effective moves.
    #[must_use]
    pub fn with_spawn_after_move(mut self, spawn: bool) -> Self {
        self.spawn_after_move = spawn;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Check that the config describes a playable board.
    pub fn validate(&self) -> EngineResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(EngineError::invalid_config(format!(
                "board dimensions must be positive, got {}x{}",
                self.height, self.width
            )));
        }
        if self.initial_tiles > self.cell_count() {
            return Err(EngineError::invalid_config(format!(
                "{} initial tiles do not fit on a {}x{} board",
                self.initial_tiles, self.height, self.width
            )));
        }
        Ok(())
    }
}
