//! Random tile generation.

use tracing::debug;

use crate::board::Board;
use crate::core::{Cell, EngineError, EngineResult, GameRng, TileValue};
use crate::policy::ValuePolicy;

use super::pool::TilePool;

/// Proposes a new tile: a uniformly random empty cell holding a
/// weighted-random value from the pool.
///
/// The generator never writes to the board; applying the proposal is the
/// caller's job.
#[derive(Clone, Debug)]
pub struct TileGenerator<T> {
    pool: TilePool<T>,
    rng: GameRng,
}

impl<T: TileValue> TileGenerator<T> {
    /// Create a generator, rejecting pools that could never produce a value.
    pub fn new(pool: TilePool<T>, rng: GameRng) -> EngineResult<Self> {
        pool.validate()?;
        Ok(Self { pool, rng })
    }

    /// Create a generator with a fixed seed.
    pub fn seeded(pool: TilePool<T>, seed: u64) -> EngineResult<Self> {
        Self::new(pool, GameRng::new(seed))
    }

    /// The configured pool.
    #[must_use]
    pub fn pool(&self) -> &TilePool<T> {
        &self.pool
    }

    /// Propose a tile for `board`.
    ///
    /// Returns `Ok(None)` when the board has no empty cell; a full board is
    /// an expected outcome, not an error.
    pub fn spawn<P: ValuePolicy<T>>(
        &mut self,
        board: &Board<T>,
        policy: &P,
    ) -> EngineResult<Option<Cell<T>>> {
        let empties = board.empty_positions(policy);
        if empties.is_empty() {
            debug!("no empty cell to spawn into");
            return Ok(None);
        }
        self.pool.validate()?;

        let (row, column) = empties[self.rng.gen_index(empties.len())];
        let total = self.pool.total_weight();
        let roll = self.rng.gen_roll(total);
        let value = self.pool.pick(roll).cloned().ok_or_else(|| {
            EngineError::invalid_config(format!("roll {} fell outside the pool's {} weight", roll, total))
        })?;

        debug!(row, column, value = ?value, "spawn proposed");
        Ok(Some(Cell::new(row, column, value)))
    }
}
