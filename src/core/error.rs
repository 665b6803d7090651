//! Engine error types.
//!
//! Two failure kinds exist:
//! - `OutOfRange`: board access outside the grid. Always a caller bug.
//! - `InvalidConfiguration`: bad dimensions, an unusable tile pool, or an
//!   incomplete value policy. Detected before anything is mutated.
//!
//! A full board is not an error: spawning simply yields `None`.

use derive_more::{Display, Error};

/// Errors produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A row/column pair outside `[0, height) x [0, width)`.
    #[display("cell ({row}, {column}) is outside the {height}x{width} board")]
    OutOfRange {
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    },

    /// Construction parameters that cannot produce a playable game.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl EngineError {
    /// Build an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Is this an out-of-range access?
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
