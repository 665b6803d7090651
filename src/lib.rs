//! # rust-2048
//!
//! A generic rules engine for sliding-tile merge puzzles in the style of 2048.
//!
//! ## Design Principles
//!
//! 1. **Value-Agnostic**: Tiles can be any `Clone + PartialEq + Debug` type.
//!    What counts as empty, what merges and what a merge produces are
//!    supplied by a `ValuePolicy`.
//!
//! 2. **One Algorithm, Four Directions**: Directions map to a line geometry;
//!    a single sweep handles every orientation.
//!
//! 3. **Deterministic When Seeded**: Spawns draw from a seeded ChaCha8 RNG.
//!
//! ## Architecture
//!
//! - **Plan, Then Apply**: A move is computed on an O(1) `im` clone of the
//!   board and yields an ordered list of transitions, which is then applied
//!   to the live board.
//!
//! - **One Merge Per Tile Per Move**: A tile produced by a merge is locked for
//!   the rest of its line's sweep.
//!
//! ## Modules
//!
//! - `core`: Cells, directions, errors, RNG, configuration
//! - `board`: The rectangular grid
//! - `policy`: Value policies (numeric and function-backed)
//! - `compaction`: Line geometry and the slide/merge sweep
//! - `spawn`: Weighted tile pools and the random tile generator
//! - `game`: Game controller and change listeners

pub mod core;
pub mod board;
pub mod policy;
pub mod compaction;
pub mod spawn;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, TileValue,
    Direction,
    EngineError, EngineResult,
    GameConfig, GameRng,
};

pub use crate::board::Board;

pub use crate::policy::{FnPolicy, FnPolicyBuilder, MergeRule, NumericPolicy, ValuePolicy};

pub use crate::compaction::{CompactionEngine, LineGeometry, Pass, Transition, TransitionKind};

pub use crate::spawn::{TileGenerator, TilePool};

pub use crate::game::{GameController, GameStatus, ListenerId, MoveReport};
