//! Core engine types: errors, directions, cells, RNG, configuration.
//!
//! These are the leaf building blocks shared by the board, the compaction
//! engine, the tile generator and the game controller.

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use cell::{Cell, TileValue};
pub use config::GameConfig;
pub use direction::Direction;
pub use error::{EngineError, EngineResult};
pub use rng::GameRng;
