//! Random tile spawning.
//!
//! - `TilePool`: insertion-ordered values with integer weights
//! - `TileGenerator`: picks an empty cell and a pool value

pub mod generator;
pub mod pool;

pub use generator::TileGenerator;
pub use pool::TilePool;
