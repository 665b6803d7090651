//! Board storage.
//!
//! ## Key Types
//!
//! - `Board<T>`: fixed-size grid with bounds-checked access and row-major
//!   iteration

pub mod grid;

pub use grid::Board;
