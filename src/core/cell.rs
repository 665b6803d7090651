//! Cell snapshots.

use serde::{Deserialize, Serialize};

/// Values that can live on a board.
///
/// Blanket-implemented; exists only to keep bounds short.
pub trait TileValue: Clone + PartialEq + std::fmt::Debug {}

impl<T: Clone + PartialEq + std::fmt::Debug> TileValue for T {}

/// An immutable `{row, column, value}` snapshot.
///
/// A `Cell` is a copy of what a board held (or will hold) at a position.
/// It never refers back into board storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell<T> {
    pub row: usize,
    pub column: usize,
    pub value: T,
}

impl<T> Cell<T> {
    /// Create a new cell snapshot.
    pub const fn new(row: usize, column: usize, value: T) -> Self {
        Self { row, column, value }
    }

    /// The `(row, column)` pair.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Same position as `other`, regardless of value?
    #[must_use]
    pub fn same_position<U>(&self, other: &Cell<U>) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@({}, {})", self.value, self.row, self.column)
    }
}
