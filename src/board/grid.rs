//! The board grid.
//!
//! `Board<T>` is a fixed `height x width` grid stored row-major in an
//! `im::Vector`, so clones share structure and cost O(1). The compaction
//! engine relies on that when it plans a move on a scratch copy and when the
//! controller simulates all four directions for game-over detection.

use im::Vector;

use crate::core::{Cell, EngineError, EngineResult, TileValue};
use crate::policy::ValuePolicy;

/// Fixed-size 2-D grid of tile values.
///
/// ## Invariants
///
/// - Dimensions never change after construction.
/// - Every cell always holds a value (empty cells hold the policy's base
///   value, never "nothing").
/// - `get`/`set` are bounds-checked and fail with `OutOfRange`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board<T: Clone> {
    height: usize,
    width: usize,
    cells: Vector<T>,
}

impl<T: TileValue> Board<T> {
    /// Create a board with every cell set to `init`.
    pub fn new(height: usize, width: usize, init: T) -> EngineResult<Self> {
        if height == 0 || width == 0 {
            return Err(EngineError::invalid_config(format!(
                "board dimensions must be positive, got {}x{}",
                height, width
            )));
        }

        let cells = std::iter::repeat(init).take(height * width).collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a board from rows.
    ///
    /// ```
    /// use rust_2048::board::Board;
    ///
    /// let board = Board::from_rows(vec![vec![2u64, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.height(), 2);
    /// assert_eq!(*board.get(1, 1).unwrap(), 4);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> EngineResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(EngineError::invalid_config("board rows must be non-empty"));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(EngineError::invalid_config(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: boards have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> EngineResult<usize> {
        if row >= self.height || column >= self.width {
            return Err(EngineError::OutOfRange {
                row,
                column,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + column)
    }

    /// Is `(row, column)` on the board?
    #[must_use]
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width
    }

    /// Unchecked read for callers that derive positions from the board's own
    /// dimensions. Panics outside the grid.
    #[inline]
    pub(crate) fn at(&self, row: usize, column: usize) -> &T {
        &self.cells[row * self.width + column]
    }

    /// Unchecked write; same contract as `at`.
    #[inline]
    pub(crate) fn put(&mut self, row: usize, column: usize, value: T) {
        self.cells.set(row * self.width + column, value);
    }

    /// Value at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> EngineResult<&T> {
        let idx = self.index(row, column)?;
        self.cells.get(idx).ok_or(EngineError::OutOfRange {
            row,
            column,
            height: self.height,
            width: self.width,
        })
    }

    /// Snapshot of the cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> EngineResult<Cell<T>> {
        self.get(row, column)
            .map(|value| Cell::new(row, column, value.clone()))
    }

    /// Overwrite the value at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> EngineResult<()> {
        let idx = self.index(row, column)?;
        self.cells.set(idx, value);
        Ok(())
    }

    /// Write a cell snapshot back into the board.
    pub fn place(&mut self, cell: &Cell<T>) -> EngineResult<()> {
        self.set(cell.row, cell.column, cell.value.clone())
    }

    /// Does the board hold `cell.value` at `cell`'s position?
    ///
    /// Out-of-range cells are simply not contained.
    #[must_use]
    pub fn contains(&self, cell: &Cell<T>) -> bool {
        self.get(cell.row, cell.column)
            .map_or(false, |value| *value == cell.value)
    }

    /// All cells in row-major order.
    ///
    /// The iterator is lazy and finite; call again to restart.
    pub fn cells(&self) -> impl Iterator<Item = Cell<T>> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, value)| Cell::new(idx / width, idx % width, value.clone()))
    }

    /// Visit every `(value, row, column)` in row-major order.
    pub fn for_each(&self, mut visitor: impl FnMut(&T, usize, usize)) {
        for (idx, value) in self.cells.iter().enumerate() {
            visitor(value, idx / self.width, idx % self.width);
        }
    }

    /// Replace every value with `mapper(cell)`.
    pub fn map_values(&mut self, mut mapper: impl FnMut(&Cell<T>) -> T) {
        let mapped: Vector<T> = self.cells().map(|cell| mapper(&cell)).collect();
        self.cells = mapped;
    }

    /// Rows as nested vectors (top row first).
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<T>> {
        let mut rows = Vec::with_capacity(self.height);
        let mut row = Vec::with_capacity(self.width);
        for value in self.cells.iter() {
            row.push(value.clone());
            if row.len() == self.width {
                rows.push(std::mem::replace(&mut row, Vec::with_capacity(self.width)));
            }
        }
        rows
    }

    /// Positions holding the policy's empty value, row-major.
    pub fn empty_positions<P: ValuePolicy<T>>(&self, policy: &P) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| policy.is_base(value))
            .map(|(idx, _)| (idx / self.width, idx % self.width))
            .collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn count_occupied<P: ValuePolicy<T>>(&self, policy: &P) -> usize {
        self.cells.iter().filter(|value| !policy.is_base(value)).count()
    }

    /// Is every cell occupied?
    #[must_use]
    pub fn is_full<P: ValuePolicy<T>>(&self, policy: &P) -> bool {
        self.cells.iter().all(|value| !policy.is_base(value))
    }
}

impl<T: TileValue + std::fmt::Display> std::fmt::Display for Board<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell_width = self
            .cells
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);

        for (row_idx, row) in self.rows().iter().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col_idx, value) in row.iter().enumerate() {
                if col_idx > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", value, width = cell_width)?;
            }
        }
        Ok(())
    }
}
