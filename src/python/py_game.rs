//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, GameConfig};
use crate::game::{GameController, MoveReport};
use crate::policy::NumericPolicy;
use crate::spawn::TilePool;

use super::engine_err;

fn parse_direction(name: &str) -> PyResult<Direction> {
    Direction::parse(name).ok_or_else(|| {
        PyErr::new::<PyValueError, _>(format!(
            "unknown direction {:?}, expected one of up, down, left, right",
            name
        ))
    })
}

/// Python wrapper for MoveReport.
#[pyclass(name = "MoveReport")]
#[derive(Clone, Debug)]
pub struct PyMoveReport(pub MoveReport<u64>);

#[pymethods]
impl PyMoveReport {
    /// Requested direction.
    #[getter]
    fn direction(&self) -> String {
        self.0.direction.to_string()
    }

    /// Did the move change the board?
    #[getter]
    fn effective(&self) -> bool {
        self.0.is_effective()
    }

    /// Number of merges.
    #[getter]
    fn merges(&self) -> usize {
        self.0.merge_count()
    }

    #[getter]
    fn score_gained(&self) -> u64 {
        self.0.score_gained
    }

    /// Spawned tile as `(row, column, value)`, if any.
    #[getter]
    fn spawned(&self) -> Option<(usize, usize, u64)> {
        self.0
            .spawned
            .as_ref()
            .map(|cell| (cell.row, cell.column, cell.value))
    }

    /// Transitions as `((row, col, value), (row, col, value), is_merge)`.
    fn transitions(&self) -> Vec<((usize, usize, u64), (usize, usize, u64), bool)> {
        self.0
            .transitions
            .iter()
            .map(|t| {
                (
                    (t.previous.row, t.previous.column, t.previous.value),
                    (t.next.row, t.next.column, t.next.value),
                    t.is_merge(),
                )
            })
            .collect()
    }

    /// "playing" or "over".
    #[getter]
    fn status(&self) -> String {
        self.0.status.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveReport(direction={}, effective={}, merges={}, score_gained={})",
            self.0.direction,
            self.0.is_effective(),
            self.0.merge_count(),
            self.0.score_gained
        )
    }
}

/// Python wrapper for the classic numeric game.
///
/// Single-threaded: instances must stay on the thread that created them.
#[pyclass(name = "Game", unsendable)]
pub struct PyGame {
    inner: GameController<u64, NumericPolicy>,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - height, width: Board dimensions (both at least 1)
    /// - seed: RNG seed for reproducible games; None draws from entropy
    /// - initial_tiles: Tiles placed before the first move
    #[new]
    #[pyo3(signature = (height = 4, width = 4, seed = None, initial_tiles = 1))]
    fn new(height: usize, width: usize, seed: Option<u64>, initial_tiles: usize) -> PyResult<Self> {
        let mut config = GameConfig::new(height, width).with_initial_tiles(initial_tiles);
        config.seed = seed;
        let inner = GameController::new(config, NumericPolicy::new(), TilePool::classic())
            .map_err(engine_err)?;
        Ok(Self { inner })
    }

    /// Slide toward "up", "down", "left" or "right".
    fn make_move(&mut self, direction: &str) -> PyResult<PyMoveReport> {
        let direction = parse_direction(direction)?;
        self.inner
            .make_move(direction)
            .map(PyMoveReport)
            .map_err(engine_err)
    }

    /// Spawn a tile. Returns `(row, column, value)` or None if the board is full.
    fn add_new_tile(&mut self) -> PyResult<Option<(usize, usize, u64)>> {
        let spawned = self.inner.add_new_tile().map_err(engine_err)?;
        Ok(spawned.map(|cell| (cell.row, cell.column, cell.value)))
    }

    fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Directions that would change the board.
    fn legal_moves(&self) -> Vec<String> {
        self.inner
            .legal_moves()
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    /// Board as a `(height, width)` uint64 array.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u64>>> {
        let board = self.inner.board();
        let mut flat = Vec::with_capacity(board.len());
        self.inner.render(|value, _, _| flat.push(*value));

        PyArray1::from_vec_bound(py, flat)
            .reshape([board.height(), board.width()])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn score(&self) -> u64 {
        self.inner.score()
    }

    /// "playing" or "over".
    #[getter]
    fn status(&self) -> String {
        self.inner.status().to_string()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.inner.move_count()
    }

    #[getter]
    fn height(&self) -> usize {
        self.inner.board().height()
    }

    #[getter]
    fn width(&self) -> usize {
        self.inner.board().width()
    }

    fn __str__(&self) -> String {
        self.inner.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game({}x{}, score={}, status={})",
            self.inner.board().height(),
            self.inner.board().width(),
            self.inner.score(),
            self.inner.status()
        )
    }
}
