//! Python bindings for the rust-2048 engine.
//!
//! Exposes the classic numeric game so Python hosts (agents, notebooks,
//! front ends) can drive it.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game(height=4, width=4, seed=42)
//! report = game.make_move("left")
//! print(report.score_gained, game.score, game.status)
//!
//! # 2-D numpy uint64 array, 0 marks an empty cell
//! board = game.board()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::EngineError;

mod py_game;

pub use py_game::*;

pub(crate) fn engine_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", err))
}

/// rust-2048: A sliding-tile merge puzzle engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyMoveReport>()?;
    Ok(())
}
