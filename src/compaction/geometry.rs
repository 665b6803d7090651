//! Line geometry for a direction-agnostic sweep.
//!
//! A direction is reduced to two booleans (`along_row`, `increasing`). From
//! those, every row or column becomes a "line" indexed by `inner`, where
//! `inner_start` is the edge tiles slide toward.

use crate::core::Direction;

/// Sweep geometry for one direction on one board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineGeometry {
    along_row: bool,
    increasing: bool,
    outer_count: usize,
    inner_count: usize,
}

impl LineGeometry {
    /// Geometry for `direction` on a `height x width` board.
    pub fn new(direction: Direction, height: usize, width: usize) -> Self {
        let (along_row, increasing) = direction.orientation();
        let (outer_count, inner_count) = if along_row {
            (height, width)
        } else {
            (width, height)
        };
        Self {
            along_row,
            increasing,
            outer_count,
            inner_count,
        }
    }

    /// Number of lines.
    #[must_use]
    pub fn outer_count(&self) -> usize {
        self.outer_count
    }

    /// Length of each line.
    #[must_use]
    pub fn inner_count(&self) -> usize {
        self.inner_count
    }

    /// Index at the target edge; the sweep starts here.
    #[must_use]
    pub fn inner_start(&self) -> isize {
        if self.increasing {
            0
        } else {
            self.inner_count as isize - 1
        }
    }

    /// Index at the far edge; the sweep ends here.
    #[must_use]
    pub fn inner_end(&self) -> isize {
        if self.increasing {
            self.inner_count as isize - 1
        } else {
            0
        }
    }

    /// One step toward the target edge.
    #[inline]
    #[must_use]
    pub fn drop(&self, inner: isize) -> isize {
        if self.increasing {
            inner - 1
        } else {
            inner + 1
        }
    }

    /// One step away from the target edge.
    #[inline]
    #[must_use]
    pub fn reverse_drop(&self, inner: isize) -> isize {
        if self.increasing {
            inner + 1
        } else {
            inner - 1
        }
    }

    /// Is `inner` inside the line?
    #[inline]
    #[must_use]
    pub fn contains(&self, inner: isize) -> bool {
        inner >= 0 && (inner as usize) < self.inner_count
    }

    /// Map `(outer, inner)` to `(row, column)`.
    ///
    /// `inner` must satisfy `contains`.
    #[inline]
    #[must_use]
    pub fn position(&self, outer: usize, inner: isize) -> (usize, usize) {
        let inner = inner as usize;
        if self.along_row {
            (outer, inner)
        } else {
            (inner, outer)
        }
    }

    /// Inner indices in sweep order, from `inner_start` to `inner_end`.
    pub fn sweep(&self) -> impl Iterator<Item = isize> {
        let geometry = *self;
        std::iter::successors(Some(self.inner_start()), move |&inner| {
            Some(geometry.reverse_drop(inner))
        })
        .take_while(move |&inner| geometry.contains(inner))
    }
}
