//! The compaction/merge sweep.
//!
//! One pass slides every tile toward the target edge and merges adjacent
//! mergeable tiles. Lines are swept starting at the target edge, so a tile
//! is settled before the tile behind it is considered for merging against
//! it.
//!
//! ## Merge Locking
//!
//! A cell produced by a merge is locked for the rest of the pass: a later
//! tile that probes into it stops behind it instead of merging again. This
//! gives the usual 2048 semantics (`[2, 2, 2, 2]` left becomes
//! `[4, 4, 0, 0]`, and `[2, 2, 4, 0]` becomes `[4, 4, 0, 0]`).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::board::Board;
use crate::core::{Cell, Direction, EngineError, EngineResult, TileValue};
use crate::policy::ValuePolicy;

use super::geometry::LineGeometry;

/// What happened to a tile during a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// The tile moved to an empty cell.
    Slide,
    /// The tile merged into the tile ahead of it.
    Merge,
}

/// A recorded `previous -> next` change.
///
/// `previous` is the tile as it was before it moved; `next` is the position
/// it ended at and the value that position holds afterwards (the merge
/// result for merges).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<T> {
    pub previous: Cell<T>,
    pub next: Cell<T>,
    pub kind: TransitionKind,
}

impl<T> Transition<T> {
    /// Did this transition merge two tiles?
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.kind == TransitionKind::Merge
    }
}

/// Result of one compaction pass.
///
/// Transitions are kept in sweep order. Applying them in that order (clear
/// each previous cell, then write each next cell) reproduces the swept
/// board exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pass<T> {
    direction: Direction,
    transitions: Vec<Transition<T>>,
    score: u64,
}

impl<T: TileValue> Pass<T> {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            transitions: Vec::new(),
            score: 0,
        }
    }

    /// Direction this pass was computed for.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Did anything move or merge?
    #[must_use]
    pub fn is_effective(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Transitions in sweep order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition<T>] {
        &self.transitions
    }

    /// Consume the pass, keeping its transitions.
    #[must_use]
    pub fn into_transitions(self) -> Vec<Transition<T>> {
        self.transitions
    }

    /// Number of merges performed.
    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.transitions.iter().filter(|t| t.is_merge()).count()
    }

    /// Points gained from merges, as scored by the policy.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Apply the transitions to `board`.
    ///
    /// Every position is validated before anything is written, so a bad pass
    /// (for instance one planned on a differently sized board) leaves
    /// `board` untouched.
    pub fn apply_to(&self, board: &mut Board<T>, base: &T) -> EngineResult<()> {
        let mut sources = FxHashSet::default();
        for transition in &self.transitions {
            for cell in [&transition.previous, &transition.next] {
                if !board.in_bounds(cell.row, cell.column) {
                    return Err(EngineError::OutOfRange {
                        row: cell.row,
                        column: cell.column,
                        height: board.height(),
                        width: board.width(),
                    });
                }
            }
            if !sources.insert(transition.previous.position()) {
                return Err(EngineError::invalid_config(format!(
                    "pass moves cell {:?} twice",
                    transition.previous.position()
                )));
            }
        }

        for transition in &self.transitions {
            board.set(transition.previous.row, transition.previous.column, base.clone())?;
            board.place(&transition.next)?;
        }
        Ok(())
    }

    fn record(&mut self, previous: Cell<T>, next: Cell<T>, kind: TransitionKind) {
        trace!(?kind, from = ?previous.position(), to = ?next.position(), "transition");
        self.transitions.push(Transition {
            previous,
            next,
            kind,
        });
    }
}

/// Direction-agnostic compaction over a board, driven by a value policy.
#[derive(Clone, Copy, Debug)]
pub struct CompactionEngine<'p, P> {
    policy: &'p P,
}

impl<'p, P> CompactionEngine<'p, P> {
    /// Create an engine that interprets values with `policy`.
    pub fn new(policy: &'p P) -> Self {
        Self { policy }
    }

    /// Compact `board` in place and report what changed.
    ///
    /// A pass with no legal slide or merge leaves the board untouched.
    pub fn sweep<T>(&self, board: &mut Board<T>, direction: Direction) -> Pass<T>
    where
        T: TileValue,
        P: ValuePolicy<T>,
    {
        let policy = self.policy;
        let geometry = LineGeometry::new(direction, board.height(), board.width());
        let base = policy.base_value();
        let mut pass = Pass::new(direction);

        // Cells produced by a merge in the current line
        let mut locked: SmallVec<[bool; 8]> = smallvec![false; geometry.inner_count()];

        for outer in 0..geometry.outer_count() {
            locked.iter_mut().for_each(|flag| *flag = false);

            for inner in geometry.sweep() {
                let (row, column) = geometry.position(outer, inner);
                if policy.is_base(board.at(row, column)) {
                    continue;
                }
                let current = board.at(row, column).clone();

                // Nearest occupied cell ahead, or one past the edge
                let mut probe = geometry.drop(inner);
                while geometry.contains(probe) {
                    let (probe_row, probe_column) = geometry.position(outer, probe);
                    if !policy.is_base(board.at(probe_row, probe_column)) {
                        break;
                    }
                    probe = geometry.drop(probe);
                }

                if geometry.contains(probe) && !locked[probe as usize] {
                    let (dest_row, dest_column) = geometry.position(outer, probe);
                    if policy.is_mergeable(board.at(dest_row, dest_column), &current) {
                        let merged = policy.merge(board.at(dest_row, dest_column), &current);
                        pass.score = pass.score.saturating_add(policy.score(&merged));

                        board.put(dest_row, dest_column, merged.clone());
                        board.put(row, column, base.clone());
                        locked[probe as usize] = true;

                        pass.record(
                            Cell::new(row, column, current),
                            Cell::new(dest_row, dest_column, merged),
                            TransitionKind::Merge,
                        );
                        continue;
                    }
                }

                let target = geometry.reverse_drop(probe);
                if target == inner {
                    continue;
                }
                let (dest_row, dest_column) = geometry.position(outer, target);
                board.put(row, column, base.clone());
                board.put(dest_row, dest_column, current.clone());

                pass.record(
                    Cell::new(row, column, current.clone()),
                    Cell::new(dest_row, dest_column, current),
                    TransitionKind::Slide,
                );
            }
        }

        pass
    }

    /// Compute the pass for `direction` without touching `board`.
    pub fn plan<T>(&self, board: &Board<T>, direction: Direction) -> Pass<T>
    where
        T: TileValue,
        P: ValuePolicy<T>,
    {
        let mut scratch = board.clone();
        self.sweep(&mut scratch, direction)
    }

    /// Would a move in `direction` change anything?
    pub fn can_move<T>(&self, board: &Board<T>, direction: Direction) -> bool
    where
        T: TileValue,
        P: ValuePolicy<T>,
    {
        self.plan(board, direction).is_effective()
    }

    /// Directions with at least one legal slide or merge.
    pub fn legal_directions<T>(&self, board: &Board<T>) -> Vec<Direction>
    where
        T: TileValue,
        P: ValuePolicy<T>,
    {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.can_move(board, direction))
            .collect()
    }
}
