//! Directional compaction ("update loop").
//!
//! Games call `CompactionEngine::plan` or `sweep` with a `Direction`; the
//! engine reduces the direction to a `LineGeometry` and runs a single
//! direction-agnostic sweep over every line.
//!
//! ## Key Types
//!
//! - `LineGeometry`: sweep bounds, drop steps and index mapping per direction
//! - `CompactionEngine`: the slide/merge sweep
//! - `Pass`: ordered transitions, score and effectiveness of one sweep
//! - `Transition`: one `previous -> next` cell change

pub mod engine;
pub mod geometry;

pub use engine::{CompactionEngine, Pass, Transition, TransitionKind};
pub use geometry::LineGeometry;
