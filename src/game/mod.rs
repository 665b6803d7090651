//! Game orchestration.
//!
//! - `GameController`: board ownership, moves, spawning, scoring, game over
//! - `ListenerRegistry`: ordered change listeners notified after each move

pub mod controller;
pub mod listeners;

pub use controller::{GameController, GameStatus, MoveReport};
pub use listeners::{Listener, ListenerId, ListenerRegistry};
