//! Tic-tac-toe board state, turn management and win/draw detection.
//!
//! [`GameState`] owns the 3x3 board and exposes two operations,
//! [`GameState::apply_move`] and [`GameState::reset`]. Invalid moves are
//! silently ignored. A view layer reads the state back to render it, and
//! may subscribe to a [`Game`] to be told when it changes.

#![warn(missing_docs)]

mod game;
pub mod invariants;
mod line;
mod position;
pub mod rules;
mod state;
mod types;

pub use game::{Game, Observer};
pub use line::{Line, Point, WinLine};
pub use position::Position;
pub use state::{GameState, MoveOutcome, Rejection, SnapshotError};
pub use types::{Board, GameStatus, Player, Square, StartingPlayer};
