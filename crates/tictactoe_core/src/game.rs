//! Game owner that keeps views in step with the state.

use super::{GameState, MoveOutcome, StartingPlayer};
use tracing::{debug, instrument};

/// Something that re-renders when the game changes.
pub trait Observer {
    /// Called after every accepted move and every reset.
    fn on_change(&mut self, state: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&GameState),
{
    fn on_change(&mut self, state: &GameState) {
        self(state)
    }
}

/// Tic-tac-toe game with change notification.
///
/// Owns one [`GameState`] and forwards the two mutating operations to it,
/// notifying every subscribed [`Observer`] when the state actually changed.
#[derive(Default)]
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn Observer>>,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new(starting: StartingPlayer) -> Self {
        Self {
            state: GameState::new(starting),
            observers: Vec::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers an observer. It is not called until the next change.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Places the current player's mark at `(row, col)`.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        let outcome = self.state.apply_move(row, col);
        if outcome.is_accepted() {
            self.notify();
        }
        outcome
    }

    /// Clears the board and starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_change(&self.state);
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
