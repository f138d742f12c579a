//! Application state and logic.

use std::cell::Cell;
use std::rc::Rc;

use tictactoe_core::{Game, GameState, Position, StartingPlayer};
use tracing::{debug, info};

use crate::input::Action;
use crate::ui::board::BoardLayout;

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    layout: BoardLayout,
    dirty: Rc<Cell<bool>>,
    quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(starting: StartingPlayer) -> Self {
        let mut game = Game::new(starting);
        let dirty = Rc::new(Cell::new(true));

        let flag = Rc::clone(&dirty);
        game.subscribe(Box::new(move |state: &GameState| {
            debug!(status = %state.status(), "State changed");
            flag.set(true);
        }));

        Self {
            game,
            cursor: Position::Center,
            layout: BoardLayout::default(),
            dirty,
            quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Cell under the keyboard/mouse cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Board placement from the last draw.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Records where the board was drawn so clicks can be mapped back.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Marks the screen stale (e.g. after a resize).
    pub fn request_redraw(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Handles a user action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Focus(pos) => {
                if pos != self.cursor {
                    self.cursor = pos;
                    self.request_redraw();
                }
            }
            Action::Place(pos) => {
                self.cursor = pos;
                self.request_redraw();
                // Only empty cells of a running game are clickable.
                let state = self.game.state();
                if !state.is_game_over() && state.board().is_empty(pos) {
                    let outcome = self.game.apply_move(pos.row(), pos.col());
                    debug!(?outcome, "Move applied");
                }
            }
            Action::Reset => {
                info!("Restarting game");
                self.game.reset();
            }
            Action::Quit => {
                self.quit = true;
            }
        }
    }
}
