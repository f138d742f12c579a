//! Keyboard and mouse translation into board actions.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_core::Position;

use crate::ui::board::BoardLayout;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a cell.
    Focus(Position),
    /// Place a mark on a cell.
    Place(Position),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Moves cursor based on arrow keys (or hjkl), stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::new(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn key_action(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place(cursor)),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Position::from_index(index).map(Action::Place)
        }
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h' | 'j' | 'k' | 'l') => Some(Action::Focus(move_cursor(cursor, key))),
        _ => None,
    }
}

/// Maps a mouse event to an action: hovering focuses a cell, a left click
/// places on it. Events outside the grid are dropped.
pub fn mouse_action(layout: &BoardLayout, event: MouseEvent) -> Option<Action> {
    let pos = layout.hit(event.column, event.row)?;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Place(pos)),
        MouseEventKind::Moved => Some(Action::Focus(pos)),
        _ => None,
    }
}
