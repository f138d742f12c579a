//! Winner consistency invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: a winner is recorded exactly when a line is complete.
///
/// - `winner` and `win_line` are set together and name the same player
/// - the win line's cells really hold that player's marks
/// - a recorded winner implies the game is over
/// - the game is over exactly when it has a winner or a full board
pub struct WinnerConsistentInvariant;

impl Invariant<GameState> for WinnerConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();

        let recorded = match (state.winner(), state.win_line()) {
            (None, None) => rules::check_winner(board).is_none(),
            (Some(player), Some(line)) => {
                line.player() == player
                    && state.is_game_over()
                    && line
                        .line()
                        .cells()
                        .iter()
                        .all(|pos| board.get(*pos).player() == Some(player))
            }
            _ => false,
        };

        let ended_properly =
            state.is_game_over() == (state.winner().is_some() || rules::is_full(board));

        recorded && ended_properly
    }

    fn description() -> &'static str {
        "Winner is recorded exactly when a line is complete"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square, StartingPlayer};

    #[test]
    fn test_holds_after_win() {
        let mut state = GameState::new(StartingPlayer::Fixed(Player::X));
        for (r, c) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            state.apply_move(r, c);
        }
        assert_eq!(state.winner(), Some(Player::X));
        assert!(WinnerConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_detects_unrecorded_line() {
        let mut state = GameState::new(StartingPlayer::Fixed(Player::X));
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board_mut().set(pos, Square::Occupied(Player::O));
        }
        assert!(!WinnerConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_detects_full_board_still_running() {
        // X O X / X O O / O X X with no line, yet not marked over.
        let mut state = GameState::new(StartingPlayer::Fixed(Player::X));
        let marks = "XOXXOOOXX";
        for (pos, mark) in Position::ALL.into_iter().zip(marks.chars()) {
            let player = if mark == 'X' { Player::X } else { Player::O };
            state.board_mut().set(pos, Square::Occupied(player));
        }
        assert!(!WinnerConsistentInvariant::holds(&state));
    }
}
