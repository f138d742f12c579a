//! Win detection logic for tic-tac-toe.

use crate::{Board, Line, WinLine};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`Line`] declaration order and the first one held
/// entirely by a single player is returned.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then(|| WinLine::new(line, player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(WinLine::new(Line::TopRow, Player::X)));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(
            check_winner(&board).map(|w| w.line()),
            Some(Line::RightColumn)
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(WinLine::new(Line::Diagonal, Player::O)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(
            check_winner(&board),
            Some(WinLine::new(Line::AntiDiagonal, Player::X))
        );
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Row 0 and column 0 both complete; the row is reported.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(check_winner(&board).map(|w| w.line()), Some(Line::TopRow));
    }

    #[test]
    fn test_mixed_line_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
