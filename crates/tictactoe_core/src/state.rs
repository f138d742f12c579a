//! Game state and the move/reset operations that drive it.

use super::invariants::{GameStateInvariants, InvariantSet, assert_invariants};
use super::rules;
use super::{Board, GameStatus, Player, Position, Square, StartingPlayer, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
    /// Coordinates fall outside the 3x3 grid.
    #[display("({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
}

/// What happened when a move was offered.
///
/// Invalid moves are not errors: they leave the state untouched and come
/// back as [`MoveOutcome::Ignored`], which callers are free to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// Mark placed, play passes to the other player.
    Continue,
    /// Mark placed and it completed a line.
    Won(WinLine),
    /// Mark placed and it filled the board without a winner.
    Draw,
}

impl MoveOutcome {
    /// Whether the move changed the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// A snapshot that does not describe a reachable game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent game snapshot: {}", violations.join("; "))]
pub struct SnapshotError {
    /// Descriptions of the invariants the snapshot breaks.
    pub violations: Vec<String>,
}

/// Complete game state.
///
/// Deserialized snapshots are checked against [`GameStateInvariants`] and
/// rejected when inconsistent, so every `GameState` can keep accepting moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    win_line: Option<WinLine>,
    starting: StartingPlayer,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    win_line: Option<WinLine>,
    starting: StartingPlayer,
}

impl TryFrom<RawGameState> for GameState {
    type Error = SnapshotError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            current_player: raw.current_player,
            game_over: raw.game_over,
            winner: raw.winner,
            win_line: raw.win_line,
            starting: raw.starting,
        };

        GameStateInvariants::check_all(&state).map_err(|violations| {
            let violations = violations
                .into_iter()
                .map(|v| v.description)
                .collect::<Vec<_>>();
            warn!(?violations, "Rejected game snapshot");
            SnapshotError { violations }
        })?;

        Ok(state)
    }
}

impl GameState {
    /// Creates a game whose first player is picked by `starting`.
    #[instrument]
    pub fn new(starting: StartingPlayer) -> Self {
        let current_player = starting.choose();
        debug!(%current_player, "New game");
        Self {
            board: Board::new(),
            current_player,
            game_over: false,
            winner: None,
            win_line: None,
            starting,
        }
    }

    /// Creates a game with a randomly chosen first player.
    pub fn random() -> Self {
        Self::new(StartingPlayer::Random)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Ignored when the game is over, the coordinates are off the board,
    /// or the cell is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        match Position::new(row, col) {
            Some(pos) => self.apply_at(pos),
            None => self.ignore(Rejection::OutOfRange { row, col }),
        }
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_at(&mut self, pos: Position) -> MoveOutcome {
        if self.game_over {
            return self.ignore(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            return self.ignore(Rejection::Occupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        debug!(%pos, %player, "Mark placed");

        let win = rules::check_winner(&self.board);
        if let Some(line) = win {
            self.winner = Some(line.player());
            self.win_line = Some(line);
            self.game_over = true;
        }
        // A full board ends the game but never clears a winner.
        if rules::is_full(&self.board) {
            self.game_over = true;
        }

        if !self.game_over {
            self.current_player = player.opponent();
        }

        assert_invariants(self);

        match win {
            Some(line) => {
                info!(winner = %player, line = ?line.line(), "Game won");
                MoveOutcome::Won(line)
            }
            None if self.game_over => {
                info!("Game drawn");
                MoveOutcome::Draw
            }
            None => MoveOutcome::Continue,
        }
    }

    /// Clears the board and starts over with a freshly chosen first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.game_over = false;
        self.winner = None;
        self.win_line = None;
        self.current_player = self.starting.choose();
        debug!(current_player = %self.current_player, "Game reset");
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn ignore(&self, reason: Rejection) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark goes down next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the game has ended by win or full board.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winner, if a line was completed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, if any.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// Game over without a winner.
    pub fn is_draw(&self) -> bool {
        self.game_over && self.winner.is_none()
    }

    /// Policy used to pick the first player.
    pub fn starting(&self) -> StartingPlayer {
        self.starting
    }

    /// Summarises the state for display.
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (_, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Draw,
            (false, None) => GameStatus::InProgress(self.current_player),
        }
    }

    /// Cells that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.game_over {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Marks placed by `player`.
    pub fn mark_count(&self, player: Player) -> usize {
        self.board.count(player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(first: Player) -> GameState {
        GameState::new(StartingPlayer::Fixed(first))
    }

    #[test]
    fn test_turn_alternates() {
        let mut state = game(Player::X);
        assert_eq!(state.apply_move(1, 1), MoveOutcome::Continue);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.apply_move(0, 0), MoveOutcome::Continue);
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_occupied_is_ignored() {
        let mut state = game(Player::O);
        state.apply_move(2, 2);
        let before = state.clone();

        let outcome = state.apply_move(2, 2);
        assert_eq!(
            outcome,
            MoveOutcome::Ignored(Rejection::Occupied(Position::BottomRight))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut state = game(Player::X);
        let before = state.clone();
        assert_eq!(
            state.apply_move(3, 0),
            MoveOutcome::Ignored(Rejection::OutOfRange { row: 3, col: 0 })
        );
        assert!(!state.apply_move(0, 7).is_accepted());
        assert_eq!(state, before);
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let mut state = game(Player::X);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            state.apply_move(r, c);
        }
        assert!(matches!(state.apply_move(0, 2), MoveOutcome::Won(_)));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_valid_moves_empty_after_game_over() {
        let mut state = game(Player::X);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.apply_move(r, c);
        }
        assert!(state.is_game_over());
        assert!(state.valid_moves().is_empty());
    }
}
