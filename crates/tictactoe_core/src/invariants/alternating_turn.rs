//! Alternating turn invariant: the player to move is never ahead on marks.

use super::Invariant;
use crate::GameState;

/// Invariant: while the game runs, the current player has placed no more
/// marks than the opponent.
///
/// Whoever started is one mark ahead after each of their turns, so the
/// player to move is always the one behind or level.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        if state.is_game_over() {
            return true;
        }
        let me = state.current_player();
        state.mark_count(me) <= state.mark_count(me.opponent())
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
