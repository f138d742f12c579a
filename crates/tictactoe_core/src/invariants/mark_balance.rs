//! Mark balance invariant: neither player is ever more than one mark ahead.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: mark counts of X and O differ by at most one.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.mark_count(Player::X);
        let o = state.mark_count(Player::O);
        x.abs_diff(o) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
