//! Legality, blocking and win checks: the surface turn-taking drivers use.

use crate::error::KamisadoError;
use crate::movegen::{any_move, possible_moves};
use crate::{state::State, types::*};

impl State {
    /// True if `to` is among the destinations of `player`'s `color` piece.
    pub fn is_legal_move(&self, player: Player, color: Color, to: Coord) -> bool {
        any_move(self, player, color, |c| c == to)
    }

    /// True if `player`'s `color` piece has nowhere to go.
    pub fn is_blocked(&self, player: Player, color: Color) -> bool {
        !any_move(self, player, color, |_| true)
    }

    /// True if any of `player`'s pieces stands on its goal row.
    pub fn is_winning(&self, player: Player) -> bool {
        let goal = player.goal_row();
        self.pieces(player).any(|(_, cell)| cell.row() == goal)
    }

    /// Moves `player`'s `color` piece to `to` after checking legality.
    pub fn apply_move(
        &mut self,
        player: Player,
        color: Color,
        to: Coord,
    ) -> Result<(), KamisadoError> {
        if !self.is_legal_move(player, color, to) {
            return Err(KamisadoError::IllegalMove { player, color, to });
        }
        self.move_piece(player, color, to);
        Ok(())
    }

    /// All legal moves of `player`'s `color` piece.
    pub fn moves_of(&self, player: Player, color: Color) -> Vec<Move> {
        possible_moves(self, player, color)
            .into_iter()
            .map(|to| Move::new(player, color, to))
            .collect()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
