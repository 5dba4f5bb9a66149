//! Turn-taking on top of the rules: who moves, which piece is forced, skipped
//! turns and the end of the game.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::color_at;
use crate::error::KamisadoError;
use crate::{state::State, types::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A piece of this player reached its goal row.
    Win(Player),
    /// Both sides keep getting blocked. The player whose move caused it loses.
    Deadlock { loser: Player },
}

impl Outcome {
    pub fn winner(self) -> Player {
        match self {
            Outcome::Win(p) => p,
            Outcome::Deadlock { loser } => loser.other(),
        }
    }
}

/// A turn lost because the forced piece had nowhere to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skip {
    pub player: Player,
    pub color: Color,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    state: State,
    to_move: Player,
    forced: Option<Color>,
    outcome: Option<Outcome>,
    ply: u32,
}

impl Game {
    /// Start position, White to move with a free choice of piece.
    pub fn new() -> Self {
        Self::from_state(State::startpos(), Player::White, None)
    }

    /// A game resumed from an arbitrary position. `forced` of `None` means
    /// `to_move` may pick any piece.
    pub fn from_state(state: State, to_move: Player, forced: Option<Color>) -> Self {
        let outcome = Player::BOTH
            .into_iter()
            .find(|&p| state.is_winning(p))
            .map(Outcome::Win);
        Self {
            state,
            to_move,
            forced,
            outcome,
            ply: 0,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn side_to_move(&self) -> Player {
        self.to_move
    }
    pub fn forced_color(&self) -> Option<Color> {
        self.forced
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
    /// Number of moves played, skips excluded.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Moves available to the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        match self.forced {
            Some(color) => self.state.moves_of(self.to_move, color),
            None => Color::ALL
                .into_iter()
                .flat_map(|color| self.state.moves_of(self.to_move, color))
                .collect(),
        }
    }

    /// Plays the side to move's `color` piece to `to`, then skips every turn
    /// that follows with a blocked forced piece. The skips are returned in order.
    pub fn play(&mut self, color: Color, to: Coord) -> Result<Vec<Skip>, KamisadoError> {
        if self.is_over() {
            return Err(KamisadoError::GameOver);
        }
        let player = self.to_move;
        if let Some(expected) = self.forced
            && expected != color
        {
            return Err(KamisadoError::WrongPiece {
                player,
                expected,
                got: color,
            });
        }
        self.state.apply_move(player, color, to)?;
        self.ply += 1;
        debug!(%player, %color, %to, ply = self.ply, "move played");

        if self.state.is_winning(player) {
            info!(%player, ply = self.ply, "goal row reached");
            self.outcome = Some(Outcome::Win(player));
            return Ok(Vec::new());
        }

        self.to_move = player.other();
        self.forced = Some(color_at(to));
        Ok(self.resolve_blocked(player))
    }

    /// Hands the turn back and forth while the forced piece is blocked.
    /// `last_mover` made the move that led here.
    fn resolve_blocked(&mut self, last_mover: Player) -> Vec<Skip> {
        let mut skips: Vec<Skip> = Vec::new();
        while let Some(color) = self.forced {
            if !self.state.is_blocked(self.to_move, color) {
                break;
            }
            let skip = Skip {
                player: self.to_move,
                color,
            };
            if skips.contains(&skip) {
                info!(loser = %last_mover, "deadlock");
                self.outcome = Some(Outcome::Deadlock { loser: last_mover });
                break;
            }
            debug!(player = %skip.player, %color, "forced piece blocked, turn skipped");
            skips.push(skip);
            self.forced = Some(self.state.color_under(self.to_move, color));
            self.to_move = self.to_move.other();
        }
        skips
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
