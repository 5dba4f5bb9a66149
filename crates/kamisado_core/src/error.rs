use thiserror::Error;

use crate::types::{Color, Coord, Player};

/// Errors surfaced to callers of the rules layer.
///
/// Move generation and search never fail; everything here comes from input
/// that did not pass validation (labels, diagrams, moves outside the legal set).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KamisadoError {
    #[error("invalid cell label {0:?}, expected a file a-h followed by a rank 1-8")]
    InvalidLabel(String),

    #[error("unknown color {0:?}")]
    UnknownColor(String),

    #[error("invalid diagram: {0}")]
    InvalidDiagram(String),

    #[error("illegal move: {player} {color} cannot reach {to}")]
    IllegalMove {
        player: Player,
        color: Color,
        to: Coord,
    },

    #[error("{player} must move the {expected} piece, not {got}")]
    WrongPiece {
        player: Player,
        expected: Color,
        got: Color,
    },

    #[error("the game is already over")]
    GameOver,
}
