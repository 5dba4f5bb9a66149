//! Parsing console input and turning it into moves.

use kamisado_core::{color_at, Coord, Game, KamisadoError, Skip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// `from` is only given for the opening move, when no color is forced.
    Move { from: Option<Coord>, to: Coord },
}

/// Parses one line of input. With `with_source` the line must name the piece
/// and its destination (`a1 d4` or `a1d4`), otherwise just the destination.
pub fn parse_command(line: &str, with_source: bool) -> Result<Command, KamisadoError> {
    let trimmed = line.trim();
    if matches!(trimmed.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Command::Quit);
    }
    let invalid = || KamisadoError::InvalidLabel(trimmed.to_string());

    let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if with_source && tokens.len() == 1 && tokens[0].len() == 4 && tokens[0].is_ascii() {
        let (a, b) = tokens[0].split_at(2);
        tokens = vec![a, b];
    }

    match (with_source, tokens.as_slice()) {
        (true, [from, to]) => Ok(Command::Move {
            from: Some(Coord::from_label(from)?),
            to: Coord::from_label(to)?,
        }),
        (false, [to]) => Ok(Command::Move {
            from: None,
            to: Coord::from_label(to)?,
        }),
        _ => Err(invalid()),
    }
}

/// Plays the human's move. On the opening move the piece is the one standing
/// on `from`; afterwards the forced color decides and `from` is ignored.
pub fn play_human(
    game: &mut Game,
    from: Option<Coord>,
    to: Coord,
) -> Result<Vec<Skip>, KamisadoError> {
    if game.is_over() {
        return Err(KamisadoError::GameOver);
    }
    let player = game.side_to_move();
    let color = match (game.forced_color(), from) {
        (Some(color), _) => color,
        (None, Some(from)) => match game.state().piece_at(from) {
            Some(piece) if piece.player == player => piece.color,
            _ => {
                return Err(KamisadoError::IllegalMove {
                    player,
                    color: color_at(from),
                    to,
                })
            }
        },
        (None, None) => {
            return Err(KamisadoError::IllegalMove {
                player,
                color: color_at(to),
                to,
            })
        }
    };
    game.play(color, to)
}

/// The message shown for a rejected input.
pub fn rejection(err: &KamisadoError) -> &'static str {
    match err {
        KamisadoError::InvalidLabel(_) => "Invalid move!",
        _ => "Illegal move!",
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
