//! Human-readable cell labels and text diagrams.
//!
//! Labels follow the console convention: file `a..h` is the column, rank
//! `1..8` counts rows from White's side, so `a1` is row 7, column 0.

use std::fmt;

use crate::error::KamisadoError;
use crate::state::State;
use crate::types::*;

impl Coord {
    /// Parses a label such as `d3`. Case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Result<Coord, KamisadoError> {
        let invalid = || KamisadoError::InvalidLabel(label.to_string());
        let t = label.trim().to_ascii_lowercase();
        let b = t.as_bytes();
        if b.len() != 2 {
            return Err(invalid());
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(invalid());
        }
        let col = f - b'a';
        let row = 7 - (r - b'1');
        Coord::new(row, col).ok_or_else(invalid)
    }

    pub fn label(self) -> String {
        let f = (b'a' + self.col()) as char;
        let r = (b'8' - self.row()) as char;
        format!("{f}{r}")
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl TryFrom<String> for Coord {
    type Error = KamisadoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Coord::from_label(&s)
    }
}

impl From<Coord> for String {
    fn from(c: Coord) -> String {
        c.label()
    }
}

fn letter_color(ch: char) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|&c| c.letter() == ch.to_ascii_lowercase())
}

impl State {
    /// Parses an 8x8 diagram, row 0 first. `.` is an empty cell; a color letter
    /// (`o b u p y r g n`) is a piece, uppercase for White and lowercase for
    /// Black. Whitespace is ignored. Each side must have exactly one piece of
    /// every color.
    pub fn from_diagram(text: &str) -> Result<State, KamisadoError> {
        let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(KamisadoError::InvalidDiagram(format!(
                "expected 64 cells, found {}",
                cells.len()
            )));
        }

        let mut locations: [[Option<Coord>; 8]; 2] = [[None; 8]; 2];
        for (cell, &ch) in Coord::all().zip(cells.iter()) {
            if ch == '.' {
                continue;
            }
            let color = letter_color(ch).ok_or_else(|| {
                KamisadoError::InvalidDiagram(format!("unexpected character {ch:?} at {cell}"))
            })?;
            let player = if ch.is_ascii_uppercase() {
                Player::White
            } else {
                Player::Black
            };
            let slot = &mut locations[player.idx()][color.idx()];
            if slot.is_some() {
                return Err(KamisadoError::InvalidDiagram(format!(
                    "{player} has two {color} pieces"
                )));
            }
            *slot = Some(cell);
        }

        let mut resolved = [[Coord::default(); 8]; 2];
        for player in Player::BOTH {
            for color in Color::ALL {
                resolved[player.idx()][color.idx()] = locations[player.idx()][color.idx()]
                    .ok_or_else(|| {
                        KamisadoError::InvalidDiagram(format!("{player} has no {color} piece"))
                    })?;
            }
        }
        Ok(State::from_locations(resolved))
    }

    /// Inverse of [`State::from_diagram`]: eight lines of eight characters.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for cell in Coord::all() {
            let ch = match self.piece_at(cell) {
                None => '.',
                Some(p) if p.player == Player::White => p.color.letter().to_ascii_uppercase(),
                Some(p) => p.color.letter(),
            };
            out.push(ch);
            if cell.col() == 7 {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod tests;
