use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KamisadoError;

/// Side of the table. White sits on row 7 and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    pub fn other(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }
    pub fn home_row(self) -> u8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }
    pub fn goal_row(self) -> u8 {
        self.other().home_row()
    }
    /// Row delta of one step toward the goal row.
    pub fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// Cell and piece colors. Landing on a color forces the opponent to move
/// their piece of that color next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Orange,
    Blue,
    Purple,
    Pink,
    Yellow,
    Red,
    Green,
    Brown,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Orange,
        Color::Blue,
        Color::Purple,
        Color::Pink,
        Color::Yellow,
        Color::Red,
        Color::Green,
        Color::Brown,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Green => "green",
            Color::Brown => "brown",
        }
    }

    /// One-letter code used in diagrams. Purple is `u` and brown is `n`
    /// since `p` and `b` are taken.
    pub fn letter(self) -> char {
        match self {
            Color::Orange => 'o',
            Color::Blue => 'b',
            Color::Purple => 'u',
            Color::Pink => 'p',
            Color::Yellow => 'y',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Brown => 'n',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = KamisadoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| KamisadoError::UnknownColor(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub player: Player,
    pub color: Color,
}

/// A board cell. Both components are always in `0..8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Option<Coord> {
        if row < 8 && col < 8 {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    /// Index into a row-major 64-cell grid.
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// The cell `(dr, dc)` away, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if crate::board::in_bounds(r, c) {
            Some(Coord {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Coord { row, col }))
    }
}

/// One move: `player` slides its `color` piece to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub color: Color,
    pub to: Coord,
}

impl Move {
    pub fn new(player: Player, color: Color, to: Coord) -> Self {
        Self { player, color, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.player, self.color, self.to)
    }
}
