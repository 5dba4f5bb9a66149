//! The fixed color layout of the Kamisado board.

use crate::types::{Color, Coord};

use Color::*;

/// Cell colors, row 0 first. Every color appears once per row and once per column.
pub const LAYOUT: [[Color; 8]; 8] = [
    [Orange, Blue, Purple, Pink, Yellow, Red, Green, Brown],
    [Red, Orange, Pink, Green, Blue, Yellow, Brown, Purple],
    [Green, Pink, Orange, Red, Purple, Brown, Yellow, Blue],
    [Pink, Purple, Blue, Orange, Brown, Green, Red, Yellow],
    [Yellow, Red, Green, Brown, Orange, Blue, Purple, Pink],
    [Blue, Yellow, Brown, Purple, Red, Orange, Pink, Green],
    [Purple, Brown, Yellow, Blue, Green, Pink, Orange, Red],
    [Brown, Green, Red, Yellow, Pink, Purple, Blue, Orange],
];

pub const SIZE: i8 = 8;

pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..SIZE).contains(&row) && (0..SIZE).contains(&col)
}

#[inline]
pub fn color_at(c: Coord) -> Color {
    LAYOUT[c.row() as usize][c.col() as usize]
}

/// Cells of a row, left to right, with their colors.
pub fn row_cells(row: u8) -> impl Iterator<Item = (Coord, Color)> {
    (0..8u8).filter_map(move |col| Coord::new(row, col).map(|c| (c, color_at(c))))
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
