use crate::board::{color_at, row_cells};
use crate::types::*;

/// Board occupancy plus a per-player index from color to cell.
///
/// The index is authoritative; the grid mirrors it so that emptiness checks
/// during move generation are a single lookup. Both are only mutated through
/// [`State::move_piece`], which keeps them in sync.
///
/// Cloning copies two small arrays, so a clone shares nothing with its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    grid: [Option<Piece>; 64],
    locations: [[Coord; 8]; 2],
}

impl State {
    /// White on row 7, Black on row 0, each piece on the cell of its own color.
    pub fn startpos() -> Self {
        let mut grid = [None; 64];
        let mut locations = [[Coord::default(); 8]; 2];
        for player in Player::BOTH {
            for (cell, color) in row_cells(player.home_row()) {
                grid[cell.index()] = Some(Piece { player, color });
                locations[player.idx()][color.idx()] = cell;
            }
        }
        State { grid, locations }
    }

    /// Builds a state from a full placement. Callers guarantee one cell per
    /// `(player, color)` and no two pieces on the same cell.
    pub(crate) fn from_locations(locations: [[Coord; 8]; 2]) -> Self {
        let mut grid = [None; 64];
        for player in Player::BOTH {
            for color in Color::ALL {
                let cell = locations[player.idx()][color.idx()];
                grid[cell.index()] = Some(Piece { player, color });
            }
        }
        State { grid, locations }
    }

    #[inline]
    pub fn locate(&self, player: Player, color: Color) -> Coord {
        self.locations[player.idx()][color.idx()]
    }

    #[inline]
    pub fn piece_at(&self, cell: Coord) -> Option<Piece> {
        self.grid[cell.index()]
    }

    #[inline]
    pub fn is_empty(&self, cell: Coord) -> bool {
        self.grid[cell.index()].is_none()
    }

    /// Pieces of `player` in color order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Color, Coord)> + '_ {
        Color::ALL
            .into_iter()
            .map(move |color| (color, self.locate(player, color)))
    }

    /// Color of the cell under `player`'s `color` piece.
    pub fn color_under(&self, player: Player, color: Color) -> Color {
        color_at(self.locate(player, color))
    }

    /// Relocates a piece without checking the movement rules.
    ///
    /// The destination must be empty (or the piece's own cell). Use
    /// [`State::apply_move`] when the move has not been validated.
    pub fn move_piece(&mut self, player: Player, color: Color, to: Coord) {
        let from = self.locate(player, color);
        debug_assert!(
            from == to || self.is_empty(to),
            "move_piece onto occupied cell {to:?}"
        );
        let piece = self.grid[from.index()].take();
        self.grid[to.index()] = piece;
        self.locations[player.idx()][color.idx()] = to;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
