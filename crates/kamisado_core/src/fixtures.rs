//! Board diagrams shared by the unit tests.

use crate::state::State;

// Black orange has an open file down to White's home row, Black blue can only
// step to a1's neighbour, everything else on rows 0 and 1 is jammed, and
// White's brown piece roams in the middle of the board.
pub(crate) const OPEN_FILE: &str = "
    obupyrgn
    .GRYPUBO
    ........
    ........
    ........
    .....N..
    ........
    ........
";

// Everything is jammed on the two top rows except White's brown piece,
// whose only move closes the last gap.
pub(crate) const JAM: &str = "
    obupyrgn
    .GRYPUBO
    N.......
    ........
    ........
    ........
    ........
    ........
";

// Every White piece is one step from its goal row, which is empty.
pub(crate) const ALL_WIN: &str = "
    ........
    OBUPYRGN
    ........
    obupyrgn
    ........
    ........
    ........
    ........
";

pub(crate) fn diagram(text: &str) -> State {
    State::from_diagram(text).unwrap()
}
