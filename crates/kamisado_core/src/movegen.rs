use crate::{state::State, types::*};

/// Column deltas of the three forward rays, in generation order.
const RAYS: [i8; 3] = [-1, 0, 1];

/// Destinations of `player`'s `color` piece, freshly allocated.
pub fn possible_moves(state: &State, player: Player, color: Color) -> Vec<Coord> {
    let mut out = Vec::with_capacity(16);
    possible_moves_into(state, player, color, &mut out);
    out
}

/// Destinations of `player`'s `color` piece into the provided buffer, reusing it across calls.
///
/// The piece slides any distance straight forward or diagonally forward until
/// it meets the board edge or any other piece. Occupied cells are never
/// destinations. Order is left diagonal, straight, right diagonal (as seen
/// from row 0), nearest cell first along each ray.
pub fn possible_moves_into(state: &State, player: Player, color: Color, out: &mut Vec<Coord>) {
    out.clear();
    let from = state.locate(player, color);
    let dr = player.forward();
    for dc in RAYS {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            if !state.is_empty(to) {
                break;
            }
            out.push(to);
            cur = to;
        }
    }
}

/// True if the piece has at least one destination satisfying `pred`.
pub(crate) fn any_move(
    state: &State,
    player: Player,
    color: Color,
    mut pred: impl FnMut(Coord) -> bool,
) -> bool {
    let from = state.locate(player, color);
    let dr = player.forward();
    for dc in RAYS {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            if !state.is_empty(to) {
                break;
            }
            if pred(to) {
                return true;
            }
            cur = to;
        }
    }
    false
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod tests;
