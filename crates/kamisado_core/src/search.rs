//! Fixed-depth negamax over the chain-move game.
//!
//! A node is "`mover` must move its `forced` piece with `depth` plies left".
//! Every node is one of:
//!
//! - terminal: someone already stands on their goal row, or `depth` is 0;
//! - moves: the forced piece has destinations, each one a child node for the opponent;
//! - pass: the forced piece is blocked. The board stays as it is and the
//!   opponent must move the piece matching the cell under the blocked piece.
//!   A pass costs one ply of depth like a real move.
//!
//! Values are `f64` from the mover's perspective. A decided game is
//! `+inf`/`-inf`; heuristic values are finite, so they always rank strictly
//! between the two. There is no pruning and no guard on depth: the cost grows
//! as the branching factor to the power of `depth`.

use tracing::{debug, trace};

use crate::board::color_at;
use crate::eval::evaluate;
use crate::movegen::possible_moves;
use crate::{state::State, types::*};

/// Classification of a search node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The mover already has a piece on its goal row.
    Won,
    /// The mover's opponent already has a piece on its goal row.
    Lost,
    /// No depth left; the node is scored by [`evaluate`].
    Horizon,
    /// The forced piece can go to any of these cells, in generation order.
    Moves(Vec<Coord>),
    /// The forced piece is blocked; the opponent continues with `next_forced`.
    Pass { next_forced: Color },
}

pub fn classify(state: &State, mover: Player, forced: Color, depth: u8) -> Node {
    if state.is_winning(mover) {
        return Node::Won;
    }
    if state.is_winning(mover.other()) {
        return Node::Lost;
    }
    if depth == 0 {
        return Node::Horizon;
    }
    let moves = possible_moves(state, mover, forced);
    if moves.is_empty() {
        Node::Pass {
            next_forced: state.color_under(mover, forced),
        }
    } else {
        Node::Moves(moves)
    }
}

/// Value of the node for `mover`. Horizon scores are taken from `root`'s
/// point of view and negated when `mover` is the other side.
pub fn negamax(
    state: &State,
    mover: Player,
    forced: Color,
    depth: u8,
    root: Player,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;
    match classify(state, mover, forced, depth) {
        Node::Won => f64::INFINITY,
        Node::Lost => f64::NEG_INFINITY,
        Node::Horizon => {
            let v = evaluate(state, root);
            if mover == root { v } else { -v }
        }
        Node::Moves(dsts) => {
            let mut best = f64::NEG_INFINITY;
            for to in dsts {
                let mut child = state.clone();
                child.move_piece(mover, forced, to);
                let v = -negamax(&child, mover.other(), color_at(to), depth - 1, root, nodes);
                if v > best {
                    best = v;
                }
            }
            best
        }
        Node::Pass { next_forced } => {
            trace!(%mover, %forced, %next_forced, depth, "forced pass");
            -negamax(state, mover.other(), next_forced, depth - 1, root, nodes)
        }
    }
}

/// Best destination for `player`'s `forced` piece, with its score.
///
/// Each root move is followed by `depth` further plies. Ties keep the move
/// generated first. Returns `None` when the piece is blocked; drivers are
/// expected to resolve that with [`State::is_blocked`] before searching.
pub fn find_best_move(
    state: &State,
    player: Player,
    forced: Color,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Coord, f64)> {
    let mut best: Option<(Coord, f64)> = None;
    for to in possible_moves(state, player, forced) {
        let v = score_root_move(state, player, forced, to, depth, nodes);
        debug!(%player, %forced, %to, score = v, "root move");
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((to, v));
        }
    }
    best
}

/// Best first move of a game, where any piece may move.
///
/// Pieces are tried in [`Color::ALL`] order, so ties keep the lowest color.
pub fn find_best_opening(
    state: &State,
    player: Player,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Color, Coord, f64)> {
    let mut best: Option<(Color, Coord, f64)> = None;
    for color in Color::ALL {
        if let Some((to, v)) = find_best_move(state, player, color, depth, nodes)
            && best.is_none_or(|(_, _, b)| v > b)
        {
            best = Some((color, to, v));
        }
    }
    best
}

fn score_root_move(
    state: &State,
    player: Player,
    color: Color,
    to: Coord,
    depth: u8,
    nodes: &mut u64,
) -> f64 {
    let mut child = state.clone();
    child.move_piece(player, color, to);
    -negamax(&child, player.other(), color_at(to), depth, player, nodes)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
