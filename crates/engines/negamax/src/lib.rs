//! Negamax Kamisado Engine
//!
//! Fixed-depth negamax over the chain-move rules with the static evaluation
//! from `kamisado_core`. This is the engine the console game plays against.

use kamisado_core::{
    Engine, Game, Move, SearchLimits, SearchResult, find_best_move, find_best_opening,
};
use tracing::debug;

/// Kamisado engine using plain negamax.
///
/// This engine uses:
/// - Negamax search to a fixed depth, no pruning
/// - Forced passes when the piece to move is blocked
/// - The win-in-one / flexibility heuristic at the horizon
#[derive(Debug, Clone, Default)]
pub struct NegamaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, game: &Game, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let player = game.side_to_move();
        let state = game.state();

        let found = if game.is_over() {
            None
        } else {
            match game.forced_color() {
                Some(color) => find_best_move(state, player, color, limits.depth, &mut self.nodes)
                    .map(|(to, score)| (Move::new(player, color, to), score)),
                None => find_best_opening(state, player, limits.depth, &mut self.nodes)
                    .map(|(color, to, score)| (Move::new(player, color, to), score)),
            }
        };

        if let Some((mv, score)) = found {
            debug!(%mv, score, nodes = self.nodes, depth = limits.depth, "negamax search done");
        }

        SearchResult {
            best_move: found.map(|(mv, _)| mv),
            score: found.map(|(_, s)| s).unwrap_or(0.0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
