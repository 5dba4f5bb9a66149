pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod rules;
pub mod search;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::KamisadoError;
pub use eval::*;
pub use game::*;
pub use movegen::*;
pub use search::*;
pub use state::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every Kamisado engine
// =============================================================================

/// Limits for a single search. Depth is the only knob: there is no clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies searched after the root move
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move found (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Score from the engine's perspective; infinite when the game is decided
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all Kamisado engines implement.
///
/// Engines are only asked to move when the game is not over and the side to
/// move has a legal move; [`Game::play`] resolves blocked turns beforehand.
pub trait Engine: Send {
    /// Pick a move for the side to move in `game`.
    fn search(&mut self, game: &Game, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
