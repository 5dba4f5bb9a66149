//! Match runner for playing games between engines

use std::path::Path;

use kamisado_core::{Engine, Game, Outcome, Player, SearchLimits};
use negamax_engine::NegamaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TournamentError;
use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, TournamentError> {
        let text = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }
}

/// Build an engine from a spec such as `negamax`, `random` or `random:42`.
pub fn create_engine(spec: &str) -> Result<Box<dyn Engine>, TournamentError> {
    let mut parts = spec.splitn(2, ':');
    let kind = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();
    match (kind.as_str(), arg) {
        ("negamax" | "nm", None) => Ok(Box::new(NegamaxEngine::new())),
        ("random" | "rand", None) => Ok(Box::new(RandomEngine::new())),
        ("random" | "rand", Some(seed)) => seed
            .parse()
            .map(|s| Box::new(RandomEngine::seeded(s)) as Box<dyn Engine>)
            .map_err(|_| TournamentError::UnknownEngine(spec.to_string())),
        _ => Err(TournamentError::UnknownEngine(spec.to_string())),
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is black
                self.play_game(engine2, engine1).flipped()
            };

            result.record(game_result);

            let side = if engine1_white { "W" } else { "B" };
            info!(
                game = game_num + 1,
                side,
                outcome = game_result.notation(),
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
            if self.config.verbose {
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    game_result.notation(),
                    side,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns result from White's perspective
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut game = Game::new();
        white.new_game();
        black.new_game();

        while game.ply() < self.config.max_plies {
            if let Some(outcome) = game.outcome() {
                return GameResult::for_white(outcome);
            }

            let mover = game.side_to_move();
            let engine: &mut dyn Engine = match mover {
                Player::White => &mut *white,
                Player::Black => &mut *black,
            };
            let search = engine.search(&game, self.config.search_limits());

            let Some(mv) = search.best_move else {
                warn!(%mover, engine = engine.name(), "engine returned no move, forfeiting");
                return GameResult::for_white(Outcome::Win(mover.other()));
            };
            if let Err(e) = game.play(mv.color, mv.to) {
                warn!(
                    %mover,
                    engine = engine.name(),
                    error = %e,
                    "engine played an illegal move, forfeiting"
                );
                return GameResult::for_white(Outcome::Win(mover.other()));
            }
        }

        match game.outcome() {
            Some(outcome) => GameResult::for_white(outcome),
            // Max plies reached
            None => GameResult::Draw,
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod tests;
