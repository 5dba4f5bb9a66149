//! Static evaluation used at the search horizon.

use crate::board::color_at;
use crate::movegen::{any_move, possible_moves_into};
use crate::{state::State, types::*};

/// Heuristic score of `state` for `player`:
///
/// `win_in_one(player) - win_in_one(opponent) - distinct_reachable_colors(opponent)`
///
/// Positive favours `player`. Always finite.
pub fn evaluate(state: &State, player: Player) -> f64 {
    let opponent = player.other();
    let pos = win_in_one_count(state, player) as i32;
    let neg = win_in_one_count(state, opponent) as i32
        + distinct_reachable_colors(state, opponent) as i32;
    f64::from(pos - neg)
}

/// Number of `player`'s pieces that could reach the goal row with one move.
pub fn win_in_one_count(state: &State, player: Player) -> u32 {
    let goal = player.goal_row();
    Color::ALL
        .into_iter()
        .filter(|&color| any_move(state, player, color, |to| to.row() == goal))
        .count() as u32
}

/// Number of distinct cell colors `player` could land on with any of its pieces,
/// i.e. how many different pieces `player` could force the opponent to move next.
pub fn distinct_reachable_colors(state: &State, player: Player) -> u32 {
    let mut seen = [false; 8];
    let mut buf = Vec::with_capacity(16);
    for color in Color::ALL {
        possible_moves_into(state, player, color, &mut buf);
        for &to in &buf {
            seen[color_at(to).idx()] = true;
        }
    }
    seen.iter().filter(|&&s| s).count() as u32
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
