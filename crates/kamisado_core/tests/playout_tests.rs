//! Properties checked over many random games.
//!
//! Each seed plays a game of random legal moves from the start position and
//! checks the move generator and state bookkeeping after every move.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use kamisado_core::{Color, Coord, Game, Player, State, color_at, possible_moves};

const GAMES: u64 = 200;
const MAX_PLIES: u32 = 300;

fn check_index(state: &State) {
    for player in Player::BOTH {
        for color in Color::ALL {
            let at = state.locate(player, color);
            let piece = state.piece_at(at).expect("indexed cell is empty");
            assert_eq!((piece.player, piece.color), (player, color));
        }
    }
    assert_eq!(Coord::all().filter(|&c| !state.is_empty(c)).count(), 16);
}

/// Every destination lies on one of the three forward rays, with only empty
/// cells between it and the piece.
fn check_rays(state: &State, player: Player, color: Color) {
    let from = state.locate(player, color);
    let dr = player.forward();
    let moves = possible_moves(state, player, color);
    for &to in &moves {
        assert!(state.is_empty(to));
        let steps = (to.row() as i8 - from.row() as i8) / dr;
        assert!(steps > 0, "{to:?} is not forward of {from:?}");
        let dc = (to.col() as i8 - from.col() as i8) / steps;
        assert!((-1..=1).contains(&dc));
        assert_eq!(from.col() as i8 + dc * steps, to.col() as i8);
        for k in 1..steps {
            let between = from.offset(dr * k, dc * k).unwrap();
            assert!(state.is_empty(between));
            assert!(moves.contains(&between));
        }
        // The ray ends at the edge or at a piece unless the next cell is listed too.
        match to.offset(dr, dc) {
            Some(next) if state.is_empty(next) => assert!(moves.contains(&next)),
            _ => {}
        }
    }
}

fn play_random_game(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();

    while !game.is_over() && game.ply() < MAX_PLIES {
        let state = game.state().clone();
        check_index(&state);
        for player in Player::BOTH {
            for color in Color::ALL {
                check_rays(&state, player, color);
            }
        }

        let moves = game.legal_moves();
        let mv = *moves
            .choose(&mut rng)
            .unwrap_or_else(|| panic!("seed {seed}: no move but game not over"));

        // Exploring a branch leaves the game untouched.
        let mut branch = state.clone();
        branch.move_piece(mv.player, mv.color, mv.to);
        assert_eq!(game.state(), &state);

        game.play(mv.color, mv.to).unwrap();
        if let Some(forced) = game.forced_color() {
            if !game.is_over() {
                assert!(!game.state().is_blocked(game.side_to_move(), forced));
            }
        }
    }
}

#[test]
fn random_games_keep_invariants() {
    (0..GAMES).into_par_iter().for_each(play_random_game);
}

#[test]
fn forced_color_follows_landing_cell() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Game::new();
    for _ in 0..20 {
        if game.is_over() {
            break;
        }
        let mv = *game.legal_moves().choose(&mut rng).unwrap();
        let skips = game.play(mv.color, mv.to).unwrap();
        if game.is_over() {
            break;
        }
        if skips.is_empty() {
            assert_eq!(game.side_to_move(), mv.player.other());
            assert_eq!(game.forced_color(), Some(color_at(mv.to)));
        }
    }
}
