use super::*;
use crate::fixtures::{self, JAM, OPEN_FILE};

fn cell(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_new_game_free_first_move() {
    let game = Game::new();
    assert_eq!(game.side_to_move(), Player::White);
    assert_eq!(game.forced_color(), None);
    assert!(!game.is_over());

    let moves = game.legal_moves();
    assert!(moves.iter().all(|m| m.player == Player::White));
    let colors: std::collections::HashSet<Color> = moves.iter().map(|m| m.color).collect();
    assert_eq!(colors.len(), 8);
}

#[test]
fn test_play_hands_over_with_landing_color() {
    let mut game = Game::new();
    let skips = game.play(Color::Brown, cell(6, 0)).unwrap();
    assert!(skips.is_empty());
    assert_eq!(game.side_to_move(), Player::Black);
    assert_eq!(game.forced_color(), Some(Color::Purple));
    assert_eq!(game.ply(), 1);
    assert!(game
        .legal_moves()
        .iter()
        .all(|m| m.player == Player::Black && m.color == Color::Purple));
}

#[test]
fn test_wrong_piece_and_illegal_move() {
    let mut game = Game::new();
    game.play(Color::Brown, cell(6, 0)).unwrap();

    assert_eq!(
        game.play(Color::Orange, cell(1, 0)),
        Err(KamisadoError::WrongPiece {
            player: Player::Black,
            expected: Color::Purple,
            got: Color::Orange
        })
    );
    assert!(matches!(
        game.play(Color::Purple, cell(0, 3)),
        Err(KamisadoError::IllegalMove { .. })
    ));
    // Nothing changed after the rejected attempts.
    assert_eq!(game.side_to_move(), Player::Black);
    assert_eq!(game.ply(), 1);
}

#[test]
fn test_reaching_goal_row_wins() {
    let s = fixtures::diagram(OPEN_FILE);
    let mut game = Game::from_state(s, Player::Black, Some(Color::Orange));
    game.play(Color::Orange, cell(7, 0)).unwrap();
    assert_eq!(game.outcome(), Some(Outcome::Win(Player::Black)));
    assert_eq!(game.outcome().map(Outcome::winner), Some(Player::Black));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.play(Color::Blue, cell(1, 0)), Err(KamisadoError::GameOver));
}

#[test]
fn test_blocked_turns_are_skipped() {
    let s = fixtures::diagram(OPEN_FILE);
    let mut game = Game::from_state(s, Player::White, Some(Color::Brown));
    // Landing on green forces Black's boxed-in green piece, which stands on
    // green again, so White's equally boxed-in green piece is forced next.
    let skips = game.play(Color::Brown, cell(3, 5)).unwrap();
    assert_eq!(
        skips,
        vec![
            Skip {
                player: Player::Black,
                color: Color::Green
            },
            Skip {
                player: Player::White,
                color: Color::Green
            },
        ]
    );
    assert_eq!(game.side_to_move(), Player::Black);
    assert_eq!(game.forced_color(), Some(Color::Orange));
    assert!(!game.is_over());
}

#[test]
fn test_deadlock_loses_for_the_last_mover() {
    let s = fixtures::diagram(JAM);
    let mut game = Game::from_state(s, Player::White, Some(Color::Brown));
    assert_eq!(game.legal_moves().len(), 1);

    let skips = game.play(Color::Brown, cell(1, 0)).unwrap();
    assert_eq!(
        game.outcome(),
        Some(Outcome::Deadlock {
            loser: Player::White
        })
    );
    assert_eq!(game.outcome().map(Outcome::winner), Some(Player::Black));
    assert_eq!(skips.len(), 8);
    assert_eq!(
        skips[0],
        Skip {
            player: Player::Black,
            color: Color::Red
        }
    );
}

#[test]
fn test_from_state_detects_finished_game() {
    let mut s = State::startpos();
    s.move_piece(Player::Black, Color::Orange, cell(3, 3));
    s.move_piece(Player::White, Color::Orange, cell(0, 0));
    let game = Game::from_state(s, Player::Black, Some(Color::Red));
    assert_eq!(game.outcome(), Some(Outcome::Win(Player::White)));
}
