use super::*;

fn cell(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

fn assert_index_consistent(state: &State) {
    for player in Player::BOTH {
        for color in Color::ALL {
            let at = state.locate(player, color);
            assert_eq!(state.piece_at(at), Some(Piece { player, color }));
        }
    }
    let occupied = Coord::all().filter(|&c| !state.is_empty(c)).count();
    assert_eq!(occupied, 16);
}

#[test]
fn test_startpos_home_rows() {
    let s = State::startpos();
    for color in Color::ALL {
        let w = s.locate(Player::White, color);
        let b = s.locate(Player::Black, color);
        assert_eq!(w.row(), 7);
        assert_eq!(b.row(), 0);
        // Every piece starts on the cell of its own color.
        assert_eq!(color_at(w), color);
        assert_eq!(color_at(b), color);
    }
    assert_index_consistent(&s);
}

#[test]
fn test_move_piece_updates_grid_and_index() {
    let mut s = State::startpos();
    let from = s.locate(Player::White, Color::Brown);
    assert_eq!(from, cell(7, 0));

    s.move_piece(Player::White, Color::Brown, cell(6, 0));

    assert_eq!(s.locate(Player::White, Color::Brown), cell(6, 0));
    assert!(s.is_empty(from));
    assert_index_consistent(&s);
}

#[test]
fn test_clone_is_independent() {
    let original = State::startpos();
    let mut branch = original.clone();
    branch.move_piece(Player::Black, Color::Red, cell(4, 5));
    branch.move_piece(Player::White, Color::Green, cell(3, 1));

    for player in Player::BOTH {
        for color in Color::ALL {
            let expected = State::startpos().locate(player, color);
            assert_eq!(original.locate(player, color), expected);
        }
    }
    assert_eq!(original, State::startpos());
    assert_ne!(original, branch);
}

#[test]
fn test_color_under() {
    let mut s = State::startpos();
    s.move_piece(Player::White, Color::Brown, cell(6, 0));
    assert_eq!(s.color_under(Player::White, Color::Brown), Color::Purple);
}

#[test]
fn test_pieces_iterates_in_color_order() {
    let s = State::startpos();
    let colors: Vec<Color> = s.pieces(Player::Black).map(|(c, _)| c).collect();
    assert_eq!(colors, Color::ALL.to_vec());
}
