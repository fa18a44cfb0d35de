//! Helpers shared by the unit tests.

use crate::{board::Board, board::Occupant, game::Game, types::*};

/// "e4" -> Position. Test-only; the engine itself has no notation.
pub(crate) fn sq(name: &str) -> Position {
    let b = name.as_bytes();
    assert_eq!(b.len(), 2, "bad square name {name}");
    Position::new((b[0] - b'a') as i8, (b[1] - b'1') as i8)
}

pub(crate) fn board_with(pieces: &[(&str, PieceKind, Player)]) -> Board {
    let mut board = Board::empty();
    for &(name, kind, owner) in pieces {
        board.set_occupant(sq(name), Occupant::new(kind, owner));
    }
    board
}

pub(crate) fn find_move(game: &Game, from: &str, to: &str) -> Option<Move> {
    game.legal_moves(sq(from))
        .into_iter()
        .find(|mv| mv.to == sq(to))
}

pub(crate) fn play(game: &mut Game, from: &str, to: &str) {
    let mv = find_move(game, from, to)
        .unwrap_or_else(|| panic!("{from}-{to} should be legal"));
    game.apply_move(mv).expect("move should apply");
}
