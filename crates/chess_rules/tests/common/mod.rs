//! Shared helpers for the integration tests.
#![allow(dead_code)]

use chess_rules::{Board, Game, Move, Occupant, PieceKind, Player, Position};

/// "e4" -> Position.
pub fn sq(name: &str) -> Position {
    let b = name.as_bytes();
    assert_eq!(b.len(), 2, "bad square name {name}");
    Position::new((b[0] - b'a') as i8, (b[1] - b'1') as i8)
}

/// Build a board from the piece-placement field of a FEN string
/// (`rnbqkbnr/pppppppp/8/...`, rank 8 first). Every piece counts as unmoved.
pub fn board_from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    for (row, line) in placement.split('/').enumerate() {
        let rank = 7 - row as i8;
        let mut file = 0i8;
        for c in line.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as i8;
                continue;
            }
            let owner = if c.is_ascii_uppercase() {
                Player::White
            } else {
                Player::Black
            };
            let kind = match c.to_ascii_lowercase() {
                'k' => PieceKind::King,
                'q' => PieceKind::Queen,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                'r' => PieceKind::Rook,
                'p' => PieceKind::Pawn,
                other => panic!("unknown piece letter {other:?}"),
            };
            board.set_occupant(Position::new(file, rank), Occupant::new(kind, owner));
            file += 1;
        }
        assert_eq!(file, 8, "rank {} of {placement:?} is not 8 files wide", rank + 1);
    }
    board
}

pub fn game_from_placement(placement: &str, to_move: Player) -> Game {
    Game::with_board(board_from_placement(placement), to_move)
}

pub fn find_move(game: &Game, from: &str, to: &str) -> Option<Move> {
    game.legal_moves(sq(from))
        .into_iter()
        .find(|mv| mv.to == sq(to))
}

/// Play a sequence of "e2e4"-style moves, panicking on the first illegal one.
pub fn play_line(game: &mut Game, line: &[&str]) {
    for step in line {
        let (from, to) = step.split_at(2);
        let mv = find_move(game, from, to)
            .unwrap_or_else(|| panic!("{step} should be legal at ply {}", game.ply()));
        game.apply_move(mv)
            .unwrap_or_else(|err| panic!("{step} rejected: {err}"));
    }
}
