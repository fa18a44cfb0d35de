use crate::{attacks, game::Game, legality, types::*};

/// What a generation pass is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenMode {
    /// Real moves. Every candidate goes through the legality filter and the
    /// special moves (castling, en passant) are included.
    Legal,
    /// Attack probing: no legality filter, no pawn pushes, no special moves.
    /// With `quiet`, empty squares the piece bears on are reported too,
    /// flagged as captures, so the attack oracle sees attacked empty squares.
    Probe { quiet: bool },
}

impl GenMode {
    fn is_probe(self) -> bool {
        matches!(self, GenMode::Probe { .. })
    }

    fn reports_empty_squares(self) -> bool {
        match self {
            GenMode::Legal => true,
            GenMode::Probe { quiet } => quiet,
        }
    }
}

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];
const KNIGHT: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
const SLIDE_RANGE: u8 = 7;

const KING_HOME_FILE: i8 = 4;
const QUEENSIDE_ROOK_FILE: i8 = 0;
const KINGSIDE_ROOK_FILE: i8 = 7;

/// Candidate moves of the piece on `from`, in generation order: orthogonal
/// rays, diagonal rays, then special moves.
pub fn generate(game: &Game, from: Position, mode: GenMode) -> MoveList {
    let mut out = Vec::with_capacity(MOVE_LIST_CAPACITY);
    let piece = game.board.piece_at(from);
    match piece.kind {
        PieceKind::None => {}
        PieceKind::King => gen_king(game, from, piece.owner, mode, &mut out),
        PieceKind::Queen => {
            gen_steps(game, from, piece.owner, &ORTHOGONAL, SLIDE_RANGE, mode, &mut out);
            gen_steps(game, from, piece.owner, &DIAGONAL, SLIDE_RANGE, mode, &mut out);
        }
        PieceKind::Bishop => {
            gen_steps(game, from, piece.owner, &DIAGONAL, SLIDE_RANGE, mode, &mut out)
        }
        PieceKind::Knight => gen_steps(game, from, piece.owner, &KNIGHT, 1, mode, &mut out),
        PieceKind::Rook => {
            gen_steps(game, from, piece.owner, &ORTHOGONAL, SLIDE_RANGE, mode, &mut out)
        }
        PieceKind::Pawn => gen_pawn(game, from, piece, mode, &mut out),
    }
    out
}

fn push_candidate(game: &Game, out: &mut MoveList, mv: Move, mode: GenMode) {
    if !mv.to.is_valid() {
        return;
    }
    if mode == GenMode::Legal && !legality::is_legal(game, mv) {
        return;
    }
    out.push(mv);
}

/// Walk each direction up to `range` steps. Empty squares continue the ray,
/// the first occupied square ends it (yielding a capture if it is an enemy).
fn gen_steps(
    game: &Game,
    from: Position,
    mover: Player,
    dirs: &[(i8, i8)],
    range: u8,
    mode: GenMode,
    out: &mut MoveList,
) {
    let enemy = mover.enemy();
    for &(df, dr) in dirs {
        let mut to = from;
        for _ in 0..range {
            to = to.offset(df, dr);
            if !to.is_valid() {
                break;
            }
            let target = game.board.piece_at(to);
            if target.is_empty() {
                if mode.reports_empty_squares() {
                    let mv = Move {
                        is_capture: mode.is_probe(),
                        ..Move::new(from, to)
                    };
                    push_candidate(game, out, mv, mode);
                }
            } else if target.owner == enemy {
                push_candidate(game, out, Move::capture(from, to), mode);
                break;
            } else {
                break;
            }
        }
    }
}

fn gen_king(game: &Game, from: Position, mover: Player, mode: GenMode, out: &mut MoveList) {
    gen_steps(game, from, mover, &ORTHOGONAL, 1, mode, out);
    gen_steps(game, from, mover, &DIAGONAL, 1, mode, out);

    if mode != GenMode::Legal {
        return;
    }
    for (rook_file, king_to_file) in [(QUEENSIDE_ROOK_FILE, 2), (KINGSIDE_ROOK_FILE, 6)] {
        if is_castling_possible(game, from, rook_file) {
            let mv = Move::castling(from, Position::new(king_to_file, from.rank));
            push_candidate(game, out, mv, mode);
        }
    }
}

fn gen_pawn(game: &Game, from: Position, pawn: Piece, mode: GenMode, out: &mut MoveList) {
    let dir = pawn.owner.pawn_direction();
    let enemy = pawn.owner.enemy();

    // pushes
    if mode == GenMode::Legal {
        let one = from.offset(0, dir);
        if game.board.is_empty(one) {
            push_candidate(game, out, Move::new(from, one), mode);

            let two = from.offset(0, 2 * dir);
            if from.rank == pawn.owner.pawn_start_rank() && game.board.is_empty(two) {
                push_candidate(game, out, Move::new(from, two), mode);
            }
        }
    }

    // diagonal captures; an attack probe reports both squares whatever stands there
    let probe_all = mode == GenMode::Probe { quiet: true };
    for df in [1, -1] {
        let to = from.offset(df, dir);
        if probe_all || game.board.is_owned_by(to, enemy) {
            push_candidate(game, out, Move::capture(from, to), mode);
        }
    }

    if mode == GenMode::Legal {
        if let Some(file) = en_passant_target_file(game, from, pawn) {
            let mv = Move::en_passant(from, Position::new(file, from.rank + dir));
            push_candidate(game, out, mv, mode);
        }
    }
}

/// Whether the king on `king_square` may castle with the rook on `rook_file`
/// of the same rank.
///
/// Both pieces must never have moved, the king must stand on its home square and
/// not be in check, the squares between them must be empty, and neither the
/// square the king crosses nor the one it lands on may be attacked.
pub fn is_castling_possible(game: &Game, king_square: Position, rook_file: i8) -> bool {
    let rank = king_square.rank;
    let king = game.board.occupant_at(king_square);
    let rook = game.board.occupant_at(Position::new(rook_file, rank));

    if king.kind != PieceKind::King || rook.kind != PieceKind::Rook {
        return false;
    }
    if king.owner != rook.owner || king.has_moved() || rook.has_moved() {
        return false;
    }
    if king_square.file != KING_HOME_FILE || king_square.rank != king.owner.home_rank() {
        return false;
    }
    let (transit_file, landing_file) = match rook_file {
        QUEENSIDE_ROOK_FILE => (3, 2),
        KINGSIDE_ROOK_FILE => (5, 6),
        _ => return false,
    };

    let (lo, hi) = if rook_file < king_square.file {
        (rook_file + 1, king_square.file)
    } else {
        (king_square.file + 1, rook_file)
    };
    if (lo..hi).any(|file| !game.board.is_empty(Position::new(file, rank))) {
        return false;
    }

    if attacks::is_in_check(game, king.owner) {
        return false;
    }
    let enemy = king.owner.enemy();
    [transit_file, landing_file]
        .iter()
        .all(|&file| !attacks::is_square_attacked_by(game, Position::new(file, rank), enemy))
}

/// File of the enemy pawn the pawn on `pawn_square` may take en passant.
///
/// Only the immediately preceding ply counts: it must have been a two-square
/// advance by an enemy pawn that landed right beside this one.
pub fn en_passant_target_file(game: &Game, pawn_square: Position, pawn: Piece) -> Option<i8> {
    if game.ply == 0 || pawn.kind != PieceKind::Pawn {
        return None;
    }
    let last = game.last_move?;
    let moved = game.board.piece_at(last.to);
    if moved.kind != PieceKind::Pawn || moved.owner != pawn.owner.enemy() {
        return None;
    }
    if last.to.rank != pawn_square.rank {
        return None;
    }
    if (last.to.rank - last.from.rank).abs() != 2 {
        return None;
    }
    if (last.to.file - pawn_square.file).abs() != 1 {
        return None;
    }
    Some(last.to.file)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod tests;
