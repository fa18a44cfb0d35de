use crate::{attacks, game::Game, types::Move};

/// Whether `mv` keeps the mover's own king out of check.
///
/// The move is played on a scratch copy of the game; the live game is never
/// touched.
pub fn is_legal(game: &Game, mv: Move) -> bool {
    let mover = game.board.piece_at(mv.from).owner;
    let mut scratch = game.clone();
    scratch.apply_to_clone(mv);
    !attacks::is_in_check(&scratch, mover)
}
