//! Attack detection.
//!
//! A square is attacked when some piece of the attacking side, generated in
//! probe mode with quiet probes, lands a capture-flagged candidate on it.
//! There are no precomputed tables and no caching; each query rescans the
//! attacker's pieces.

use crate::{
    game::Game,
    movegen::{self, GenMode},
    types::*,
};

pub fn is_square_attacked_by(game: &Game, square: Position, player: Player) -> bool {
    game.board.squares_of(player).any(|from| {
        movegen::generate(game, from, GenMode::Probe { quiet: true })
            .iter()
            .any(|mv| mv.is_capture && mv.to == square)
    })
}

/// False when `player` has no king on the board.
pub fn is_in_check(game: &Game, player: Player) -> bool {
    match game.board.king_square(player) {
        Some(ksq) => is_square_attacked_by(game, ksq, player.enemy()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod tests;
