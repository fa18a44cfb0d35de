//! Board mutation for a chosen move.
//!
//! There are two entry points. [`Game::apply_and_advance`] is the real one:
//! after moving pieces it hands the turn over and checks for mate.
//! [`Game::apply_to_clone`] only moves pieces, and is what the legality
//! filter runs on its scratch copy.

use tracing::debug;

use crate::{game::Game, types::*};

impl Game {
    pub(crate) fn apply_and_advance(&mut self, mv: Move) {
        self.apply_to_board(mv);
        if self.phase == GamePhase::AwaitingMove {
            self.current_player = self.current_player.enemy();
            self.evaluate_termination();
        } else {
            debug!(square = ?self.promotion_square, "awaiting promotion");
        }
    }

    pub(crate) fn apply_to_clone(&mut self, mv: Move) {
        self.apply_to_board(mv);
    }

    fn apply_to_board(&mut self, mv: Move) {
        let ply = self.ply;

        if mv.is_castling {
            // e->c takes the a-rook to d, e->g takes the h-rook to f
            let (rook_from_file, rook_to_file) = if mv.to.file == 2 { (0, 3) } else { (7, 5) };
            let rook_from = Position::new(rook_from_file, mv.from.rank);
            let rook_to = Position::new(rook_to_file, mv.to.rank);

            let king = self.board.occupant_at(mv.from);
            let rook = self.board.occupant_at(rook_from);
            self.board.clear(mv.from);
            self.board.clear(rook_from);
            self.board.set_occupant(mv.to, king.moved_at(ply));
            self.board.set_occupant(rook_to, rook.moved_at(ply));
        } else if mv.is_en_passant {
            // The captured pawn sits beside the origin, not on the destination.
            let pawn = self.board.occupant_at(mv.from);
            self.board.clear(mv.from);
            self.board.set_occupant(mv.to, pawn.moved_at(ply));
            self.board.clear(Position::new(mv.to.file, mv.from.rank));
        } else {
            let piece = self.board.occupant_at(mv.from);
            self.board.clear(mv.from);
            self.board.set_occupant(mv.to, piece.moved_at(ply));
            if piece.kind == PieceKind::Pawn && mv.to.rank == piece.owner.promotion_rank() {
                self.phase = GamePhase::AwaitingPromotion;
                self.promotion_square = Some(mv.to);
            }
        }

        self.ply += 1;
        self.last_move = Some(mv);
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
