//! Public game orchestration: turn, ply, promotion and termination state.

use tracing::{debug, info, trace};

use crate::{
    attacks,
    board::{Board, Occupant},
    error::GameError,
    movegen::{self, GenMode},
    types::*,
};

/// A chess game in progress.
///
/// `Game` is a plain value: cloning it yields a fully independent copy, which
/// is how the legality filter tries moves out without touching the live game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) ply: u32,
    pub(crate) last_move: Option<Move>,
    pub(crate) phase: GamePhase,
    pub(crate) promotion_square: Option<Position>,
    pub(crate) winner: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            current_player: Player::White,
            ply: 0,
            last_move: None,
            phase: GamePhase::AwaitingMove,
            promotion_square: None,
            winner: Player::None,
        }
    }

    /// Start from an arbitrary board with `to_move` on move.
    ///
    /// The position is evaluated straight away, so a board that is already
    /// checkmate or stalemate yields an ended game. `Player::None` owns no
    /// pieces, so with it on move the game ends at once as a draw.
    pub fn with_board(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            current_player: to_move,
            ..Self::new()
        };
        game.evaluate_termination();
        game
    }

    pub fn clone_state(&self) -> Self {
        self.clone()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, pos: Position) -> Piece {
        self.board.piece_at(pos)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// `Player::None` while the game runs and after a draw.
    pub fn winner(&self) -> Player {
        self.winner
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn promotion_square(&self) -> Option<Position> {
        self.promotion_square
    }

    /// Legal moves of the piece on `pos`.
    ///
    /// Empty for empty or off-board squares, for pieces of the side not on
    /// move, and whenever the game is not awaiting a move.
    pub fn legal_moves(&self, pos: Position) -> MoveList {
        if self.phase != GamePhase::AwaitingMove
            || !self.board.is_owned_by(pos, self.current_player)
        {
            return Vec::new();
        }
        movegen::generate(self, pos, GenMode::Legal)
    }

    /// Every legal move of the side on move.
    pub fn all_legal_moves(&self) -> MoveList {
        self.board
            .squares_of(self.current_player)
            .flat_map(|pos| self.legal_moves(pos))
            .collect()
    }

    /// Enemy pieces the piece on `pos` currently attacks, regardless of turn
    /// or whether capturing them would be legal.
    pub fn threats_from(&self, pos: Position) -> MoveList {
        movegen::generate(self, pos, GenMode::Probe { quiet: false })
    }

    pub fn is_square_attacked_by(&self, pos: Position, player: Player) -> bool {
        attacks::is_square_attacked_by(self, pos, player)
    }

    pub fn is_in_check(&self, player: Player) -> bool {
        attacks::is_in_check(self, player)
    }

    /// Play `mv`, which must come from [`Game::legal_moves`] for this turn.
    ///
    /// The move itself is not re-validated against the board.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Ended => {
                trace!(?mv, "move rejected, game over");
                return Err(GameError::GameEnded);
            }
            GamePhase::AwaitingPromotion => {
                trace!(?mv, "move rejected, promotion pending");
                return Err(GameError::PromotionPending);
            }
            GamePhase::AwaitingMove => {}
        }
        debug!(
            ply = self.ply,
            player = ?self.current_player,
            from = ?mv.from,
            to = ?mv.to,
            capture = mv.is_capture,
            "applying move"
        );
        self.apply_and_advance(mv);
        Ok(())
    }

    /// Resolve a pending promotion, then hand the turn over.
    pub fn promote(&mut self, kind: PieceKind) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Ended => return Err(GameError::GameEnded),
            GamePhase::AwaitingMove => return Err(GameError::NotAwaitingPromotion),
            GamePhase::AwaitingPromotion => {}
        }
        let square = self.promotion_square.ok_or(GameError::NoPromotionSquare)?;
        if !kind.is_promotion_target() {
            trace!(?kind, "promotion rejected");
            return Err(GameError::InvalidPromotion(kind));
        }

        let pawn = self.board.occupant_at(square);
        self.board.set_occupant(square, Occupant { kind, ..pawn });
        debug!(?square, ?kind, player = ?pawn.owner, "pawn promoted");

        self.promotion_square = None;
        self.phase = GamePhase::AwaitingMove;
        self.current_player = self.current_player.enemy();
        self.evaluate_termination();
        Ok(())
    }

    /// End the game with no winner.
    pub fn declare_draw(&mut self) -> Result<(), GameError> {
        self.force_end(Player::None)
    }

    /// End the game with `winner`; `Player::None` is a draw.
    pub fn set_winner(&mut self, winner: Player) -> Result<(), GameError> {
        self.force_end(winner)
    }

    /// `player` gives up; the opponent wins. `Player::None` cannot resign.
    pub fn resign(&mut self, player: Player) -> Result<(), GameError> {
        if player == Player::None {
            trace!("resignation rejected, no player");
            return Err(GameError::NoPlayer);
        }
        self.force_end(player.enemy())
    }

    fn force_end(&mut self, winner: Player) -> Result<(), GameError> {
        if self.phase == GamePhase::Ended {
            return Err(GameError::GameEnded);
        }
        self.phase = GamePhase::Ended;
        self.promotion_square = None;
        self.winner = winner;
        info!(ply = self.ply, ?winner, "game ended by host");
        Ok(())
    }

    /// Checkmate / stalemate detection for the side now on move.
    pub(crate) fn evaluate_termination(&mut self) {
        let has_move = self
            .board
            .squares_of(self.current_player)
            .any(|pos| !self.legal_moves(pos).is_empty());
        if has_move {
            return;
        }

        if self.is_in_check(self.current_player) {
            self.winner = self.current_player.enemy();
            info!(ply = self.ply, winner = ?self.winner, "checkmate");
        } else {
            info!(ply = self.ply, stalemated = ?self.current_player, "stalemate");
        }
        self.phase = GamePhase::Ended;
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
