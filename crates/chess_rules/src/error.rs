use thiserror::Error;

use crate::types::PieceKind;

/// Why a state-changing call on a [`Game`](crate::Game) was refused.
///
/// A refused call leaves the game exactly as it was, so the host can retry
/// with valid input. Queries never fail; only move application, promotion and
/// forced termination report errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game is over; nothing may be applied any more.
    #[error("the game has already ended")]
    GameEnded,

    /// A pawn reached the back rank and must be promoted before the next move.
    #[error("a pawn promotion must be resolved before the next move")]
    PromotionPending,

    /// `promote` was called while no pawn is waiting for promotion.
    #[error("no pawn is awaiting promotion")]
    NotAwaitingPromotion,

    /// The game is awaiting promotion but has no square recorded for it.
    #[error("no promotion square is recorded")]
    NoPromotionSquare,

    /// The call needs a real side; `Player::None` was given.
    #[error("no player given")]
    NoPlayer,

    /// Pawns may only become a queen, rook, bishop or knight.
    #[error("cannot promote a pawn to {0:?}")]
    InvalidPromotion(PieceKind),
}
