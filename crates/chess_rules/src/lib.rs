//! Rules engine for standard chess.
//!
//! The engine answers three questions for a host (a board UI, a game driver,
//! an agent): which moves may the piece on this square make, what happens when
//! one is played, and is the game over. Castling, en passant and promotion are
//! handled; notation, clocks and draw claims are left to the host.
//!
//! ```
//! use chess_rules::{Game, GamePhase, Player, Position};
//!
//! let mut game = Game::new();
//! let e2 = Position::new(4, 1);
//! let push = game
//!     .legal_moves(e2)
//!     .into_iter()
//!     .find(|mv| mv.to == Position::new(4, 3))
//!     .unwrap();
//! game.apply_move(push).unwrap();
//! assert_eq!(game.current_player(), Player::Black);
//! assert_eq!(game.phase(), GamePhase::AwaitingMove);
//! ```

mod apply;
pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod perft;
pub mod types;

pub use board::{Board, Occupant};
pub use error::GameError;
pub use game::Game;
pub use movegen::GenMode;
pub use perft::perft;
pub use types::*;

#[cfg(test)]
mod test_util;

// =============================================================================
// Agent trait: implemented by anything that picks moves for a side
// =============================================================================

/// A move-selection agent.
///
/// Agents only see the public game API; they never mutate the game
/// themselves. The driver applies what they return.
pub trait Agent: Send {
    /// Pick a move for the side on move, or `None` if there is none.
    fn select_move(&mut self, game: &Game) -> Option<Move>;

    /// Pick the piece a pawn on the back rank becomes.
    fn select_promotion(&mut self, _game: &Game) -> PieceKind {
        PieceKind::Queen
    }

    /// Returns the agent's name for logs and game records
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
