//! Random move agent
//!
//! Picks moves uniformly at random from all legal moves of the side on move.
//! Useful for:
//! - Driving self-play games through the rules engine
//! - Baseline comparisons (any real agent should easily beat this)
//! - Stress testing move generation

use chess_rules::{Agent, Game, Move, PieceKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// An agent that plays random legal moves.
///
/// It does no evaluation at all. With [`RandomAgent::seeded`] a whole series
/// of games is reproducible; the generator is not reset between games.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
    moves_played: u64,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            moves_played: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            moves_played: 0,
        }
    }

    /// Moves picked since the agent was created, across all games.
    pub fn moves_played(&self) -> u64 {
        self.moves_played
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        let moves = game.all_legal_moves();
        let choice = moves.choose(&mut self.rng).copied();
        if choice.is_some() {
            self.moves_played += 1;
        }
        trace!(candidates = moves.len(), ?choice, "random pick");
        choice
    }

    fn select_promotion(&mut self, _game: &Game) -> PieceKind {
        PieceKind::PROMOTIONS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PieceKind::Queen)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

}
