//! Match runner for playing games between agents

use chess_rules::{Agent, Game, GameError, GamePhase, Player};
use tracing::{debug, info};

use crate::config::SelfPlayConfig;
use crate::error::SelfPlayError;
use crate::results::{GameResult, GameRecord, MatchResult, PromotionRecord, Termination};

/// Runs matches between two agents
pub struct MatchRunner {
    config: SelfPlayConfig,
}

impl MatchRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent1's perspective plus the record of every
    /// game in the order played.
    pub fn run_match(
        &self,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
    ) -> Result<(MatchResult, Vec<GameRecord>), SelfPlayError> {
        let mut result = MatchResult::new();
        let mut records = Vec::with_capacity(self.config.num_games as usize);

        for game_index in 0..self.config.num_games {
            // Alternate colors if configured
            let agent1_white = !self.config.alternate_colors || game_index % 2 == 0;
            let game_number = game_index + 1;

            let record = if agent1_white {
                self.play_game(game_number, agent1, agent2)?
            } else {
                self.play_game(game_number, agent2, agent1)?
            };

            // Flip result when agent1 had black
            let game_result = match (record.white_result(), agent1_white) {
                (r, true) => r,
                (GameResult::Win, false) => GameResult::Loss,
                (GameResult::Loss, false) => GameResult::Win,
                (GameResult::Draw, false) => GameResult::Draw,
            };
            result.record(game_result);

            info!(
                game = game_number,
                of = self.config.num_games,
                white = %record.white,
                black = %record.black,
                result = record.score_text(),
                ending = ?record.termination,
                plies = record.plies(),
                score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                "game finished"
            );
            records.push(record);
        }

        Ok((result, records))
    }

    /// Play a single game from the starting position
    pub fn play_game(
        &self,
        game_number: u32,
        white: &mut dyn Agent,
        black: &mut dyn Agent,
    ) -> Result<GameRecord, SelfPlayError> {
        let mut game = Game::new();
        white.new_game();
        black.new_game();
        debug!(game = game_number, white = white.name(), black = black.name(), "game started");

        let mut moves = Vec::new();
        let mut promotions = Vec::new();
        let mut hit_ply_limit = false;

        let rejected = |game: &Game, source: GameError| SelfPlayError::Rules {
            game: game_number,
            ply: game.ply(),
            source,
        };

        while game.phase() != GamePhase::Ended {
            if game.ply() >= self.config.max_plies {
                game.declare_draw().map_err(|e| rejected(&game, e))?;
                hit_ply_limit = true;
                break;
            }

            let agent: &mut dyn Agent = if game.current_player() == Player::White {
                &mut *white
            } else {
                &mut *black
            };

            let mv = agent.select_move(&game).ok_or_else(|| SelfPlayError::NoMove {
                agent: agent.name().to_string(),
                game: game_number,
                ply: game.ply(),
            })?;
            game.apply_move(mv).map_err(|e| rejected(&game, e))?;
            moves.push(mv);

            if game.phase() == GamePhase::AwaitingPromotion {
                let kind = agent.select_promotion(&game);
                game.promote(kind).map_err(|e| rejected(&game, e))?;
                promotions.push(PromotionRecord {
                    ply: game.ply() - 1,
                    kind,
                });
            }
        }

        let termination = if hit_ply_limit {
            Termination::PlyLimit
        } else if game.winner() == Player::None {
            Termination::Stalemate
        } else {
            Termination::Checkmate
        };

        Ok(GameRecord {
            game_number,
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves,
            promotions,
            winner: game.winner(),
            termination,
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod tests;
