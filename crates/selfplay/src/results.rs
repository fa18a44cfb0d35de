//! Game records, match results and JSON reports

use chess_rules::{Move, PieceKind, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::SelfPlayConfig;
use crate::error::SelfPlayError;

/// Result of a single game from one agent's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// How a game came to an end
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// The ply cap was reached and the driver declared a draw.
    PlyLimit,
}

/// A promotion made during a game; `ply` is the ply of the pawn move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromotionRecord {
    pub ply: u32,
    pub kind: PieceKind,
}

/// Full record of one game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based index within the match
    pub game_number: u32,
    pub white: String,
    pub black: String,
    pub moves: Vec<Move>,
    pub promotions: Vec<PromotionRecord>,
    /// `Player::None` for a draw
    pub winner: Player,
    pub termination: Termination,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Result for White
    pub fn white_result(&self) -> GameResult {
        match self.winner {
            Player::White => GameResult::Win,
            Player::Black => GameResult::Loss,
            Player::None => GameResult::Draw,
        }
    }

    /// "1-0", "0-1" or "1/2"
    pub fn score_text(&self) -> &'static str {
        match self.white_result() {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first agent's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Everything a match produced, ready to be written to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub agent1: String,
    pub agent2: String,
    pub config: SelfPlayConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    /// Save the report as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), SelfPlayError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SelfPlayError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a report from a JSON file
    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SelfPlayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text summary
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.agent1, self.agent2));
        report.push_str(&format!(
            "Config: {} games, ply cap {}\n\n",
            self.config.num_games, self.config.max_plies
        ));

        report.push_str(&format!(
            "{:<6} {:<16} {:<16} {:>6} {:>6}  {}\n",
            "Game", "White", "Black", "Result", "Plies", "Ending"
        ));
        report.push_str(&"-".repeat(70));
        report.push('\n');

        for game in &self.games {
            report.push_str(&format!(
                "{:<6} {:<16} {:<16} {:>6} {:>6}  {:?}\n",
                game.game_number,
                game.white,
                game.black,
                game.score_text(),
                game.plies(),
                game.termination
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.agent1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
