use std::path::PathBuf;

use chess_rules::GameError;
use thiserror::Error;

/// Failures while running or persisting a self-play match.
#[derive(Debug, Error)]
pub enum SelfPlayError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid report: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine refused something the driver did; an agent returned a
    /// move or promotion that does not fit the game state.
    #[error("game {game} rejected a call at ply {ply}: {source}")]
    Rules {
        game: u32,
        ply: u32,
        source: GameError,
    },

    /// An agent had nothing to play although the game was still running.
    #[error("agent {agent} returned no move in game {game} at ply {ply}")]
    NoMove { agent: String, game: u32, ply: u32 },
}
