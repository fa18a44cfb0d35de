//! Self-play runner for the chess rules engine
//!
//! This crate provides infrastructure for:
//! - Running headless matches between two agents
//! - Recording every game move by move
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Ten random-vs-random games, reproducible
//! cargo run -p selfplay -- --games 10 --seed 42
//!
//! # Settings from a file, report written to disk
//! cargo run -p selfplay -- --config selfplay.toml --output report.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
