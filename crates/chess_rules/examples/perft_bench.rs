//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth]
//!
//! Examples:
//!   # Default: depth 4 from the starting position
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p chess_rules -- 5

use chess_rules::{perft, Game};
use std::env;
use std::time::Instant;

fn main() {
    let depth: u8 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);

    let game = Game::new();

    println!("Position: start");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&game, depth.saturating_sub(2));
    }

    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&game, d);
        let elapsed = start.elapsed();

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!("depth {d}: {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }
}
