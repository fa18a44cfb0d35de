//! Self-play CLI
//!
//! Plays random-vs-random matches through the rules engine and writes a
//! JSON report.

use anyhow::{bail, Context, Result};
use random_engine::RandomAgent;
use selfplay::{MatchReport, MatchRunner, SelfPlayConfig};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--games N] [--max-plies N] [--seed S] [--output FILE]");
    println!();
    println!("Options:");
    println!("  --config, -c FILE   TOML file with match settings");
    println!("  --games, -g N       Number of games to play");
    println!("  --max-plies N       Declare a draw after N plies");
    println!("  --seed, -s S        Seed the agents for a reproducible match");
    println!("  --output, -o FILE   Write the JSON report to FILE");
    println!();
    println!("Logging follows RUST_LOG (default: info).");
}

/// Command-line values; each one overrides the config file when given.
#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    games: Option<u32>,
    max_plies: Option<u32>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    help: bool,
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{flag} needs a value"),
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" | "-c" => cli.config = Some(PathBuf::from(flag_value(args, i, flag)?)),
            "--games" | "-g" => {
                let value = flag_value(args, i, flag)?;
                cli.games = Some(value.parse().with_context(|| format!("bad game count {value:?}"))?);
            }
            "--max-plies" => {
                let value = flag_value(args, i, flag)?;
                cli.max_plies = Some(value.parse().with_context(|| format!("bad ply cap {value:?}"))?);
            }
            "--seed" | "-s" => {
                let value = flag_value(args, i, flag)?;
                cli.seed = Some(value.parse().with_context(|| format!("bad seed {value:?}"))?);
            }
            "--output" | "-o" => cli.output = Some(PathBuf::from(flag_value(args, i, flag)?)),
            "help" | "--help" | "-h" => {
                cli.help = true;
                i += 1;
                continue;
            }
            other => bail!("unknown argument {other:?}"),
        }
        i += 2;
    }

    Ok(cli)
}

fn build_config(cli: &CliArgs) -> Result<SelfPlayConfig> {
    let mut config = match &cli.config {
        Some(path) => SelfPlayConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SelfPlayConfig::default(),
    };

    if let Some(games) = cli.games {
        config.num_games = games;
    }
    if let Some(max_plies) = cli.max_plies {
        config.max_plies = max_plies;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.output.is_some() {
        config.output = cli.output.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        print_usage();
        return Ok(());
    }
    let config = build_config(&cli)?;

    let (mut agent1, mut agent2) = match config.seed {
        Some(seed) => (RandomAgent::seeded(seed), RandomAgent::seeded(seed.wrapping_add(1))),
        None => (RandomAgent::new(), RandomAgent::new()),
    };

    info!(
        games = config.num_games,
        max_plies = config.max_plies,
        seed = ?config.seed,
        "starting match"
    );

    let runner = MatchRunner::new(config);
    let (result, games) = runner.run_match(&mut agent1, &mut agent2)?;
    info!(
        random_1 = agent1.moves_played(),
        random_2 = agent2.moves_played(),
        "moves played per agent"
    );

    let report = MatchReport {
        agent1: "random-1".to_string(),
        agent2: "random-2".to_string(),
        config: runner.config().clone(),
        result,
        games,
    };
    report.print_report();

    if let Some(path) = &report.config.output {
        report.save(path)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
