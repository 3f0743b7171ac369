//! Tournament CLI
//!
//! Run matches between engines and save the games.

use anyhow::{bail, Context, Result};
use chess_core::Engine;
use chess_simulator::{SearchSide, Simulator, SimulatorConfig};
use minimax_engine::{MinimaxEngine, TerminalScoring};
use random_engine::RandomEngine;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tournament::{MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess Simulator Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [options]");
    println!();
    println!("Options:");
    println!("  --games, -g N       games to play (default 10)");
    println!("  --depth, -d D       search depth in plies (default 3)");
    println!("  --max-moves, -m M   ply cap per game (default 200)");
    println!("  --movetime MS       time budget per move");
    println!("  --fen \"<fen>\"       start position for every game");
    println!("  --output, -o FILE   save results as JSON");
    println!();
    println!("Engines:");
    println!("  simulator[:white|black|both]  - Minimax for the given side, random for the other");
    println!("  minimax[:mate_aware]          - Minimax for both sides");
    println!("  random                        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match simulator random --games 20 --depth 3");
    println!("  tournament match minimax:mate_aware minimax --games 4 -o results.json");
}

fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    let (kind, variant) = match spec.split_once(':') {
        Some((kind, variant)) => (kind, Some(variant)),
        None => (spec, None),
    };

    let engine: Box<dyn Engine> = match kind.to_lowercase().as_str() {
        "simulator" | "sim" => {
            let search_side = match variant {
                Some(side) => side.parse::<SearchSide>()?,
                None => SearchSide::default(),
            };
            let config = SimulatorConfig {
                search_side,
                ..SimulatorConfig::default()
            };
            Box::new(Simulator::new(config)?)
        }
        "minimax" => {
            let scoring = match variant {
                Some(scoring) => scoring.parse::<TerminalScoring>()?,
                None => TerminalScoring::default(),
            };
            Box::new(MinimaxEngine::new().with_terminal_scoring(scoring))
        }
        "random" => Box::new(RandomEngine::new()),
        _ => bail!("unknown engine: {spec}"),
    };
    Ok(engine)
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .get(i + 1)
        .with_context(|| format!("{flag} needs a value"))?;
    raw.parse()
        .with_context(|| format!("invalid value {raw:?} for {flag}"))
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments
    let mut config = MatchConfig::default();
    let mut output: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => config.num_games = parse_value(args, i, "--games")?,
            "--depth" | "-d" => config.depth = parse_value(args, i, "--depth")?,
            "--max-moves" | "-m" => config.max_moves = parse_value(args, i, "--max-moves")?,
            "--movetime" => {
                let ms: u64 = parse_value(args, i, "--movetime")?;
                config.time_per_move = Some(Duration::from_millis(ms));
            }
            "--fen" => config.start_fen = Some(parse_value(args, i, "--fen")?),
            "--output" | "-o" => output = Some(parse_value(args, i, "--output")?),
            other => bail!("unknown option: {other}"),
        }
        i += 2;
    }

    if config.depth == 0 {
        bail!("--depth must be at least 1");
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Max plies: {}",
        config.num_games, config.depth, config.max_moves
    );
    println!();

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    let runner = MatchRunner::new(config).context("invalid match configuration")?;
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut results = TournamentResults::new(
        &format!("{} vs {}", engine1_spec, engine2_spec),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        TournamentConfig::from(runner.config()),
    );
    results.add_match(engine1_spec, engine2_spec, result);

    if let Some(path) = output {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            bail!("unknown command: {}", args[1]);
        }
    }
}
