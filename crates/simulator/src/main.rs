//! Chess simulator CLI
//!
//! ```text
//! chess_simulator [--config <path>]                      UCI protocol on stdin/stdout
//! chess_simulator [--config <path>] move "<fen>" [ms]    print one move in UCI notation
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_simulator::{Simulator, SimulatorConfig, UciSession};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Chess Simulator");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  chess_simulator [--config <path>] [uci]");
    eprintln!("  chess_simulator [--config <path>] move \"<fen>\" [time_limit_ms]");
    eprintln!();
    eprintln!("Logging goes to stderr; set RUST_LOG=debug for search statistics.");
}

fn init_logging() {
    // stdout belongs to the UCI protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = SimulatorConfig::default();
    if let Some(i) = args.iter().position(|a| a == "--config" || a == "-c") {
        let Some(path) = args.get(i + 1).map(PathBuf::from) else {
            bail!("--config needs a path");
        };
        config = SimulatorConfig::load(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        args.drain(i..i + 2);
    }

    let simulator = Simulator::new(config).context("invalid configuration")?;

    match args.first().map(String::as_str) {
        None | Some("uci") => {
            let stdin = io::stdin();
            let mut session = UciSession::new(simulator, io::stdout());
            session.run(stdin.lock()).context("UCI session failed")?;
        }
        Some("move") => {
            let Some(fen) = args.get(1) else {
                print_usage();
                bail!("move needs a FEN string");
            };
            let time_limit_ms = match args.get(2) {
                Some(ms) => Some(
                    ms.parse::<u64>()
                        .with_context(|| format!("invalid time limit {ms:?}"))?,
                ),
                None => None,
            };
            run_move(simulator, fen, time_limit_ms)?;
        }
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }

    Ok(())
}

fn run_move(mut simulator: Simulator, fen: &str, time_limit_ms: Option<u64>) -> Result<()> {
    let mv = simulator
        .choose_move(fen, time_limit_ms)
        .with_context(|| format!("choosing a move for {fen:?}"))?;

    // An empty line means the side to move has no legal moves.
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", mv.unwrap_or_default())?;
    stdout.flush()?;
    Ok(())
}
