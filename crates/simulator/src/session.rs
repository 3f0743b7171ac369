//! UCI protocol front end.
//!
//! UCI engines communicate via stdin/stdout. Only the commands a GUI or
//! match runner needs are understood; anything else is ignored.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use chess_core::{move_to_uci, position_from_uci, Engine, Position, SearchLimits};
use minimax_engine::TerminalScoring;
use tracing::{debug, warn};

use crate::Simulator;

pub struct UciSession<W: Write> {
    simulator: Simulator,
    pos: Position,
    out: W,
}

impl<W: Write> UciSession<W> {
    pub fn new(simulator: Simulator, out: W) -> Self {
        Self {
            simulator,
            pos: Position::startpos(),
            out,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if !self.handle_line(&line?)? {
                break;
            }
        }
        Ok(())
    }

    /// Handles one command line. Returns false on `quit`.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(true);
        };

        match command {
            "uci" => self.identify()?,
            "isready" => {
                writeln!(self.out, "readyok")?;
                self.out.flush()?;
            }
            "setoption" => self.set_option(&parts[1..]),
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.simulator.new_game();
            }
            "position" => match position_from_uci(&parts[1..]) {
                Ok(pos) => self.pos = pos,
                Err(e) => {
                    warn!(error = %e, "rejected position command");
                    writeln!(self.out, "info string {e}")?;
                    self.out.flush()?;
                }
            },
            "go" => self.go(&parts[1..])?,
            "quit" => return Ok(false),
            _ => debug!(command, "ignoring unknown command"),
        }
        Ok(true)
    }

    fn identify(&mut self) -> io::Result<()> {
        let config = self.simulator.config().clone();
        writeln!(self.out, "id name {}", self.simulator.name())?;
        writeln!(self.out, "id author {}", self.simulator.author())?;
        writeln!(
            self.out,
            "option name Depth type spin default {} min 1 max 16",
            config.depth
        )?;
        writeln!(
            self.out,
            "option name SearchSide type combo default {} var white var black var both",
            config.search_side
        )?;
        writeln!(
            self.out,
            "option name TerminalScoring type combo default {} var evaluate var mate_aware",
            match config.terminal_scoring {
                TerminalScoring::Evaluate => "evaluate",
                TerminalScoring::MateAware => "mate_aware",
            }
        )?;
        writeln!(
            self.out,
            "option name HonorTimeLimit type check default {}",
            config.honor_time_limit
        )?;
        writeln!(self.out, "uciok")?;
        self.out.flush()
    }

    /// setoption name <id> [value <x>]
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&x| x == "name");
        let value_at = args.iter().position(|&x| x == "value");
        let Some(name_at) = name_at else {
            warn!("setoption without a name");
            return;
        };

        let name_end = value_at.unwrap_or(args.len()).max(name_at + 1);
        let name = args[name_at + 1..name_end].join(" ");
        let value = value_at
            .map(|i| args[i + 1..].join(" "))
            .unwrap_or_default();

        if self.simulator.set_option(&name, &value) {
            debug!(%name, %value, "option set");
        } else {
            warn!(%name, %value, "unsupported option or value");
        }
    }

    /// go [depth <n>] [movetime <ms>]
    ///
    /// Missing values come from the configuration. Other time-control
    /// arguments are ignored.
    fn go(&mut self, args: &[&str]) -> io::Result<()> {
        let config = self.simulator.config();
        let mut depth = config.depth;
        let mut move_time = config.time_limit_ms;

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match args[i] {
                "depth" => {
                    if let Some(d) = value.and_then(|v| v.parse().ok()) {
                        depth = d;
                    }
                    i += 1;
                }
                "movetime" => {
                    if let Some(ms) = value.and_then(|v| v.parse().ok()) {
                        move_time = ms;
                    }
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }

        let limits = SearchLimits::depth_and_time(depth, Duration::from_millis(move_time));
        let result = self.simulator.search(&self.pos, limits);

        match result.best_move {
            Some(mv) => {
                writeln!(
                    self.out,
                    "info depth {} score cp {} nodes {}",
                    result.depth, result.score, result.nodes
                )?;
                writeln!(self.out, "bestmove {}", move_to_uci(mv))?;
            }
            None => writeln!(self.out, "bestmove 0000")?, // no moves
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
