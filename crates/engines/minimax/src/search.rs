//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from the point of view of the side that was to move at
//! the root (the maximizing side). The position is mutated in place and every
//! applied move is undone before the frame that applied it returns.

use std::str::FromStr;

use chess_core::{Color, Rules, TimeControl};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::eval::{evaluate, Score};

/// Window bound. Larger than any evaluation or mate score.
pub const INFINITY: Score = 1_000_000;

/// Base score of a checkmate under [`TerminalScoring::MateAware`].
pub const MATE_SCORE: Score = 100_000;

/// How nodes without legal moves are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalScoring {
    /// The static evaluation stands in for the result, so checkmate and
    /// stalemate are not told apart.
    #[default]
    Evaluate,
    /// Checkmate scores `MATE_SCORE` (sooner mates score higher) and
    /// stalemate scores 0.
    MateAware,
}

impl FromStr for TerminalScoring {
    type Err = SearchError;

    /// Accepts `evaluate` and `mate_aware` (or `mateaware`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "evaluate" => Ok(Self::Evaluate),
            "mate_aware" | "mateaware" => Ok(Self::MateAware),
            _ => Err(SearchError::UnknownTerminalScoring(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no legal moves in the root position")]
    NoLegalMoves,
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),
    #[error("unknown terminal scoring {0:?}, expected evaluate or mate_aware")]
    UnknownTerminalScoring(String),
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub terminal_scoring: TerminalScoring,
    /// Clock polled between root moves. `None` always scores every root move.
    pub time_control: Option<TimeControl>,
}

/// The move picked at the root together with search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    pub score: Score,
    pub nodes: u64,
    /// True if the clock ran out before every root move was scored.
    pub stopped: bool,
}

/// Per-search state threaded through the recursion.
#[derive(Debug, Clone)]
pub struct SearchContext {
    perspective: Color,
    terminal_scoring: TerminalScoring,
    nodes: u64,
}

impl SearchContext {
    pub fn new(perspective: Color, terminal_scoring: TerminalScoring) -> Self {
        Self {
            perspective,
            terminal_scoring,
            nodes: 0,
        }
    }

    pub fn perspective(&self) -> Color {
        self.perspective
    }

    /// Moves applied so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn terminal_score<R: Rules>(&self, pos: &R, depth: u8) -> Score {
        match self.terminal_scoring {
            TerminalScoring::Evaluate => evaluate(pos, self.perspective),
            TerminalScoring::MateAware if pos.in_check() => {
                // Remaining depth is larger the closer the mate is to the root.
                let mate = MATE_SCORE + depth as Score;
                if pos.side_to_move() == self.perspective {
                    -mate
                } else {
                    mate
                }
            }
            TerminalScoring::MateAware => 0,
        }
    }
}

/// Picks the move with the highest minimax score for the side to move.
///
/// Moves are tried in generation order and only a strictly better score
/// replaces the current best, so the first of several equal moves wins.
pub fn select_move<R: Rules>(
    pos: &mut R,
    depth: u8,
    options: &SearchOptions,
) -> Result<SearchOutcome<R::Move>, SearchError> {
    if depth == 0 {
        return Err(SearchError::InvalidDepth(depth));
    }

    let mut moves = Vec::with_capacity(64);
    pos.legal_moves_into(&mut moves);
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut ctx = SearchContext::new(pos.side_to_move(), options.terminal_scoring);
    let mut best = moves[0];
    let mut best_score = -INFINITY;
    let mut stopped = false;

    for (i, &mv) in moves.iter().enumerate() {
        // Only poll between root moves, and never before one has been scored.
        if i > 0 {
            if let Some(tc) = &options.time_control {
                if tc.check_time() {
                    stopped = true;
                    break;
                }
            }
        }

        let undo = pos.apply(mv);
        ctx.nodes += 1;
        let score = minimax_score(pos, depth - 1, -INFINITY, INFINITY, false, &mut ctx);
        pos.undo(mv, undo);

        trace!(?mv, score, "root move scored");

        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    debug!(
        depth,
        nodes = ctx.nodes,
        score = best_score,
        best = ?best,
        stopped,
        "search finished"
    );

    Ok(SearchOutcome {
        best_move: best,
        score: best_score,
        nodes: ctx.nodes,
        stopped,
    })
}

/// Minimax value of `pos` searched `depth` plies deep inside the window
/// `(alpha, beta)`, from `ctx`'s perspective.
///
/// `maximizing` is true when the perspective side is to move. Pruning only
/// skips moves that cannot change the returned value.
pub fn minimax_score<R: Rules>(
    pos: &mut R,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> Score {
    if depth == 0 {
        return evaluate(pos, ctx.perspective);
    }

    let mut moves = Vec::with_capacity(64);
    pos.legal_moves_into(&mut moves);
    if moves.is_empty() {
        return ctx.terminal_score(pos, depth);
    }

    if maximizing {
        let mut best = -INFINITY;
        for mv in moves {
            let undo = pos.apply(mv);
            ctx.nodes += 1;
            let score = minimax_score(pos, depth - 1, alpha, beta, false, ctx);
            pos.undo(mv, undo);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let undo = pos.apply(mv);
            ctx.nodes += 1;
            let score = minimax_score(pos, depth - 1, alpha, beta, true, ctx);
            pos.undo(mv, undo);

            best = best.min(score);
            beta = beta.min(score);
            if alpha >= beta {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
