//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves. The simulator uses it for the side
//! that does not search, and the tournament runner uses it as a baseline any
//! real engine should beat.

use chess_core::{Engine, Position, Rules, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;


/// Uniformly random legal move, or `None` when the side to move has none.
pub fn random_move<R: Rules, G: Rng + ?Sized>(pos: &mut R, rng: &mut G) -> Option<R::Move> {
    let mut moves = Vec::with_capacity(64);
    pos.legal_moves_into(&mut moves);
    moves.choose(rng).copied()
}

/// A chess engine that plays random legal moves.
///
/// There is no evaluation. Unseeded engines draw from the thread-local
/// generator; [`RandomEngine::seeded`] gives a reproducible sequence.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
    rng: Option<StdRng>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Random legal move for the side to move in `pos`.
    pub fn pick(&mut self, pos: &Position) -> Option<chess_core::Move> {
        let mut pos_copy = pos.clone();
        let mv = match &mut self.rng {
            Some(rng) => random_move(&mut pos_copy, rng),
            None => random_move(&mut pos_copy, &mut rand::thread_rng()),
        };
        debug!(side = ?pos.side_to_move, mv = ?mv, "random move");
        mv
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let best_move = self.pick(pos);
        self.nodes = 1;

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
