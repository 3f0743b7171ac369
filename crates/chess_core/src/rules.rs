//! The rules capability consumed by search code.
//!
//! Searchers only need to enumerate, play and take back moves and to look at
//! the pieces on the board. Keeping that behind a trait lets a search run on
//! [`Position`] in production and on a scripted tree in tests.

use std::fmt::Debug;

use crate::board::{Position, Undo};
use crate::movegen::legal_moves_into;
use crate::types::{Color, Move, Piece};

pub trait Rules {
    type Move: Copy + PartialEq + Debug;
    /// State returned by [`Rules::apply`] and consumed by [`Rules::undo`].
    type Undo;

    /// All legal moves for the side to move, in a deterministic order.
    /// An empty buffer means checkmate or stalemate.
    fn legal_moves_into(&mut self, out: &mut Vec<Self::Move>);

    fn apply(&mut self, mv: Self::Move) -> Self::Undo;

    /// Reverts the most recent `apply` of `mv`. Undos must happen in reverse
    /// order of application.
    fn undo(&mut self, mv: Self::Move, undo: Self::Undo);

    fn piece_at(&self, sq: u8) -> Option<Piece>;

    fn side_to_move(&self) -> Color;

    /// Whether the side to move is in check.
    fn in_check(&self) -> bool;
}

impl Rules for Position {
    type Move = Move;
    type Undo = Undo;

    fn legal_moves_into(&mut self, out: &mut Vec<Move>) {
        legal_moves_into(self, out);
    }

    #[inline]
    fn apply(&mut self, mv: Move) -> Undo {
        self.make_move(mv)
    }

    #[inline]
    fn undo(&mut self, mv: Move, undo: Undo) {
        self.unmake_move(mv, undo);
    }

    #[inline]
    fn piece_at(&self, sq: u8) -> Option<Piece> {
        Position::piece_at(self, sq)
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn in_check(&self) -> bool {
        Position::in_check(self, self.side_to_move)
    }
}
