//! Material plus piece-square evaluation.

use chess_core::{mirror_sq, Color, Piece, PieceKind, Rules};

/// Centipawn score, positive when the perspective side is better.
pub type Score = i32;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [Score; 6] = [100, 320, 330, 500, 900, 20_000];

// Piece-square tables from White's point of view, a1 first (rank 1 at the
// top of each table). Black reads them through `mirror_sq`.
// These values are usually printed rank 8 first. Indexing that printed layout
// with a1 = 0 would put the +50 pawn row on rank 2, so keep this orientation.

#[rustfmt::skip]
const PAWN_TABLE: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
];

#[rustfmt::skip]
const KNIGHT_TABLE: [Score; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [Score; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [Score; 64] = [
      0,  0,  0,  5,  5,  0,  0,  0,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
      5, 10, 10, 10, 10, 10, 10,  5,  // 7th rank
      0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [Score; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// Middle-game table only; there is no phase detection.
#[rustfmt::skip]
const KING_TABLE: [Score; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

const TABLES: [&[Score; 64]; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

/// Base value plus square bonus for `piece` standing on `sq`.
#[inline]
pub fn piece_square_value(piece: Piece, sq: u8) -> Score {
    let idx = match piece.color {
        Color::White => sq,
        Color::Black => mirror_sq(sq),
    };
    PIECE_VALUES[piece.kind.idx()] + TABLES[piece.kind.idx()][idx as usize]
}

/// Evaluates the position from `perspective`'s point of view.
///
/// Returns a score in centipawns:
/// - Positive = good for `perspective`
/// - Negative = good for the opponent
/// - 0 = balanced (including an empty board)
///
/// The side to move plays no part in the score.
pub fn evaluate<R: Rules + ?Sized>(pos: &R, perspective: Color) -> Score {
    let mut score: Score = 0;

    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            let v = piece_square_value(pc, sq);
            score += if pc.color == perspective { v } else { -v };
        }
    }

    score
}

/// Material only, without square bonuses.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.idx()]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
