//! Forsyth-Edwards Notation parsing and serialization.

use thiserror::Error;

use crate::board::{CastlingRights, Position};
use crate::types::*;

/// Reasons a FEN string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),
    #[error("board section must have 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("{0:?} must have exactly one king")]
    KingCount(Color),
    #[error("{0:?} is in check but not to move")]
    OpponentInCheck(Color),
}

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parses a FEN string. The half-move and full-move counters are
    /// optional and default to `0` and `1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let pc = Piece::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let s = sq(file, rank).ok_or(FenError::RankWidth { rank: rank as usize + 1 })?;
                    pos.set_piece(s, Some(pc));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth {
                        rank: rank as usize + 1,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank as usize + 1,
                });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }

        pos.en_passant = match parts[3] {
            "-" => None,
            s => Some(coord_to_sq(s).ok_or_else(|| FenError::InvalidEnPassant(s.to_string()))?),
        };

        pos.halfmove_clock = parse_counter(parts.get(4).copied().unwrap_or("0"))?;
        pos.fullmove_number = parse_counter(parts.get(5).copied().unwrap_or("1"))?;

        for color in [Color::White, Color::Black] {
            let kings = pos
                .board
                .iter()
                .filter(|pc| **pc == Some(Piece::new(color, PieceKind::King)))
                .count();
            if kings != 1 {
                return Err(FenError::KingCount(color));
            }
        }

        if let Some(ep) = pos.en_passant {
            if !en_passant_consistent(&pos, ep) {
                return Err(FenError::InvalidEnPassant(parts[3].to_string()));
            }
        }

        let waiting = pos.side_to_move.other();
        if pos.in_check(waiting) {
            return Err(FenError::OpponentInCheck(waiting));
        }

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);

        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let s = (rank as u8) * 8 + file as u8;
                match self.piece_at(s) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        out.push_str(&castling_field(&self.castling));

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

/// An en-passant target is only valid right behind an enemy pawn that has
/// just made a double push.
fn en_passant_consistent(pos: &Position, ep: u8) -> bool {
    let mover = pos.side_to_move;
    // Rank of the target square, and the step from it toward the pushed pawn.
    let (target_rank, dir) = match mover {
        Color::White => (5, -1),
        Color::Black => (2, 1),
    };
    let (f, r) = (file_of(ep), rank_of(ep));
    if r != target_rank || pos.piece_at(ep).is_some() {
        return false;
    }
    let origin_empty = sq(f, r - dir).is_some_and(|o| pos.piece_at(o).is_none());
    let pushed_pawn = sq(f, r + dir).and_then(|p| pos.piece_at(p));
    origin_empty && pushed_pawn == Some(Piece::new(mover.other(), PieceKind::Pawn))
}

fn parse_counter(s: &str) -> Result<u32, FenError> {
    s.parse()
        .map_err(|_| FenError::InvalidCounter(s.to_string()))
}

fn castling_field(c: &CastlingRights) -> String {
    let mut s = String::new();
    if c.wk {
        s.push('K');
    }
    if c.wq {
        s.push('Q');
    }
    if c.bk {
        s.push('k');
    }
    if c.bq {
        s.push('q');
    }
    if s.is_empty() {
        s.push('-');
    }
    s
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
