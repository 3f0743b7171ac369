use thiserror::Error;
use tracing::trace;

use crate::{board::Position, fen::FenError, movegen::legal_moves, types::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionCommandError {
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),
    #[error("expected 'startpos' or 'fen', found '{0}'")]
    UnknownSource(String),
    #[error("illegal or malformed move '{0}'")]
    IllegalMove(String),
}

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        let ch = match p {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// Resolves a UCI move string against the legal moves of `pos`, so the
/// castle and en-passant flags come from the generator.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if !txt.is_ascii() || txt.len() < 4 || txt.len() > 5 {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.as_bytes().get(4).map(|b| b.to_ascii_lowercase()) {
        None => None,
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

/// Builds a position from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields...> [moves ...]`.
pub fn position_from_uci(args: &[&str]) -> Result<Position, PositionCommandError> {
    let moves_idx = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_idx {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut pos = match setup.first() {
        None | Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
        Some(other) => return Err(PositionCommandError::UnknownSource(other.to_string())),
    };

    for txt in moves {
        let mv = parse_uci_move(&pos, txt)
            .ok_or_else(|| PositionCommandError::IllegalMove(txt.to_string()))?;
        pos.make_move(mv);
    }
    trace!(fen = %pos.to_fen(), moves = moves.len(), "position set up");
    Ok(pos)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
