use crate::board::{is_promotion_rank, Position, DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::types::*;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Moves come out in a fixed order: origin square ascending (a1 first), then
/// the per-piece direction order below. Search tie-breaking relies on this.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(pos, from, pc.color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, from, pc.color, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(pos, from, pc.color, out, &DIAGONALS);
                gen_slider(pos, from, pc.color, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, out, &KING_DELTAS);
                gen_castle(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if is_promotion_rank(c, to) {
        for pk in PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank): (i8, i8) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    // forward 1, then 2 from the start rank
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, c, out);

            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let to = match sq(f + df, r + dir) {
            Some(to) => to,
            None => continue,
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            Some(_) => {}
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            None => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

struct CastleSide {
    right: bool,
    rook_sq: u8,
    king_to: u8,
    must_be_empty: &'static [u8],
    must_be_safe: &'static [u8],
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (king_from, sides) = match c {
        Color::White => (
            4u8,
            [
                CastleSide {
                    right: pos.castling.wk,
                    rook_sq: 7,
                    king_to: 6,
                    must_be_empty: &[5, 6],
                    must_be_safe: &[5, 6],
                },
                CastleSide {
                    right: pos.castling.wq,
                    rook_sq: 0,
                    king_to: 2,
                    must_be_empty: &[3, 2, 1],
                    must_be_safe: &[3, 2],
                },
            ],
        ),
        Color::Black => (
            60u8,
            [
                CastleSide {
                    right: pos.castling.bk,
                    rook_sq: 63,
                    king_to: 62,
                    must_be_empty: &[61, 62],
                    must_be_safe: &[61, 62],
                },
                CastleSide {
                    right: pos.castling.bq,
                    rook_sq: 56,
                    king_to: 58,
                    must_be_empty: &[59, 58, 57],
                    must_be_safe: &[59, 58],
                },
            ],
        ),
    };
    if from != king_from || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for side in sides {
        if !side.right || pos.piece_at(side.rook_sq) != Some(Piece::new(c, PieceKind::Rook)) {
            continue;
        }
        if side.must_be_empty.iter().any(|&s| pos.piece_at(s).is_some()) {
            continue;
        }
        if side.must_be_safe.iter().any(|&s| pos.is_square_attacked(s, enemy)) {
            continue;
        }
        let mut mv = Move::new(king_from, side.king_to);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
