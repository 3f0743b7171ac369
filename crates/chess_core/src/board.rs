use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Position {
    /// An empty board with White to move and no castling rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position {
            castling: CastlingRights::all(),
            ..Position::empty()
        };

        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| self.board[s as usize] == Some(Piece::new(c, PieceKind::King)))
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    fn has_piece(&self, s: u8, by: Color, kinds: &[PieceKind]) -> bool {
        matches!(self.piece_at(s), Some(pc) if pc.color == by && kinds.contains(&pc.kind))
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A white pawn attacks upward, so it sits one rank below its target.
        let pawn_dirs: &[(i8, i8)] = match by {
            Color::White => &[(-1, -1), (1, -1)],
            Color::Black => &[(-1, 1), (1, 1)],
        };
        for (df, dr) in pawn_dirs {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.has_piece(s, by, &[PieceKind::Pawn]) {
                    return true;
                }
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.has_piece(s, by, &[PieceKind::Knight]) {
                    return true;
                }
            }
        }

        for (df, dr) in KING_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.has_piece(s, by, &[PieceKind::King]) {
                    return true;
                }
            }
        }

        let sliders: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, kinds) in sliders {
            for (df, dr) in dirs {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(s) = sq(f, r) {
                    if self.piece_at(s).is_some() {
                        if self.has_piece(s, by, &kinds) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }

        false
    }

    /// 100 half-moves without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut bishop_shades = [false; 2];

        for s in 0..64u8 {
            let pc = match self.piece_at(s) {
                Some(pc) => pc,
                None => continue,
            };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight => {
                    minors += 1;
                    knights += 1;
                }
                PieceKind::Bishop => {
                    minors += 1;
                    bishop_shades[((file_of(s) + rank_of(s)) % 2) as usize] = true;
                }
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        if minors <= 1 {
            return true;
        }
        knights == 0 && !(bishop_shades[0] && bishop_shades[1])
    }

    /// FNV-style key over placement, side, castling and en-passant, used for
    /// repetition detection. Move counters are not part of the key.
    pub fn position_key(&self) -> u64 {
        fn mix(mut h: u64, x: u64) -> u64 {
            h ^= x;
            h = h.wrapping_mul(0x100000001b3);
            h
        }

        let mut h = 0xcbf29ce484222325u64;
        h = mix(h, 1 + self.side_to_move.idx() as u64);
        h = mix(h, if self.castling.wk { 3 } else { 5 });
        h = mix(h, if self.castling.wq { 7 } else { 11 });
        h = mix(h, if self.castling.bk { 13 } else { 17 });
        h = mix(h, if self.castling.bq { 19 } else { 23 });
        if let Some(ep) = self.en_passant {
            h = mix(h, 29 + ep as u64);
        }
        for (i, s) in self.board.iter().enumerate() {
            let v = match s {
                Some(pc) => {
                    (i as u64) ^ ((pc.color.idx() as u64 + 1) << 6) ^ ((pc.kind.idx() as u64 + 1) << 8)
                }
                None => i as u64,
            };
            h = mix(h, v);
        }
        h
    }

    /// Plays `mv`, which must be legal in this position, and returns the
    /// state needed to take it back with [`Position::unmake_move`].
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let dir = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(to), rank_of(to) + dir) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        if moved.kind == PieceKind::Pawn && is_promotion_rank(moved.color, to) {
            let promo = mv.promo.unwrap_or(PieceKind::Queen);
            self.set_piece(to, Some(Piece::new(moved.color, promo)));
        }

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            if let Some((rf, rt)) = castle_rook_squares(moved.color, from, to) {
                if let Some(rook) = self.piece_at(rf) {
                    self.set_piece(rf, None);
                    self.set_piece(rt, Some(rook));
                    rook_move = Some((rf, rt));
                }
            }
        }

        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 0 {
                        self.castling.wq = false;
                    }
                    if from == 7 {
                        self.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 56 {
                        self.castling.bq = false;
                    }
                    if from == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }
        // A rook captured on its home square takes its castling right with it.
        if let Some(cp) = captured {
            if cp.kind == PieceKind::Rook {
                match (cp.color, to) {
                    (Color::White, 0) => self.castling.wq = false,
                    (Color::White, 7) => self.castling.wk = false,
                    (Color::Black, 56) => self.castling.bq = false,
                    (Color::Black, 63) => self.castling.bk = false,
                    _ => {}
                }
            }
        }

        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                self.en_passant = sq(file_of(from), (fr + tr) / 2);
            }
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moving piece goes back as it was, which also reverts promotions.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));

        match undo.ep_captured_sq {
            Some(cs) if mv.is_en_passant => self.set_piece(cs, undo.captured),
            _ => self.set_piece(mv.to, undo.captured),
        }
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) fn is_promotion_rank(c: Color, to: u8) -> bool {
    match c {
        Color::White => rank_of(to) == 7,
        Color::Black => rank_of(to) == 0,
    }
}

/// Rook (from, to) for a castling king move, e.g. e1g1 moves the rook h1f1.
fn castle_rook_squares(c: Color, king_from: u8, king_to: u8) -> Option<(u8, u8)> {
    match (c, king_from, king_to) {
        (Color::White, 4, 6) => Some((7, 5)),
        (Color::White, 4, 2) => Some((0, 3)),
        (Color::Black, 60, 62) => Some((63, 61)),
        (Color::Black, 60, 58) => Some((56, 59)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
