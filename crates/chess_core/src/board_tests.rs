use super::*;
use crate::movegen::legal_moves;

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

#[test]
fn test_make_unmake_restores_every_field() {
    let positions = [
        Position::startpos(),
        // Kiwipete: castling both ways, pins, promotions nearby
        fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
        // En-passant available
        fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3"),
        // Promotions with and without capture
        fen("1n5k/P1P5/8/8/8/8/5p2/K5N1 b - - 0 1"),
    ];

    for original in positions {
        let mut pos = original.clone();
        for mv in legal_moves(&original) {
            let undo = pos.make_move(mv);
            assert_ne!(pos, original, "move {mv:?} left the position unchanged");
            pos.unmake_move(mv, undo);
            assert_eq!(pos, original, "unmake of {mv:?} did not restore the position");
        }
    }
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mut castle = Move::new(4, 6);
    castle.is_castle = true;
    pos.make_move(castle);

    assert_eq!(pos.piece_at(6), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(pos.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(pos.piece_at(7), None);
    assert!(!pos.castling.wk && !pos.castling.wq);
    assert!(pos.castling.bk && pos.castling.bq);
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let mut pos = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let mut ep = Move::new(36, 43);
    ep.is_en_passant = true;
    let undo = pos.make_move(ep);

    assert_eq!(pos.piece_at(35), None);
    assert_eq!(pos.piece_at(43), Some(Piece::new(Color::White, PieceKind::Pawn)));

    pos.unmake_move(ep, undo);
    assert_eq!(pos.piece_at(35), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(pos.piece_at(43), None);
}

#[test]
fn test_double_push_sets_en_passant_square() {
    let mut pos = Position::startpos();
    pos.make_move(Move::new(12, 28)); // e2e4
    assert_eq!(pos.en_passant, Some(20)); // e3
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(pos.halfmove_clock, 0);
}

#[test]
fn test_in_check_detection() {
    let pos = fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    assert!(pos.in_check(Color::White));
    assert!(!pos.in_check(Color::Black));

    let pos = fen("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1");
    assert!(pos.in_check(Color::White));
}

#[test]
fn test_position_key_ignores_move_counters() {
    let a = fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let b = fen("4k3/8/8/8/8/8/8/4K2R w K - 12 40");
    let c = fen("4k3/8/8/8/8/8/8/4K2R b K - 0 1");
    assert_eq!(a.position_key(), b.position_key());
    assert_ne!(a.position_key(), c.position_key());
}
