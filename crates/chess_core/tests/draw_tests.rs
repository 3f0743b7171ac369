//! Game-end detection used by the match runner:
//! - Stalemate vs checkmate
//! - Fifty-move rule
//! - Insufficient material
//! - Repetition keys

use chess_core::{legal_moves, parse_uci_move, Color, Position};

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("test FEN must parse")
}

// =============================================================================
// Stalemate / Checkmate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let pos = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&pos).is_empty());
    assert!(!pos.in_check(Color::Black), "Stalemate means king is not in check");
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let pos = fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&pos).is_empty());
    assert!(!pos.in_check(Color::Black));
}

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let pos = fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(legal_moves(&pos).is_empty());
    assert!(pos.in_check(Color::Black), "Checkmate means king IS in check");
}

#[test]
fn test_check_is_not_checkmate() {
    let pos = fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(!legal_moves(&pos).is_empty());
    assert!(pos.in_check(Color::Black));
}

// =============================================================================
// Fifty-Move Rule
// =============================================================================

#[test]
fn test_fifty_move_rule_boundary() {
    assert!(fen("8/8/8/4k3/8/4K3/8/8 w - - 100 60").is_fifty_move_draw());
    assert!(!fen("8/8/8/4k3/8/4K3/8/8 w - - 99 60").is_fifty_move_draw());
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut pos = fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    let mv = parse_uci_move(&pos, "e2e4").unwrap();
    pos.make_move(mv);
    assert_eq!(pos.halfmove_clock, 0);
    assert!(!pos.is_fifty_move_draw());
}

// =============================================================================
// Insufficient Material
// =============================================================================

#[test]
fn test_insufficient_material() {
    for (fen_str, label) in [
        ("8/8/8/4k3/8/4K3/8/8 w - - 0 1", "K vs K"),
        ("8/8/8/4k3/8/4KB2/8/8 w - - 0 1", "K+B vs K"),
        ("8/8/8/4k3/8/4K3/8/5N2 w - - 0 1", "K+N vs K"),
        ("8/8/8/3bk3/8/4K3/8/8 w - - 0 1", "K vs K+B"),
        // c1 and f4 are both dark squares
        ("8/8/8/4k3/5b2/4K3/8/2B5 w - - 0 1", "K+B vs K+B same color"),
    ] {
        assert!(fen(fen_str).is_insufficient_material(), "{label} should be insufficient");
    }
}

#[test]
fn test_sufficient_material() {
    for (fen_str, label) in [
        ("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1", "pawn"),
        ("8/8/8/4k3/8/4KR2/8/8 w - - 0 1", "rook"),
        ("8/8/8/4k3/8/4KQ2/8/8 w - - 0 1", "queen"),
        ("8/8/8/4k3/8/4K3/8/3N1N2 w - - 0 1", "two knights"),
        ("8/8/8/4k3/8/3BK3/3B4/8 w - - 0 1", "opposite color bishops"),
    ] {
        assert!(!fen(fen_str).is_insufficient_material(), "{label} should be sufficient");
    }
}

// =============================================================================
// Repetition keys
// =============================================================================

#[test]
fn test_position_key_differs_on_rights_and_en_passant() {
    let base = fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    let no_ep = fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    let fewer_rights = fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b Kq e3 0 1");
    assert_ne!(base.position_key(), no_ep.position_key());
    assert_ne!(base.position_key(), fewer_rights.position_key());
}

#[test]
fn test_knight_shuffle_repeats_position_key() {
    let mut pos = fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let start = pos.position_key();
    let mut seen = vec![start];

    for _ in 0..2 {
        for txt in ["f3g1", "c6b8", "g1f3", "b8c6"] {
            let mv = parse_uci_move(&pos, txt).unwrap();
            pos.make_move(mv);
            seen.push(pos.position_key());
        }
    }

    assert_eq!(seen.iter().filter(|&&k| k == start).count(), 3);
    assert_eq!(pos.halfmove_clock, 10);
}
