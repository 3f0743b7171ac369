use super::*;

#[test]
fn test_move_to_uci() {
    assert_eq!(move_to_uci(Move::new(12, 28)), "e2e4");
    let mut promo = Move::new(48, 56);
    promo.promo = Some(PieceKind::Knight);
    assert_eq!(move_to_uci(promo), "a7a8n");
}

#[test]
fn test_parse_uci_move_resolves_flags() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e1g1").unwrap();
    assert!(mv.is_castle);

    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e5d6").unwrap();
    assert!(mv.is_en_passant);
}

#[test]
fn test_parse_uci_move_rejects_bad_input() {
    let pos = Position::startpos();
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "e2").is_none());
    assert!(parse_uci_move(&pos, "e2e4x").is_none());
    assert!(parse_uci_move(&pos, "é2e4").is_none());

    // Promotion moves need the piece letter.
    let pos = Position::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert!(parse_uci_move(&pos, "a7a8").is_none());
    assert_eq!(
        parse_uci_move(&pos, "a7a8q").and_then(|m| m.promo),
        Some(PieceKind::Queen)
    );
}

#[test]
fn test_position_from_uci_startpos_with_moves() {
    let pos = position_from_uci(&["startpos", "moves", "e2e4", "e7e5"]).unwrap();
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
    );
}

#[test]
fn test_position_from_uci_fen() {
    let args = ["fen", "4k3/8/8/8/8/8/8/4K2R", "w", "K", "-", "0", "1", "moves", "e1g1"];
    let pos = position_from_uci(&args).unwrap();
    assert_eq!(pos.piece_at(6), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(pos.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
}

#[test]
fn test_position_from_uci_errors() {
    assert_eq!(
        position_from_uci(&["startpos", "moves", "e2e5"]),
        Err(PositionCommandError::IllegalMove("e2e5".into()))
    );
    assert_eq!(
        position_from_uci(&["somewhere"]),
        Err(PositionCommandError::UnknownSource("somewhere".into()))
    );
    assert!(matches!(
        position_from_uci(&["fen", "garbage"]),
        Err(PositionCommandError::Fen(_))
    ));
}
