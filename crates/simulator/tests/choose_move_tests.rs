//! The FEN in, UCI out boundary driven through a short game.

use chess_core::{parse_uci_move, Color, Position, STARTPOS_FEN};
use chess_simulator::{choose_move, SearchSide, Simulator, SimulatorConfig, SimulatorError};

#[test]
fn plays_a_game_through_fen_strings() {
    let mut sim = Simulator::new(SimulatorConfig {
        depth: 2,
        ..SimulatorConfig::default()
    })
    .unwrap()
    .with_random_seed(2024);

    let mut fen = STARTPOS_FEN.to_string();
    for _ in 0..30 {
        let Some(uci) = sim.choose_move(&fen, Some(5_000)).unwrap() else {
            break;
        };
        let mut pos = Position::from_fen(&fen).unwrap();
        let mv = parse_uci_move(&pos, &uci)
            .unwrap_or_else(|| panic!("{uci} is not legal in {fen}"));
        pos.make_move(mv);
        fen = pos.to_fen();
    }
}

#[test]
fn searching_side_is_deterministic() {
    let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    let first = choose_move(fen, 60_000).unwrap();
    let second = choose_move(fen, 60_000).unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn random_side_covers_several_moves() {
    let mut sim = Simulator::default();
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    assert_eq!(Position::from_fen(fen).unwrap().side_to_move, Color::Black);

    let distinct: std::collections::HashSet<_> = (0..50)
        .map(|_| sim.choose_move(fen, None).unwrap().unwrap())
        .collect();
    assert!(distinct.len() > 1);
}

#[test]
fn both_sides_search_when_configured() {
    let mut sim = Simulator::new(SimulatorConfig {
        search_side: SearchSide::Both,
        ..SimulatorConfig::default()
    })
    .unwrap();
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let first = sim.choose_move(fen, None).unwrap();
    for _ in 0..3 {
        assert_eq!(sim.choose_move(fen, None).unwrap(), first);
    }
}

#[test]
fn errors_name_the_problem() {
    let err = choose_move("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", 100)
        .unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidPosition(_)));
    assert!(err.to_string().starts_with("invalid position"));
}

#[test]
fn inconsistent_positions_are_refused() {
    // An en-passant target with White's own knight behind it.
    let err = choose_move("4k3/8/8/3PN3/8/8/8/4K3 w - e6 0 1", 100).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidPosition(_)));
    // Black is already in check with White to move.
    let err = choose_move("4k3/8/8/8/8/8/8/K3R3 w - - 0 1", 100).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidPosition(_)));
}
