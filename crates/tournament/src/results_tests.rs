use super::*;
use crate::match_runner::{GameRecord, GameResult, Termination};

fn sample() -> TournamentResults {
    let mut results = TournamentResults::new(
        "simulator vs random",
        vec!["simulator".to_string(), "random".to_string()],
        TournamentConfig::default(),
    );
    results.add_match(
        "simulator",
        "random",
        MatchResult {
            wins: 1,
            losses: 0,
            draws: 1,
            games: vec![GameRecord {
                white: "Chess Simulator v0.1".to_string(),
                black: "Random v1.0".to_string(),
                start_fen: chess_core::STARTPOS_FEN.to_string(),
                moves: vec!["e2e4".to_string(), "e7e5".to_string()],
                result: GameResult::Draw,
                termination: Termination::MoveLimit,
            }],
        },
    );
    results
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("tournament_results_{}.json", std::process::id()));
    let results = sample();

    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.name, results.name);
    assert_eq!(loaded.config, results.config);
    let game = &loaded.matches[0].result.games[0];
    assert_eq!(game.moves, vec!["e2e4", "e7e5"]);
    assert_eq!(game.termination, Termination::MoveLimit);
}

#[test]
fn test_json_field_names() {
    let json = serde_json::to_string(&sample()).unwrap();
    assert!(json.contains("\"termination\":\"move_limit\""));
    assert!(json.contains("\"result\":\"Draw\""));
    assert!(!json.contains("start_fen\":null"));
}

#[test]
fn test_load_errors() {
    let missing = TournamentResults::load(Path::new("/nonexistent/results.json")).unwrap_err();
    assert!(matches!(missing, ResultsError::Io { .. }));

    let path = std::env::temp_dir().join(format!("tournament_bad_{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();
    let bad = TournamentResults::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(bad, ResultsError::Json(_)));
}

#[test]
fn test_report() {
    let report = sample().generate_report();
    assert!(report.starts_with("=== Tournament: simulator vs random ==="));
    assert!(report.contains("Participants: simulator, random"));
    assert!(report.contains("75.0%"));
}

#[test]
fn test_config_from_match_config() {
    let config = TournamentConfig::from(&MatchConfig {
        num_games: 4,
        depth: 2,
        time_per_move: Some(std::time::Duration::from_millis(250)),
        ..MatchConfig::default()
    });
    assert_eq!(config.games_per_match, 4);
    assert_eq!(config.search_depth, 2);
    assert_eq!(config.move_time_ms, Some(250));
    assert_eq!(config.start_fen, None);
}
