//! Replay library tests: move application, failure reporting, snapshot I/O

use std::fs;

use chess_engine::{ChessEngineError, Color, Game, GameState, InvalidMoveReason, Position};
use chess_table::{load_game, replay, write_game, ReplayError};

#[test]
fn test_replay_counts_plies_and_reports_status() {
    let mut game = Game::new();
    let summary = replay(&mut game, ["f2f3", "e7e5", "g2g4", "d8h4"]).unwrap();

    assert_eq!(summary.plies, 4);
    assert_eq!(summary.status, GameState::Checkmate);
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn test_replay_stops_at_rejected_move() {
    let mut game = Game::new();
    let err = replay(&mut game, ["e2e4", "e7e5", "e1e3", "d2d4"]).unwrap_err();

    match err {
        ReplayError::Rejected { ply, mv, source } => {
            assert_eq!(ply, 3);
            assert_eq!(mv.to_string(), "e1e3");
            assert!(matches!(
                source,
                ChessEngineError::InvalidMove {
                    reason: InvalidMoveReason::IllegalMove,
                    ..
                }
            ));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    // The two plies before the failure stay applied
    assert_eq!(game.side_to_move(), Color::White);
    assert!(game.board().get_piece(Position::new(4, 5)).is_some());
    assert!(game.board().get_piece(Position::new(4, 4)).is_none());
}

#[test]
fn test_replay_reports_unreadable_move() {
    let mut game = Game::new();
    let err = replay(&mut game, ["e2e4", "castle"]).unwrap_err();

    assert!(matches!(err, ReplayError::Notation { ply: 2, .. }));
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_write_then_load_snapshot() {
    let mut game = Game::new();
    replay(&mut game, ["e2e4", "c7c5", "g1f3"]).unwrap();

    let path = std::env::temp_dir().join(format!("chess_replay_{}.json", std::process::id()));
    let file = fs::File::create(&path).unwrap();
    write_game(&game, file, true).unwrap();

    let loaded = load_game(Some(path.as_path())).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded, game);
    assert_eq!(loaded.side_to_move(), Color::Black);
}

#[test]
fn test_write_compact_is_one_line() {
    let mut out = Vec::new();
    write_game(&Game::new(), &mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 1);
    assert_eq!(Game::from_json(&text).unwrap(), Game::new());
}

#[test]
fn test_load_without_path_is_opening_position() {
    assert_eq!(load_game(None).unwrap(), Game::new());
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("chess_replay_does_not_exist.json");
    assert!(matches!(load_game(Some(path.as_path())), Err(ReplayError::Io(_))));
}
