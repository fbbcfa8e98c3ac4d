//! Tests for session configuration loading and state snapshots.

use std::fs;
use tempfile::TempDir;

use noughts_core::{GameEngine, GameStatus, Mark, Session, SessionConfig};

#[test]
fn test_from_file_loads_names() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("noughts.toml");
    fs::write(&path, "player_x = \"Ada\"\nplayer_o = \"Grace\"\n").expect("Failed to write TOML");

    let config = SessionConfig::from_file(&path).expect("Load failed");
    let session = Session::from_config(&config);
    assert_eq!(session.names().name(Mark::X), "Ada");
    assert_eq!(session.names().name(Mark::O), "Grace");
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("Failed to write TOML");

    let config = SessionConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_blank_configured_name_falls_back() {
    let config = SessionConfig::from_toml("player_x = \"   \"").expect("valid toml");
    assert_eq!(config.player_names().name(Mark::X), "Player X");
}

#[test]
fn test_missing_file_is_error() {
    let err = SessionConfig::from_file("/this/path/does/not/exist.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_wrong_type_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "player_x = 7").expect("Failed to write TOML");

    assert!(SessionConfig::from_file(&path).is_err());
}

#[test]
fn test_status_and_scores_serialize_for_front_ends() {
    let engine = GameEngine::replay(&[0, 4, 1, 5, 2]).expect("valid replay");
    let json = serde_json::to_value(engine.status()).expect("serialize status");
    assert_eq!(
        json,
        serde_json::json!({ "Won": { "mark": "X", "line": [0, 1, 2] } })
    );

    let mut session = Session::default();
    for idx in [0, 4, 1, 5, 2] {
        session.play(idx).expect("valid move");
    }
    let scores = serde_json::to_value(session.scores()).expect("serialize scores");
    assert_eq!(scores, serde_json::json!({ "x": 1, "o": 0 }));

    let back: GameStatus = serde_json::from_value(json).expect("deserialize status");
    assert_eq!(back, engine.status());
}
