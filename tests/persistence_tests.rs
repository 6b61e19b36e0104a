//! Save files and snapshots.

use std::collections::BTreeMap;

use grid_games::core::{Color, GameError, GameType, Position};
use grid_games::games::AnyEngine;
use grid_games::persistence::{
    decode_snapshot, encode_snapshot, from_json, load_json, save_json, to_json, GameRecord,
};

fn reversi_in_progress() -> AnyEngine {
    let mut engine = AnyEngine::new(GameType::Reversi, 8).unwrap();
    for (row, col) in [(2, 3), (2, 2), (3, 2)] {
        engine.play(Position::new(row, col)).unwrap();
    }
    engine
}

/// Save to disk and resume into a fresh engine.
#[test]
fn test_save_and_resume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("game.json");
    let engine = reversi_in_progress();

    save_json(&path, &engine.serialize()).unwrap();
    let record: GameRecord = load_json(&path).unwrap();
    let resumed = AnyEngine::from_record(&record, 3).unwrap();

    assert_eq!(resumed.game_type(), GameType::Reversi);
    assert_eq!(resumed.serialize(), engine.serialize());
    assert_eq!(resumed.legal_positions(), engine.legal_positions());
}

/// The JSON shape uses color tags and nullable cells.
#[test]
fn test_record_json_shape() {
    let engine = reversi_in_progress();
    let json = to_json(&engine.serialize()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["game_type"], "reversi");
    assert_eq!(value["board_size"], 8);
    assert_eq!(value["current_player"], "W");
    assert_eq!(value["board"][0][0], serde_json::Value::Null);
    assert_eq!(value["board"][3][3], "B");
    assert_eq!(value["history"][0]["position"]["row"], 2);
    assert_eq!(value["history"][0]["captures"][0]["col"], 3);
    assert_eq!(value["stones_on_board"]["B"], 5);
    assert_eq!(value["winner"], serde_json::Value::Null);
}

/// Missing supply counters are rebuilt from the board.
#[test]
fn test_missing_counters_recounted() {
    let engine = reversi_in_progress();
    let mut record = engine.serialize();
    record.stones_remaining = None;
    record.stones_on_board = None;

    let restored = AnyEngine::from_record(&record, 3).unwrap();
    for color in Color::ALL {
        assert_eq!(restored.stones_on_board(color), engine.stones_on_board(color));
        assert_eq!(restored.stones_remaining(color), engine.stones_remaining(color));
    }
}

/// Partial counter maps default missing colors to zero.
#[test]
fn test_partial_undo_map() {
    let engine = reversi_in_progress();
    let mut record = engine.serialize();
    record.undo_used = BTreeMap::from([(Color::White, 2)]);

    let restored = AnyEngine::from_record(&record, 3).unwrap();
    assert_eq!(restored.undo_remaining(Color::Black), 3);
    assert_eq!(restored.undo_remaining(Color::White), 1);
}

/// Structural problems are `Format` errors and leave the engine intact.
#[test]
fn test_malformed_records() {
    let mut engine = reversi_in_progress();
    let before = engine.serialize();

    let mut short_row = before.clone();
    short_row.board[4].pop();
    assert!(matches!(engine.deserialize(&short_row), Err(GameError::Format { .. })));

    let mut off_board = before.clone();
    let json = to_json(&off_board.history[0]).unwrap().replace("\"row\": 2", "\"row\": 9");
    off_board.history[0] = from_json(&json).unwrap();
    assert!(matches!(engine.deserialize(&off_board), Err(GameError::Format { .. })));

    assert_eq!(engine.serialize(), before);
}

/// Unknown tags fail to parse.
#[test]
fn test_unknown_color_tag() {
    let engine = reversi_in_progress();
    let json = to_json(&engine.serialize())
        .unwrap()
        .replace("\"current_player\": \"W\"", "\"current_player\": \"G\"");
    assert!(matches!(from_json::<GameRecord>(&json), Err(GameError::Format { .. })));
}

/// Binary snapshots hold the same record.
#[test]
fn test_snapshot_round_trip() {
    let mut engine = AnyEngine::new(GameType::Go, 9).unwrap();
    engine.play(Position::new(4, 4)).unwrap();
    engine.pass_turn().unwrap();
    engine.pass_turn().unwrap();
    let record = engine.serialize();

    let bytes = encode_snapshot(&record).unwrap();
    let decoded: GameRecord = decode_snapshot(&bytes).unwrap();
    assert_eq!(decoded, record);

    let restored = AnyEngine::from_record(&decoded, 3).unwrap();
    assert_eq!(restored.result(), engine.result());
}

/// Stored counters must agree with the board and the fixed supply.
#[test]
fn test_counters_must_match_board() {
    let engine = AnyEngine::new(GameType::Go, 9).unwrap();
    let before = engine.serialize();

    let mut inflated = before.clone();
    inflated.stones_on_board = Some(BTreeMap::from([(Color::Black, 40), (Color::White, 0)]));
    assert!(matches!(
        AnyEngine::from_record(&inflated, 3),
        Err(GameError::Format { .. })
    ));

    let mut short_supply = before.clone();
    short_supply.stones_remaining = Some(BTreeMap::from([(Color::Black, 80), (Color::White, 81)]));
    assert!(matches!(
        AnyEngine::from_record(&short_supply, 3),
        Err(GameError::Format { .. })
    ));

    let mut target = AnyEngine::new(GameType::Go, 9).unwrap();
    target.play(Position::new(4, 4)).unwrap();
    let kept = target.serialize();
    assert!(target.deserialize(&inflated).is_err());
    assert_eq!(target.serialize(), kept);
}

/// History moves that undo can still reach must match the board.
#[test]
fn test_undoable_history_must_match_board() {
    let mut engine = AnyEngine::new(GameType::Gomoku, 9).unwrap();
    engine.play(Position::new(0, 0)).unwrap();
    let mut record = engine.serialize();
    record.board[0][0] = None;
    record.stones_remaining = None;
    record.stones_on_board = None;

    assert!(matches!(
        AnyEngine::from_record(&record, 3),
        Err(GameError::Format { .. })
    ));

    // Out of Black's undo budget the move can no longer be taken back.
    record.undo_used = BTreeMap::from([(Color::Black, 3)]);
    let mut loaded = AnyEngine::from_record(&record, 3).unwrap();
    assert!(matches!(
        loaded.undo(),
        Err(GameError::UndoBudgetExhausted { color: Color::Black })
    ));
}

/// Recorded captures and flips must fit the board they are undone on.
#[test]
fn test_undoable_captures_must_match_board() {
    let mut go = AnyEngine::new(GameType::Go, 9).unwrap();
    for (row, col) in [(0, 1), (0, 0), (1, 0)] {
        go.play(Position::new(row, col)).unwrap();
    }
    let mut record = go.serialize();
    assert_eq!(record.history[2].captures(), &[Position::new(0, 0)]);
    record.board[0][0] = Some(Color::Black);
    record.stones_remaining = None;
    record.stones_on_board = None;
    assert!(matches!(
        AnyEngine::from_record(&record, 3),
        Err(GameError::Format { .. })
    ));

    let reversi = reversi_in_progress();
    let mut record = reversi.serialize();
    let flipped = record.history[2].captures()[0];
    record.board[flipped.row][flipped.col] = Some(Color::White);
    record.stones_remaining = None;
    record.stones_on_board = None;
    assert!(matches!(
        AnyEngine::from_record(&record, 3),
        Err(GameError::Format { .. })
    ));
}
