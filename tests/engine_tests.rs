//! Shared state-machine behavior across all three rule sets.
//!
//! These tests drive engines only through the public protocol and check
//! the guarantees every game shares: turn order, atomic rejection, undo
//! budget, resignation, restart and serialization.

use grid_games::core::{Color, EngineConfig, GameError, GameType, IllegalMove, Position};
use grid_games::games::{AnyEngine, GomokuEngine, ReversiEngine};
use grid_games::rules::REASON_BOARD_FULL;

fn opening(game: GameType) -> Vec<Position> {
    match game {
        GameType::Gomoku | GameType::Go => vec![
            Position::new(2, 2),
            Position::new(6, 6),
            Position::new(2, 3),
            Position::new(6, 5),
        ],
        GameType::Reversi => vec![
            Position::new(2, 3),
            Position::new(2, 2),
            Position::new(3, 2),
            Position::new(2, 4),
        ],
    }
}

fn engine(game: GameType) -> AnyEngine {
    let size = game.fixed_board_size().unwrap_or(9);
    AnyEngine::new(game, size).unwrap()
}

/// Every placement appends one move and flips the side to move.
#[test]
fn test_turns_alternate() {
    for game in GameType::ALL {
        let mut engine = engine(game);
        for (i, &position) in opening(game).iter().enumerate() {
            let mover = engine.current_player();
            let mv = engine.play(position).unwrap();
            assert_eq!(mv.color(), mover, "{game}");
            assert_eq!(engine.current_player(), mover.opponent(), "{game}");
            assert_eq!(engine.history().len(), i + 1, "{game}");
        }
    }
}

/// Rejected placements leave grid, counters, turn and history untouched.
#[test]
fn test_rejections_are_atomic() {
    for game in GameType::ALL {
        let mut engine = engine(game);
        let first = opening(game)[0];
        engine.play(first).unwrap();
        let before = engine.serialize();

        let size = engine.board_size();
        assert!(matches!(
            engine.play(Position::new(size, 0)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert!(matches!(engine.play(first), Err(GameError::Occupied { .. })));

        assert_eq!(engine.serialize(), before, "{game}");
    }
}

/// Undo consumes the budget of the color that made the undone move.
#[test]
fn test_undo_budget_per_color() {
    let config = EngineConfig::new(9).with_max_undo(2);
    let mut engine = GomokuEngine::new(config).unwrap();

    for _ in 0..2 {
        engine.play(Position::new(0, 0)).unwrap();
        engine.undo().unwrap();
    }
    assert_eq!(engine.undo_remaining(Color::Black), 0);
    assert_eq!(engine.undo_remaining(Color::White), 2);

    engine.play(Position::new(0, 0)).unwrap();
    assert!(matches!(
        engine.undo(),
        Err(GameError::UndoBudgetExhausted { color: Color::Black })
    ));

    engine.play(Position::new(1, 1)).unwrap();
    assert_eq!(engine.undo().unwrap().color(), Color::White);
    assert_eq!(engine.undo_remaining(Color::White), 1);
}

#[test]
fn test_undo_empty_history() {
    for game in GameType::ALL {
        let mut engine = engine(game);
        assert!(matches!(engine.undo(), Err(GameError::NothingToUndo)));
    }
}

/// Resigning ends the game without recording a move; undo reopens it.
#[test]
fn test_resign() {
    let mut engine = engine(GameType::Go);
    engine.play(Position::new(4, 4)).unwrap();
    engine.resign(Color::White).unwrap();

    assert!(engine.result().unwrap().is_winner(Color::Black));
    assert_eq!(engine.history().len(), 1);
    assert!(matches!(engine.resign(Color::Black), Err(GameError::GameFinished)));
    assert!(matches!(
        engine.play(Position::new(0, 0)),
        Err(GameError::GameFinished)
    ));

    engine.undo().unwrap();
    assert!(!engine.is_finished());
}

/// Restart returns to the initial layout, counters and budgets.
#[test]
fn test_restart() {
    for game in GameType::ALL {
        let mut engine = engine(game);
        let fresh = engine.serialize();
        for &position in &opening(game) {
            engine.play(position).unwrap();
        }
        engine.undo().unwrap();
        engine.restart().unwrap();

        assert_eq!(engine.serialize(), fresh, "{game}");
    }
}

/// A full board without five in a row is a draw.
#[test]
fn test_gomoku_full_board_draw() {
    let mut engine = GomokuEngine::new(EngineConfig::new(8)).unwrap();
    // Two-wide color bands, shifted on every row; the longest run is three.
    let mut black = Vec::new();
    let mut white = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let band = (col + 2 * (row % 2) + (row / 2) % 2) / 2 % 2;
            if band == 0 {
                black.push(Position::new(row, col));
            } else {
                white.push(Position::new(row, col));
            }
        }
    }
    assert_eq!(black.len(), white.len());
    for (&b, &w) in black.iter().zip(&white) {
        engine.play(b).unwrap();
        engine.play(w).unwrap();
    }

    let result = engine.result().unwrap();
    assert!(result.is_draw());
    assert_eq!(result.reason(), REASON_BOARD_FULL);
}

/// Reversi passes only when the mover has no flipping placement.
#[test]
fn test_reversi_pass_rules() {
    let mut engine = ReversiEngine::new(EngineConfig::new(8)).unwrap();
    assert!(matches!(
        engine.pass_turn(),
        Err(GameError::IllegalMove {
            reason: IllegalMove::PassWithLegalMoves
        })
    ));
    assert!(engine.history().is_empty());
}

/// Gomoku never allows a pass.
#[test]
fn test_gomoku_pass_unsupported() {
    let mut engine = engine(GameType::Gomoku);
    assert!(matches!(
        engine.pass_turn(),
        Err(GameError::IllegalMove {
            reason: IllegalMove::PassUnsupported
        })
    ));
}

/// Serialize then deserialize into a fresh engine reproduces the state.
#[test]
fn test_serialize_round_trip() {
    for game in GameType::ALL {
        let mut engine = engine(game);
        for &position in &opening(game) {
            engine.play(position).unwrap();
        }
        engine.undo().unwrap();
        let record = engine.serialize();

        let mut restored = AnyEngine::new(game, engine.board_size()).unwrap();
        restored.deserialize(&record).unwrap();

        assert_eq!(restored.serialize(), record, "{game}");
        assert_eq!(restored.grid(), engine.grid(), "{game}");
        assert_eq!(restored.current_player(), engine.current_player(), "{game}");
        assert_eq!(restored.undo_remaining(Color::White), engine.undo_remaining(Color::White));
    }
}

/// Records for another board size are rejected.
#[test]
fn test_deserialize_size_mismatch() {
    let record = AnyEngine::new(GameType::Go, 9).unwrap().serialize();
    let mut engine = AnyEngine::new(GameType::Go, 13).unwrap();
    assert!(matches!(
        engine.deserialize(&record),
        Err(GameError::BoardSizeMismatch { expected: 13, found: 9 })
    ));
}

/// Records naming another game are rejected.
#[test]
fn test_deserialize_game_mismatch() {
    let record = AnyEngine::new(GameType::Go, 9).unwrap().serialize();
    let mut engine = AnyEngine::new(GameType::Gomoku, 9).unwrap();
    assert!(matches!(engine.deserialize(&record), Err(GameError::Format { .. })));
}

/// Legal positions are empty once the game is over.
#[test]
fn test_no_legal_positions_after_result() {
    let mut engine = engine(GameType::Gomoku);
    assert_eq!(engine.legal_positions().len(), 81);
    engine.resign(Color::Black).unwrap();
    assert!(engine.legal_positions().is_empty());
}
