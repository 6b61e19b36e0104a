//! Serialized record shapes.
//!
//! ## GameRecord
//!
//! ```json
//! {
//!   "game_type": "go",
//!   "board_size": 9,
//!   "board": [[null, "B", ...], ...],
//!   "current_player": "W",
//!   "history": [{ "position": { "row": 0, "col": 1 }, "color": "B", "captures": [] }],
//!   "captured": { "B": 0, "W": 0 },
//!   "undo_used": { "B": 0, "W": 0 },
//!   "stones_remaining": { "B": 80, "W": 81 },
//!   "stones_on_board": { "B": 1, "W": 0 },
//!   "winner": null
//! }
//! ```
//!
//! `game_type`, `stones_remaining` and `stones_on_board` may be absent.
//!
//! ## ReplayRecord
//!
//! `{ "game_type": "reversi", "board_size": 8, "moves": [...] }`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{Color, GameError, GameType, Move, Position, Result};
use crate::rules::GameResult;

/// Complete snapshot of one engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub game_type: Option<GameType>,
    pub board_size: usize,
    pub board: Vec<Vec<Option<Color>>>,
    pub current_player: Color,
    #[serde(default)]
    pub history: Vec<Move>,
    #[serde(default)]
    pub captured: BTreeMap<Color, u32>,
    #[serde(default)]
    pub undo_used: BTreeMap<Color, u32>,
    #[serde(default)]
    pub stones_remaining: Option<BTreeMap<Color, u32>>,
    #[serde(default)]
    pub stones_on_board: Option<BTreeMap<Color, u32>>,
    #[serde(default)]
    pub winner: Option<GameResult>,
}

/// A game's move list, independent of any in-progress counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayRecord {
    pub game_type: GameType,
    pub board_size: usize,
    #[serde(default)]
    pub moves: Vec<Move>,
}

impl ReplayRecord {
    /// Record for a move list.
    #[must_use]
    pub fn new(game_type: GameType, board_size: usize, moves: Vec<Move>) -> Self {
        Self {
            game_type,
            board_size,
            moves,
        }
    }

    /// Check the board size against the game and every move against the
    /// board.
    pub fn validate(&self) -> Result<()> {
        self.game_type
            .validate_board_size(self.board_size)
            .map_err(|err| GameError::format(err.to_string()))?;
        if let Some(bad) = first_off_board(&self.moves, self.board_size) {
            return Err(GameError::format(format!(
                "replay references {bad} off a {size}x{size} board",
                size = self.board_size
            )));
        }
        Ok(())
    }
}

/// First placement or capture in `moves` that lies off a `size` board.
pub(crate) fn first_off_board(moves: &[Move], size: usize) -> Option<Position> {
    moves
        .iter()
        .flat_map(Move::cells)
        .find(|pos| pos.row >= size || pos.col >= size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_record_optional_fields() {
        let json = r#"{
            "board_size": 8,
            "board": [[null,null,null,null,null,null,null,null],
                      [null,null,null,null,null,null,null,null],
                      [null,null,null,null,null,null,null,null],
                      [null,null,null,"W","B",null,null,null],
                      [null,null,null,"B","W",null,null,null],
                      [null,null,null,null,null,null,null,null],
                      [null,null,null,null,null,null,null,null],
                      [null,null,null,null,null,null,null,null]],
            "current_player": "B",
            "history": [],
            "captured": {"B": 0, "W": 0},
            "undo_used": {"B": 1},
            "winner": null
        }"#;

        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.game_type, None);
        assert_eq!(record.stones_remaining, None);
        assert_eq!(record.undo_used.get(&Color::Black), Some(&1));
        assert_eq!(record.board[3][3], Some(Color::White));
    }

    #[test]
    fn test_move_record_shape() {
        let mv = Move::place(Position::new(2, 3), Color::Black, [Position::new(3, 3)]);
        let json = serde_json::to_value(&mv).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": { "row": 2, "col": 3 },
                "color": "B",
                "captures": [{ "row": 3, "col": 3 }]
            })
        );

        let pass: Move = serde_json::from_str(r#"{"position": null, "color": "W"}"#).unwrap();
        assert!(pass.is_pass());
        assert_eq!(pass.color(), Color::White);
    }

    #[test]
    fn test_replay_validate() {
        let ok = ReplayRecord::new(
            GameType::Gomoku,
            9,
            vec![Move::place(Position::new(8, 8), Color::Black, [])],
        );
        assert!(ok.validate().is_ok());

        let off_board = ReplayRecord::new(
            GameType::Gomoku,
            9,
            vec![Move::place(Position::new(9, 0), Color::Black, [])],
        );
        assert!(matches!(off_board.validate(), Err(GameError::Format { .. })));

        let wrong_size = ReplayRecord::new(GameType::Reversi, 10, Vec::new());
        assert!(matches!(wrong_size.validate(), Err(GameError::Format { .. })));
    }
}
