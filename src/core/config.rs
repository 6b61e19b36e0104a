//! Game selection and engine configuration.
//!
//! - `GameType`: the closed set of supported rule sets
//! - `EngineConfig`: board size and undo budget for one engine instance
//!
//! Sizes are validated once, at engine construction; nothing downstream
//! re-checks them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{GameError, Result};

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 8;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 19;

/// Undos allowed per color per game unless configured otherwise.
pub const DEFAULT_MAX_UNDO: u32 = 3;

/// The supported games.
///
/// Serialized with lowercase tags (`"gomoku"`, `"go"`, `"reversi"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Five-in-a-row.
    Gomoku,
    /// Enclosing-capture game.
    Go,
    /// Disc-flipping game.
    Reversi,
}

impl GameType {
    /// Every supported game.
    pub const ALL: [GameType; 3] = [GameType::Gomoku, GameType::Go, GameType::Reversi];

    /// Lowercase record tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            GameType::Gomoku => "gomoku",
            GameType::Go => "go",
            GameType::Reversi => "reversi",
        }
    }

    /// Board size used when the caller does not pick one.
    #[must_use]
    pub const fn default_board_size(self) -> usize {
        match self {
            GameType::Gomoku => 15,
            GameType::Go => 19,
            GameType::Reversi => 8,
        }
    }

    /// The only size this game can be played on, if it is fixed.
    #[must_use]
    pub const fn fixed_board_size(self) -> Option<usize> {
        match self {
            GameType::Reversi => Some(8),
            GameType::Gomoku | GameType::Go => None,
        }
    }

    /// Check a board size against the global range and any fixed size.
    pub fn validate_board_size(self, size: usize) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        match self.fixed_board_size() {
            Some(required) if required != size => Err(GameError::FixedBoardSize {
                game: self,
                required,
                found: size,
            }),
            _ => Ok(()),
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameType::Gomoku => "Gomoku",
            GameType::Go => "Go",
            GameType::Reversi => "Reversi",
        }
    }
}

impl FromStr for GameType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        GameType::ALL
            .into_iter()
            .find(|game| game.tag() == normalized)
            .ok_or_else(|| GameError::UnknownGameType { tag: s.to_string() })
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board edge length (8..=19).
    pub board_size: usize,

    /// Undos each color may take over the whole game.
    pub max_undo: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: GameType::Gomoku.default_board_size(),
            max_undo: DEFAULT_MAX_UNDO,
        }
    }
}

impl EngineConfig {
    /// Config for a given board size with the default undo budget.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Config using a game's default board size.
    #[must_use]
    pub fn for_game(game: GameType) -> Self {
        Self::new(game.default_board_size())
    }

    /// Override the board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Override the undo budget.
    #[must_use]
    pub fn with_max_undo(mut self, max_undo: u32) -> Self {
        self.max_undo = max_undo;
        self
    }
}
