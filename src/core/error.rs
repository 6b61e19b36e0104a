//! Error types shared by every engine operation.
//!
//! Every rule violation is detected before the engine mutates anything, so
//! an `Err` from a public operation always leaves the game as it was.

use derive_more::{Display, Error};

use super::color::Color;
use super::config::GameType;
use super::position::Position;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

/// Rule-specific reasons a placement or pass is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// Disc-flipping placement that would turn over nothing.
    #[display("placement flips no discs")]
    NoFlips,
    /// Enclosing-capture placement that leaves its own group without
    /// liberties and captures nothing.
    #[display("placement would capture its own group")]
    SelfCapture,
    /// The active rule set never allows passing.
    #[display("passing is not supported in this game")]
    PassUnsupported,
    /// Passing is only allowed when no placement is available.
    #[display("passing is not allowed while a legal placement exists")]
    PassWithLegalMoves,
    /// The mover's stone supply is empty.
    #[display("no stones remaining in supply")]
    NoStonesRemaining,
}

/// Everything that can go wrong in the rule engines and their collaborators.
#[derive(Debug, Display, Error)]
pub enum GameError {
    // === Configuration ===
    #[display("board size {size} is outside 8..=19")]
    InvalidBoardSize { size: usize },

    #[display("{game} requires a {required}x{required} board, got {found}")]
    FixedBoardSize {
        game: GameType,
        required: usize,
        found: usize,
    },

    // === Placement ===
    #[display("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },

    #[display("position {position} is already occupied")]
    Occupied { position: Position },

    #[display("illegal move: {reason}")]
    IllegalMove {
        #[error(not(source))]
        reason: IllegalMove,
    },

    // === State ===
    #[display("no game is in progress")]
    NoActiveGame,

    #[display("the game has already finished")]
    GameFinished,

    #[display("there is no move to undo")]
    NothingToUndo,

    #[display("{color} has used every undo")]
    UndoBudgetExhausted { color: Color },

    #[display("no replay is loaded")]
    NoReplayLoaded,

    #[display("{color} has no move strategy")]
    NoStrategy { color: Color },

    // === Format ===
    #[display("record is for a {found}x{found} board, engine is {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, found: usize },

    #[display("unknown game type {tag:?}")]
    UnknownGameType { tag: String },

    #[display("malformed record: {message}")]
    Format { message: String },

    // === Collaborator I/O ===
    #[display("failed to access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl GameError {
    /// Shorthand for a rule rejection.
    #[must_use]
    pub fn illegal(reason: IllegalMove) -> Self {
        GameError::IllegalMove { reason }
    }

    /// Shorthand for a malformed record.
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        GameError::Format {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's move choice rather than the
    /// state of the session.
    #[must_use]
    pub fn is_move_rejection(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. } | GameError::Occupied { .. } | GameError::IllegalMove { .. }
        )
    }
}
