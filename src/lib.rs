//! # grid-games
//!
//! Rule engines and game state for five-in-a-row, Go and Reversi.
//!
//! ## Design Principles
//!
//! 1. **One State Machine**: turn order, history, stone supply, undo budget
//!    and results are implemented once in `Engine<R>`. Rule sets only
//!    supply the hooks where games differ.
//!
//! 2. **Atomic Moves**: every operation either fully applies or fails with
//!    a typed error and leaves the engine untouched.
//!
//! 3. **Derived Replays**: a replayed board is always rebuilt by driving a
//!    fresh engine through the same validated protocol, never by writing
//!    cells directly.
//!
//! ## Architecture
//!
//! - **Persistent History**: moves live in an `im::Vector`, so replay
//!   cursors and engine clones share structure.
//!
//! - **Supply Bookkeeping**: per color, stones in supply plus stones on the
//!   board is constant for the whole game.
//!
//! ## Modules
//!
//! - `core`: colors, positions, grid, moves, state, configuration, errors, RNG
//! - `rules`: `RulesEngine` trait and the generic `Engine` state machine
//! - `games`: five-in-a-row, Go and Reversi rule sets, plus `AnyEngine`
//! - `replay`: cursor over a recorded move list
//! - `persistence`: save-game and replay records, JSON and binary codecs
//! - `strategy`: move-selection strategies
//! - `session`: controller owning the active game
//!
//! ## Example
//!
//! ```
//! use grid_games::{AnyEngine, Color, GameType, Position};
//!
//! let mut engine = AnyEngine::new(GameType::Gomoku, 15).unwrap();
//! for col in 0..4 {
//!     engine.play(Position::new(7, col)).unwrap();
//!     engine.play(Position::new(8, col)).unwrap();
//! }
//! engine.play(Position::new(7, 4)).unwrap();
//!
//! assert!(engine.result().unwrap().is_winner(Color::Black));
//! ```

pub mod core;
pub mod games;
pub mod persistence;
pub mod replay;
pub mod rules;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    BoardState, Color, ColorMap, EngineConfig, GameError, GameRng, GameType, Grid, IllegalMove,
    Move, Position, Result,
};

pub use crate::rules::{Engine, GameResult, RulesEngine};

pub use crate::games::{AnyEngine, Go, GoEngine, Gomoku, GomokuEngine, Reversi, ReversiEngine};

pub use crate::persistence::{GameRecord, ReplayRecord};

pub use crate::replay::ReplayCursor;

pub use crate::strategy::{MoveStrategy, RandomStrategy, StrategyKind, WeightedStrategy};

pub use crate::session::{GameSession, ResourceSnapshot};
