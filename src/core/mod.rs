//! Core engine types: colors, positions, grid, moves, state, configuration.
//!
//! Everything here is game-agnostic. Rule sets in `games` interpret these
//! types; they never extend them.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod position;
pub mod rng;
pub mod state;

pub use action::Move;
pub use color::{Color, ColorMap};
pub use config::{EngineConfig, GameType, DEFAULT_MAX_UNDO, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{GameError, IllegalMove, Result};
pub use grid::Grid;
pub use position::{Position, COMPASS, LINE_AXES, ORTHOGONAL};
pub use rng::GameRng;
pub use state::BoardState;
