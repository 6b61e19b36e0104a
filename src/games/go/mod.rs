//! Enclosing-capture game on a square board of 8 to 19 lines.
//!
//! ## Example
//!
//! ```
//! use grid_games::core::{Color, EngineConfig, Position};
//! use grid_games::games::GoEngine;
//!
//! let mut engine = GoEngine::new(EngineConfig::new(9)).unwrap();
//! engine.play(Position::new(4, 4)).unwrap();
//! engine.pass_turn().unwrap();
//! engine.pass_turn().unwrap();
//!
//! assert!(engine.result().unwrap().is_winner(Color::Black));
//! ```

mod game;
pub mod groups;

pub use game::{score, Go, PASSES_TO_END};
