//! Five-in-a-row.
//!
//! - Any empty cell is a legal placement
//! - A run of five or more through the new stone, on any of the four
//!   axes, wins immediately
//! - A full board with no winner is a draw
//! - No passing

mod game;

pub use game::{completes_line, run_length, Gomoku, WIN_LENGTH};
