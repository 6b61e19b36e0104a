//! Disc-flipping game on the fixed 8x8 board.
//!
//! Starts from the four-disc center layout. A placement must flip at least
//! one opponent run; a side may pass only when it has no such placement.

mod game;

pub use game::{flips_for, has_flipping_move, starting_layout, Reversi};
