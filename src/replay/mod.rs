//! Replay of a recorded game.

mod cursor;

pub use cursor::ReplayCursor;
