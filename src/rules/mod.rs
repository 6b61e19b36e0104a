//! Rules engine trait and the shared state machine.
//!
//! Games implement `RulesEngine` to define:
//! - Which placements are legal and what they capture or flip
//! - Whether passing is allowed
//! - When the game ends and who won
//! - How a move is taken back
//!
//! `Engine<R>` drives any `RulesEngine` through the common protocol
//! (play, pass, undo, resign, restart, save/load).

pub mod engine;
pub mod state_machine;

pub use engine::{
    GameResult, RulesEngine, REASON_BOARD_FULL, REASON_FIVE_IN_A_ROW, REASON_RESIGNATION,
};
pub use state_machine::Engine;
