//! Session controller over the engines, strategies and replays.
//!
//! A `GameSession` is the surface a front end talks to: it owns the
//! active game, routes row/column input into it, renders status text, and
//! loads and saves games and replays.

mod controller;

pub use controller::{GameSession, ResourceSnapshot};
