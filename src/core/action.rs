//! Move representation: a placement or a pass.
//!
//! A placement also records every cell its side effects touched, so undo
//! can invert the move without recomputing anything:
//! - Go: the opponent stones it captured
//! - Reversi: the discs it flipped
//! - Gomoku: nothing
//!
//! Moves are immutable once recorded. The serialized shape is the move
//! record of the save-game and replay formats:
//! `{ "position": null | {row, col}, "color": "B" | "W", "captures": [...] }`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::position::Position;

/// A single recorded move.
///
/// ## Example
///
/// ```
/// use grid_games::core::{Color, Move, Position};
///
/// let pass = Move::pass(Color::White);
/// assert!(pass.is_pass());
///
/// let capture = Move::place(Position::new(3, 3), Color::Black, [Position::new(3, 4)]);
/// assert_eq!(capture.captures(), &[Position::new(3, 4)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Option<Position>,
    color: Color,
    /// Captured (Go) or flipped (Reversi) cells, in the order they were
    /// collected. Most moves touch a handful of cells at most.
    #[serde(default)]
    captures: SmallVec<[Position; 4]>,
}

impl Move {
    /// A placement with its side-effect cells.
    #[must_use]
    pub fn place(
        position: Position,
        color: Color,
        captures: impl IntoIterator<Item = Position>,
    ) -> Self {
        Self {
            position: Some(position),
            color,
            captures: captures.into_iter().collect(),
        }
    }

    /// A pass.
    #[must_use]
    pub fn pass(color: Color) -> Self {
        Self {
            position: None,
            color,
            captures: SmallVec::new(),
        }
    }

    /// Whether this move is a pass.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.position.is_none()
    }

    /// Placed cell, `None` for a pass.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Side that made the move.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Captured or flipped cells.
    #[must_use]
    pub fn captures(&self) -> &[Position] {
        &self.captures
    }

    /// Every cell the move names (placement plus captures).
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.position.into_iter().chain(self.captures.iter().copied())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            None => write!(f, "{} passes", self.color),
            Some(pos) if self.captures.is_empty() => write!(f, "{} {}", self.color, pos),
            Some(pos) => write!(f, "{} {} x{}", self.color, pos, self.captures.len()),
        }
    }
}
