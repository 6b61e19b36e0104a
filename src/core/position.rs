//! Board coordinates and direction tables.

use serde::{Deserialize, Serialize};

/// A 0-indexed (row, col) cell coordinate.
///
/// Positions are plain values; bounds are checked by the `Grid` that
/// interprets them, never here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The four orthogonal steps used for groups and liberties.
pub const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// One step per line axis: vertical, horizontal and both diagonals.
pub const LINE_AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// All eight compass steps, in the order flip runs are collected.
pub const COMPASS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset.
    ///
    /// Returns `None` when the step would go below row or column 0; the
    /// upper edge is the grid's concern.
    ///
    /// ```
    /// use grid_games::core::Position;
    ///
    /// assert_eq!(Position::new(2, 2).offset(-1, 1), Some(Position::new(1, 3)));
    /// assert_eq!(Position::new(0, 2).offset(-1, 0), None);
    /// ```
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
