//! Fixed-size board matrix.
//!
//! Cells are stored row-major in a flat `Vec<Option<Color>>`. The public
//! accessors bounds-check and return `GameError::OutOfBounds`; the
//! crate-internal `at`/`put` pair is for positions that were produced by the
//! grid itself (neighbors, rays, scans) and are in bounds by construction.

use smallvec::SmallVec;

use super::color::Color;
use super::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::error::{GameError, Result};
use super::position::{Position, ORTHOGONAL};

/// Square matrix of optional occupants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Fails with `InvalidBoardSize` outside 8..=19.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Build a grid from a full occupant matrix.
    pub fn from_matrix(data: &[Vec<Option<Color>>]) -> Result<Self> {
        let mut grid = Self::new(data.len())?;
        grid.load_matrix(data)?;
        Ok(grid)
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Whether `position` lies on this grid.
    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    /// Occupant of a cell.
    pub fn get(&self, position: Position) -> Result<Option<Color>> {
        self.check(position)?;
        Ok(self.at(position))
    }

    /// Set or clear a cell.
    pub fn set(&mut self, position: Position, occupant: Option<Color>) -> Result<()> {
        self.check(position)?;
        self.put(position, occupant);
        Ok(())
    }

    /// Fail with `OutOfBounds` unless `position` lies on the grid.
    pub fn check(&self, position: Position) -> Result<()> {
        if self.in_bounds(position) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                position,
                size: self.size,
            })
        }
    }

    pub(crate) fn at(&self, position: Position) -> Option<Color> {
        self.cells[self.index(position)]
    }

    pub(crate) fn put(&mut self, position: Position, occupant: Option<Color>) {
        let idx = self.index(position);
        self.cells[idx] = occupant;
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(self.in_bounds(position), "{position} off a {} grid", self.size);
        position.row * self.size + position.col
    }

    /// Whether a cell is empty. Off-grid positions are never empty.
    #[must_use]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.in_bounds(position) && self.at(position).is_none()
    }

    /// Step from `position` by `(dr, dc)`, staying on the grid.
    #[must_use]
    pub fn step(&self, position: Position, dr: isize, dc: isize) -> Option<Position> {
        position.offset(dr, dc).filter(|next| self.in_bounds(*next))
    }

    /// Orthogonal neighbors that lie on the grid.
    #[must_use]
    pub fn neighbors(&self, position: Position) -> SmallVec<[Position; 4]> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dr, dc)| self.step(position, dr, dc))
            .collect()
    }

    /// Cells walked outward from `position` (exclusive) until the edge.
    pub fn ray(&self, position: Position, dr: isize, dc: isize) -> impl Iterator<Item = Position> + '_ {
        std::iter::successors(self.step(position, dr, dc), move |&p| self.step(p, dr, dc))
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&p| self.at(p).is_none())
    }

    /// Number of cells occupied by `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(color)).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Full occupant matrix, one `Vec` per row.
    #[must_use]
    pub fn to_matrix(&self) -> Vec<Vec<Option<Color>>> {
        self.cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }

    /// Overwrite every cell from a matrix of the same dimensions.
    ///
    /// Nothing is written unless every row has the right length.
    pub fn load_matrix(&mut self, data: &[Vec<Option<Color>>]) -> Result<()> {
        if data.len() != self.size {
            return Err(GameError::format(format!(
                "board has {} rows, expected {}",
                data.len(),
                self.size
            )));
        }
        if let Some((row, cols)) = data
            .iter()
            .enumerate()
            .find(|(_, cols)| cols.len() != self.size)
        {
            return Err(GameError::format(format!(
                "board row {row} has {} cells, expected {}",
                cols.len(),
                self.size
            )));
        }
        self.cells = data.iter().flatten().copied().collect();
        Ok(())
    }
}

impl std::fmt::Display for Grid {
    /// Text board with 1-based row and column labels.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 1..=self.size {
            write!(f, " {col:2}")?;
        }
        for row in 0..self.size {
            write!(f, "\n{:2} |", row + 1)?;
            for col in 0..self.size {
                let glyph = self.at(Position::new(row, col)).map_or('.', Color::glyph);
                write!(f, "  {glyph}")?;
            }
        }
        Ok(())
    }
}
