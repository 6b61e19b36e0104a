//! Greedy positional strategy.
//!
//! Score = static cell weight (8x8 boards only) + `FLIP_WEIGHT` per disc
//! the move would flip. Corners are prized; cells next to corners are
//! penalized.

use super::MoveStrategy;
use crate::core::{Color, Grid, Position};
use crate::games::reversi::flips_for;

/// Points per flipped disc.
pub const FLIP_WEIGHT: i32 = 10;

/// Static cell weights for an 8x8 board.
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -40, -2, -2, -2, -2, -40, -20],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [-20, -40, -2, -2, -2, -2, -40, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Highest-scoring legal position; the earliest one wins ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedStrategy;

impl WeightedStrategy {
    /// Score of playing `position` for `color`.
    #[must_use]
    pub fn evaluate(grid: &Grid, color: Color, position: Position) -> i32 {
        let positional = if grid.size() == POSITION_WEIGHTS.len() {
            POSITION_WEIGHTS[position.row][position.col]
        } else {
            0
        };
        positional + flips_for(grid, position, color).len() as i32 * FLIP_WEIGHT
    }
}

impl MoveStrategy for WeightedStrategy {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn choose(&mut self, grid: &Grid, color: Color, legal: &[Position]) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for &position in legal {
            let score = Self::evaluate(grid, color, position);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((position, score));
            }
        }
        best.map(|(position, _)| position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameType;
    use crate::games::AnyEngine;

    #[test]
    fn test_prefers_corner() {
        let grid = Grid::new(8).unwrap();
        let legal = [Position::new(1, 1), Position::new(0, 0), Position::new(3, 3)];
        assert_eq!(
            WeightedStrategy.choose(&grid, Color::Black, &legal),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_ties_keep_first() {
        let engine = AnyEngine::new(GameType::Reversi, 8).unwrap();
        // All four opening moves weigh 1 and flip one disc.
        let legal = engine.legal_positions();
        assert_eq!(
            WeightedStrategy.choose(engine.grid(), Color::Black, &legal),
            legal.first().copied()
        );
        assert_eq!(
            WeightedStrategy::evaluate(engine.grid(), Color::Black, Position::new(2, 3)),
            1 + FLIP_WEIGHT
        );
    }

    #[test]
    fn test_no_table_off_8x8() {
        let grid = Grid::new(9).unwrap();
        assert_eq!(WeightedStrategy::evaluate(&grid, Color::Black, Position::new(0, 0)), 0);
        assert!(WeightedStrategy.choose(&grid, Color::Black, &[]).is_none());
    }
}
