//! Disc-flipping rules.

use crate::core::{
    BoardState, Color, GameError, GameType, Grid, IllegalMove, Move, Position, Result, COMPASS,
};
use crate::rules::engine::distinct_cells;
use crate::rules::{GameResult, RulesEngine};

/// Disc-flipping rule set on the fixed 8x8 board.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversi;

/// Opponent discs that `color` would flip by playing at `position`.
///
/// Walks each of the eight directions collecting opponent discs; a run
/// counts only when it ends on a `color` disc. Empty when the cell is
/// occupied or nothing would flip.
///
/// ```
/// use grid_games::core::{Color, EngineConfig, Position};
/// use grid_games::games::reversi::flips_for;
/// use grid_games::games::ReversiEngine;
///
/// let engine = ReversiEngine::new(EngineConfig::new(8)).unwrap();
/// let flips = flips_for(engine.grid(), Position::new(2, 3), Color::Black);
/// assert_eq!(flips, vec![Position::new(3, 3)]);
/// ```
#[must_use]
pub fn flips_for(grid: &Grid, position: Position, color: Color) -> Vec<Position> {
    if !grid.is_empty_at(position) {
        return Vec::new();
    }
    let opponent = color.opponent();
    let mut flips = Vec::new();
    for &(dr, dc) in &COMPASS {
        let mut run = Vec::new();
        for cell in grid.ray(position, dr, dc) {
            match grid.at(cell) {
                Some(c) if c == opponent => run.push(cell),
                Some(_) => {
                    flips.append(&mut run);
                    break;
                }
                None => break,
            }
        }
    }
    flips
}

/// Whether `color` has any flipping placement.
#[must_use]
pub fn has_flipping_move(grid: &Grid, color: Color) -> bool {
    grid.empty_positions()
        .any(|pos| !flips_for(grid, pos, color).is_empty())
}

/// The four center cells in the starting pattern.
#[must_use]
pub fn starting_layout(size: usize) -> [(Position, Color); 4] {
    let c = size / 2;
    [
        (Position::new(c - 1, c - 1), Color::White),
        (Position::new(c - 1, c), Color::Black),
        (Position::new(c, c - 1), Color::Black),
        (Position::new(c, c), Color::White),
    ]
}

impl RulesEngine for Reversi {
    fn game_type(&self) -> GameType {
        GameType::Reversi
    }

    fn setup(&mut self, state: &mut BoardState) {
        for (position, color) in starting_layout(state.grid().size()) {
            state.grid.put(position, Some(color));
        }
        state.recount_counters();
    }

    fn place(&mut self, state: &mut BoardState, position: Position) -> Result<Move> {
        let mover = state.to_move();
        let flips = flips_for(state.grid(), position, mover);
        if flips.is_empty() {
            return Err(GameError::illegal(IllegalMove::NoFlips));
        }
        state.ensure_supply(mover)?;

        state.grid.put(position, Some(mover));
        state.record_placed(mover);
        for &disc in &flips {
            state.grid.put(disc, Some(mover));
            state.record_removed(mover.opponent());
            state.record_placed(mover);
        }
        Ok(Move::place(position, mover, flips))
    }

    fn pass(&mut self, state: &BoardState) -> Result<()> {
        if self.has_legal_placement(state, state.to_move()) {
            return Err(GameError::illegal(IllegalMove::PassWithLegalMoves));
        }
        Ok(())
    }

    fn check_terminal(&self, state: &BoardState, _last: &Move) -> Option<GameResult> {
        let grid = state.grid();
        let blocked = grid.is_full() || Color::ALL.iter().all(|&c| !has_flipping_move(grid, c));
        blocked.then(|| GameResult::by_score(&state.stones_on_board))
    }

    fn revert(&self, state: &mut BoardState, mv: &Move) {
        let Some(position) = mv.position() else {
            return;
        };
        let mover = mv.color();
        for &disc in mv.captures() {
            state.grid.put(disc, Some(mover.opponent()));
            state.record_removed(mover);
            state.record_placed(mover.opponent());
        }
        state.grid.put(position, None);
        state.record_removed(mover);
    }

    fn can_revert(&self, grid: &Grid, mv: &Move) -> bool {
        distinct_cells(mv) && mv.cells().all(|cell| grid.get(cell).ok() == Some(Some(mv.color())))
    }

    fn is_legal(&self, state: &BoardState, color: Color, position: Position) -> bool {
        !flips_for(state.grid(), position, color).is_empty()
    }

    fn has_legal_placement(&self, state: &BoardState, color: Color) -> bool {
        has_flipping_move(state.grid(), color)
    }
}
