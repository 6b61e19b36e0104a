//! Five-in-a-row rules.

use crate::core::{BoardState, Color, GameType, Grid, Move, Position, Result, LINE_AXES};
use crate::rules::{GameResult, RulesEngine, REASON_BOARD_FULL, REASON_FIVE_IN_A_ROW};

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Five-in-a-row rule set. Stateless; every empty cell is playable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gomoku;

/// Length of the `color` run through `position` along `(dr, dc)`,
/// counting both directions and the stone itself.
#[must_use]
pub fn run_length(grid: &Grid, position: Position, color: Color, (dr, dc): (isize, isize)) -> usize {
    let forward = grid
        .ray(position, dr, dc)
        .take_while(|&p| grid.at(p) == Some(color))
        .count();
    let backward = grid
        .ray(position, -dr, -dc)
        .take_while(|&p| grid.at(p) == Some(color))
        .count();
    forward + backward + 1
}

/// Whether the stone at `position` completes a line of at least five on
/// any of the four axes.
#[must_use]
pub fn completes_line(grid: &Grid, position: Position, color: Color) -> bool {
    LINE_AXES
        .iter()
        .any(|&axis| run_length(grid, position, color, axis) >= WIN_LENGTH)
}

impl RulesEngine for Gomoku {
    fn game_type(&self) -> GameType {
        GameType::Gomoku
    }

    fn place(&mut self, state: &mut BoardState, position: Position) -> Result<Move> {
        let mover = state.to_move();
        state.ensure_supply(mover)?;
        state.grid.put(position, Some(mover));
        state.record_placed(mover);
        Ok(Move::place(position, mover, []))
    }

    fn check_terminal(&self, state: &BoardState, last: &Move) -> Option<GameResult> {
        let position = last.position()?;
        if completes_line(state.grid(), position, last.color()) {
            Some(GameResult::win(last.color(), REASON_FIVE_IN_A_ROW))
        } else if state.grid().is_full() {
            Some(GameResult::draw(REASON_BOARD_FULL))
        } else {
            None
        }
    }

    fn revert(&self, state: &mut BoardState, mv: &Move) {
        if let Some(position) = mv.position() {
            state.grid.put(position, None);
            state.record_removed(mv.color());
        }
    }

    fn is_legal(&self, state: &BoardState, _color: Color, position: Position) -> bool {
        state.grid().is_empty_at(position)
    }
}
