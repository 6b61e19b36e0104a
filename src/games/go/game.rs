//! Enclosing-capture rules.
//!
//! ## Placement
//!
//! The stone goes down first, then adjacent opponent groups without
//! liberties are captured. Only after captures is the mover's own group
//! checked, so a move that captures is never self-capture.
//!
//! ## Ending
//!
//! Two consecutive passes end the game. Score per color is territory plus
//! captures plus stones on board.

use tracing::debug;

use super::groups::{captures_from, collect_group, has_liberty, territory};
use crate::core::{
    BoardState, Color, ColorMap, GameError, GameType, IllegalMove, Move, Position, Result,
};
use crate::rules::{GameResult, RulesEngine};

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

/// Enclosing-capture rule set.
///
/// Tracks the current run of consecutive passes; everything else lives in
/// `BoardState`.
#[derive(Clone, Debug, Default)]
pub struct Go {
    consecutive_passes: u32,
}

impl Go {
    /// Current run of consecutive passes.
    #[must_use]
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }
}

/// Final score per color: territory + captures + stones on board.
#[must_use]
pub fn score(state: &BoardState) -> ColorMap<u32> {
    let territory = territory(state.grid());
    ColorMap::new(|color| territory[color] + state.captured(color) + state.stones_on_board(color))
}

impl RulesEngine for Go {
    fn game_type(&self) -> GameType {
        GameType::Go
    }

    fn place(&mut self, state: &mut BoardState, position: Position) -> Result<Move> {
        let mover = state.to_move();
        let victim = mover.opponent();
        state.ensure_supply(mover)?;

        state.grid.put(position, Some(mover));
        let captures = captures_from(&state.grid, position, victim);
        if captures.is_empty() && !has_liberty(&state.grid, &collect_group(&state.grid, position)) {
            state.grid.put(position, None);
            return Err(GameError::illegal(IllegalMove::SelfCapture));
        }

        state.record_placed(mover);
        for &stone in &captures {
            state.grid.put(stone, None);
            state.record_removed(victim);
        }
        state.captured[mover] += captures.len() as u32;
        self.consecutive_passes = 0;

        if !captures.is_empty() {
            debug!(%mover, %position, count = captures.len(), "stones captured");
        }
        Ok(Move::place(position, mover, captures))
    }

    fn pass(&mut self, _state: &BoardState) -> Result<()> {
        self.consecutive_passes += 1;
        Ok(())
    }

    fn check_terminal(&self, state: &BoardState, _last: &Move) -> Option<GameResult> {
        (self.consecutive_passes >= PASSES_TO_END).then(|| GameResult::by_score(&score(state)))
    }

    fn revert(&self, state: &mut BoardState, mv: &Move) {
        let Some(position) = mv.position() else {
            return;
        };
        let mover = mv.color();
        let victim = mover.opponent();

        state.grid.put(position, None);
        state.record_removed(mover);
        for &stone in mv.captures() {
            state.grid.put(stone, Some(victim));
            state.record_placed(victim);
        }
        state.captured[mover] = state.captured[mover].saturating_sub(mv.captures().len() as u32);
    }

    fn resync(&mut self, state: &BoardState) {
        self.consecutive_passes = state
            .history()
            .iter()
            .rev()
            .take_while(|mv| mv.is_pass())
            .count() as u32;
    }

    fn is_legal(&self, state: &BoardState, color: Color, position: Position) -> bool {
        if !state.grid().is_empty_at(position) {
            return false;
        }
        let mut grid = state.grid().clone();
        grid.put(position, Some(color));
        !captures_from(&grid, position, color.opponent()).is_empty()
            || has_liberty(&grid, &collect_group(&grid, position))
    }
}
