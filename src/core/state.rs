//! Board state shared by every rule set.
//!
//! ## BoardState
//!
//! - Grid (exclusively owned)
//! - Side to move and move history
//! - Per-color counters: captures, supply, stones on board, undos used
//! - Terminal result, if any
//!
//! ## Supply accounting
//!
//! Each color starts with `size * size` units split between supply
//! (`stones_remaining`) and board (`stones_on_board`). Every counter update
//! moves one unit between the two, so their sum per color never changes.
//! A Reversi flip is booked as one opponent stone removed plus one mover
//! stone placed.

use im::Vector;

use super::action::Move;
use super::color::{Color, ColorMap};
use super::config::EngineConfig;
use super::error::{GameError, IllegalMove, Result};
use super::grid::Grid;
use crate::rules::GameResult;

/// Mutable state owned by one engine instance.
///
/// History uses `im::Vector` so replay snapshots and engine clones share
/// structure instead of copying every move.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub(crate) grid: Grid,
    pub(crate) to_move: Color,
    pub(crate) history: Vector<Move>,
    pub(crate) captured: ColorMap<u32>,
    pub(crate) stones_remaining: ColorMap<u32>,
    pub(crate) stones_on_board: ColorMap<u32>,
    pub(crate) undo_used: ColorMap<u32>,
    pub(crate) result: Option<GameResult>,
    max_undo: u32,
}

impl BoardState {
    /// Fresh state: empty grid, Black to move, full supply.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let grid = Grid::new(config.board_size)?;
        let supply = Self::supply_for(&grid);
        Ok(Self {
            grid,
            to_move: Color::Black,
            history: Vector::new(),
            captured: ColorMap::with_value(0),
            stones_remaining: ColorMap::with_value(supply),
            stones_on_board: ColorMap::with_value(0),
            undo_used: ColorMap::with_value(0),
            result: None,
            max_undo: config.max_undo,
        })
    }

    fn supply_for(grid: &Grid) -> u32 {
        (grid.size() * grid.size()) as u32
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side to move.
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    /// Most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.back()
    }

    /// Opponent stones captured by `color` (Go only; zero elsewhere).
    #[must_use]
    pub fn captured(&self, color: Color) -> u32 {
        self.captured[color]
    }

    /// Stones `color` still has in supply.
    #[must_use]
    pub fn stones_remaining(&self, color: Color) -> u32 {
        self.stones_remaining[color]
    }

    /// Stones `color` has on the board.
    #[must_use]
    pub fn stones_on_board(&self, color: Color) -> u32 {
        self.stones_on_board[color]
    }

    /// Undos `color` has consumed.
    #[must_use]
    pub fn undo_used(&self, color: Color) -> u32 {
        self.undo_used[color]
    }

    /// Undos `color` may still take.
    #[must_use]
    pub fn undo_remaining(&self, color: Color) -> u32 {
        self.max_undo.saturating_sub(self.undo_used[color])
    }

    /// Configured undo budget per color.
    #[must_use]
    pub fn max_undo(&self) -> u32 {
        self.max_undo
    }

    /// Terminal result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Whether a result has been declared.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Supply plus board stones; constant for the life of a game.
    #[must_use]
    pub fn total_stones(&self, color: Color) -> u32 {
        self.stones_remaining[color] + self.stones_on_board[color]
    }

    // === Counter bookkeeping ===

    /// Fail unless `color` can place another stone.
    pub(crate) fn ensure_supply(&self, color: Color) -> Result<()> {
        if self.stones_remaining[color] == 0 {
            return Err(GameError::illegal(IllegalMove::NoStonesRemaining));
        }
        Ok(())
    }

    /// Book one stone moving from supply to board.
    pub(crate) fn record_placed(&mut self, color: Color) {
        debug_assert!(self.stones_remaining[color] > 0, "{color} supply exhausted");
        self.stones_remaining[color] = self.stones_remaining[color].saturating_sub(1);
        self.stones_on_board[color] += 1;
    }

    /// Book one stone moving from board back to supply.
    pub(crate) fn record_removed(&mut self, color: Color) {
        debug_assert!(self.stones_on_board[color] > 0, "{color} has no stones on board");
        self.stones_on_board[color] = self.stones_on_board[color].saturating_sub(1);
        self.stones_remaining[color] += 1;
    }

    /// Rebuild supply and board counters from the grid.
    ///
    /// Authoritative path whenever incremental counters are unavailable.
    pub(crate) fn recount_counters(&mut self) {
        let total = Self::supply_for(&self.grid);
        for color in Color::ALL {
            let on_board = self.grid.count(color) as u32;
            self.stones_on_board[color] = on_board;
            self.stones_remaining[color] = total.saturating_sub(on_board);
        }
    }

    /// Fail unless the counters agree with the grid and the fixed supply.
    pub(crate) fn check_counters(&self) -> Result<()> {
        let total = Self::supply_for(&self.grid);
        for color in Color::ALL {
            let on_board = self.stones_on_board[color];
            let counted = self.grid.count(color) as u32;
            if on_board != counted {
                return Err(GameError::format(format!(
                    "{color} has {on_board} stones on board by count, {counted} on the grid"
                )));
            }
            if on_board.checked_add(self.stones_remaining[color]) != Some(total) {
                return Err(GameError::format(format!(
                    "{color} supply {} plus board {on_board} is not {total}",
                    self.stones_remaining[color]
                )));
            }
        }
        Ok(())
    }

    // === History ===

    /// Append a move and hand the turn to the other side.
    pub(crate) fn push_move(&mut self, mv: Move) {
        self.history.push_back(mv);
        self.to_move = self.to_move.opponent();
    }

    /// Remove the most recent move and give the turn back to its author.
    pub(crate) fn pop_move(&mut self) -> Option<Move> {
        let mv = self.history.pop_back()?;
        self.to_move = mv.color();
        Some(mv)
    }
}
