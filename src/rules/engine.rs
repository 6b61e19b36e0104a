//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to supply only the hooks where they
//! diverge:
//! - Placement legality and its side effects (captures, flips)
//! - Whether passing is allowed
//! - Terminal detection and scoring
//! - Inverting a move on undo
//!
//! `Engine<R>` owns the shared turn/resource bookkeeping and calls into
//! these hooks; it never interprets game-specific concepts directly.

use serde::{Deserialize, Serialize};

use crate::core::{
    BoardState, Color, ColorMap, GameError, GameType, Grid, IllegalMove, Move, Position, Result,
};

/// Reason given when a line of five completes.
pub const REASON_FIVE_IN_A_ROW: &str = "five in a row";

/// Reason given when the board fills without a winner.
pub const REASON_BOARD_FULL: &str = "board full";

/// Reason given when a side resigns.
pub const REASON_RESIGNATION: &str = "resignation";

/// Result of a finished game.
///
/// Serialized as `{ "winner": null | "B" | "W", "reason": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    winner: Option<Color>,
    #[serde(default)]
    reason: String,
}

impl GameResult {
    /// `winner` takes the game.
    #[must_use]
    pub fn win(winner: Color, reason: impl Into<String>) -> Self {
        Self {
            winner: Some(winner),
            reason: reason.into(),
        }
    }

    /// Nobody wins.
    #[must_use]
    pub fn draw(reason: impl Into<String>) -> Self {
        Self {
            winner: None,
            reason: reason.into(),
        }
    }

    /// `loser` resigns; the opponent wins.
    #[must_use]
    pub fn resignation(loser: Color) -> Self {
        Self::win(loser.opponent(), REASON_RESIGNATION)
    }

    /// Higher score wins; the reason states both scores and the margin.
    ///
    /// ```
    /// use grid_games::core::{Color, ColorMap};
    /// use grid_games::rules::GameResult;
    ///
    /// let scores = ColorMap::new(|c| if c == Color::Black { 40 } else { 41 });
    /// let result = GameResult::by_score(&scores);
    /// assert_eq!(result.winner(), Some(Color::White));
    /// assert_eq!(result.reason(), "White wins 41 to 40 (margin 1)");
    /// ```
    #[must_use]
    pub fn by_score(scores: &ColorMap<u32>) -> Self {
        let black = scores[Color::Black];
        let white = scores[Color::White];
        let (winner, high, low) = match black.cmp(&white) {
            std::cmp::Ordering::Greater => (Color::Black, black, white),
            std::cmp::Ordering::Less => (Color::White, white, black),
            std::cmp::Ordering::Equal => {
                return Self::draw(format!("tied at {black} each"));
            }
        };
        Self::win(
            winner,
            format!("{winner} wins {high} to {low} (margin {})", high - low),
        )
    }

    /// Winning color, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Human-readable reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Check if nobody won.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Check if `color` won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner == Some(color)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "{winner} wins ({})", self.reason),
            None => write!(f, "draw ({})", self.reason),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `place`: called only for an in-bounds, empty cell on an unfinished
///   game. Must either apply the whole move and return it, or return an
///   error with the state untouched. Must not touch history or the side to
///   move; `Engine` does that.
/// - `pass`: validate a pass and update rule-local state. Default: passing
///   is unsupported.
/// - `check_terminal`: called after every recorded move.
/// - `revert`: invert the grid and counter effects of a move that has just
///   been popped from history. Only called on moves `can_revert` accepts.
/// - `can_revert`: whether `mv` matches the grid it is about to be undone
///   on. Default: the placed cell holds the mover and every capture cell
///   is empty and listed once.
/// - `resync`: rebuild rule-local state (pass streaks, ...) from history
///   after undo, restart or load.
pub trait RulesEngine: Clone + std::fmt::Debug {
    /// Which game these rules implement.
    fn game_type(&self) -> GameType;

    /// Pre-place any starting stones on a fresh state.
    fn setup(&mut self, _state: &mut BoardState) {}

    /// Validate and apply a placement for the side to move.
    fn place(&mut self, state: &mut BoardState, position: Position) -> Result<Move>;

    /// Validate a pass for the side to move.
    fn pass(&mut self, _state: &BoardState) -> Result<()> {
        Err(GameError::illegal(IllegalMove::PassUnsupported))
    }

    /// Decide whether the game ended with `last`.
    fn check_terminal(&self, state: &BoardState, last: &Move) -> Option<GameResult>;

    /// Undo the grid and counter effects of `mv`.
    fn revert(&self, state: &mut BoardState, mv: &Move);

    /// Whether `mv` can be undone on `grid` without corrupting counters.
    fn can_revert(&self, grid: &Grid, mv: &Move) -> bool {
        let Some(position) = mv.position() else {
            return true;
        };
        grid.get(position).ok() == Some(Some(mv.color()))
            && distinct_cells(mv)
            && mv.captures().iter().all(|&cell| grid.get(cell).ok() == Some(None))
    }

    /// Rebuild rule-local state from the current history.
    fn resync(&mut self, _state: &BoardState) {}

    /// Whether `color` may place at `position` right now.
    fn is_legal(&self, state: &BoardState, color: Color, position: Position) -> bool;

    /// Every cell `color` may place on, row-major.
    fn legal_positions(&self, state: &BoardState, color: Color) -> Vec<Position> {
        state
            .grid()
            .empty_positions()
            .filter(|&pos| self.is_legal(state, color, pos))
            .collect()
    }

    /// Whether `color` has any placement at all.
    fn has_legal_placement(&self, state: &BoardState, color: Color) -> bool {
        state
            .grid()
            .empty_positions()
            .any(|pos| self.is_legal(state, color, pos))
    }
}

/// Whether the placed cell and every captured cell of `mv` are distinct.
pub(crate) fn distinct_cells(mv: &Move) -> bool {
    let cells: Vec<Position> = mv.cells().collect();
    cells
        .iter()
        .enumerate()
        .all(|(i, cell)| !cells[..i].contains(cell))
}
