//! Cursor over a recorded move list.

use im::Vector;
use tracing::debug;

use crate::core::{EngineConfig, GameType, Move, Result};
use crate::games::AnyEngine;
use crate::persistence::ReplayRecord;

/// Position in a fixed move list, plus a playing/paused flag.
///
/// The cursor is an index in `[-1, len - 1]`; `-1` means before the first
/// move. Boards are never stored: `rebuild` re-drives a fresh engine.
///
/// ## Example
///
/// ```
/// use grid_games::core::{GameType, Position};
/// use grid_games::games::AnyEngine;
/// use grid_games::replay::ReplayCursor;
///
/// let mut engine = AnyEngine::new(GameType::Gomoku, 15).unwrap();
/// engine.play(Position::new(7, 7)).unwrap();
/// engine.play(Position::new(7, 8)).unwrap();
///
/// let mut cursor = ReplayCursor::from_engine(&engine);
/// cursor.jump_to(0);
/// let board = cursor.rebuild().unwrap();
/// assert_eq!(board.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ReplayCursor {
    game_type: GameType,
    board_size: usize,
    moves: Vector<Move>,
    index: isize,
    playing: bool,
}

impl ReplayCursor {
    /// Cursor before the first of `moves`, paused.
    #[must_use]
    pub fn new(game_type: GameType, board_size: usize, moves: Vector<Move>) -> Self {
        Self {
            game_type,
            board_size,
            moves,
            index: -1,
            playing: false,
        }
    }

    /// Cursor over an engine's history. Shares structure with it.
    #[must_use]
    pub fn from_engine(engine: &AnyEngine) -> Self {
        Self::new(engine.game_type(), engine.board_size(), engine.history().clone())
    }

    /// Cursor over a loaded replay record, after validating it.
    pub fn from_record(record: &ReplayRecord) -> Result<Self> {
        record.validate()?;
        Ok(Self::new(
            record.game_type,
            record.board_size,
            record.moves.iter().cloned().collect(),
        ))
    }

    /// The replay record for this move list.
    #[must_use]
    pub fn to_record(&self) -> ReplayRecord {
        ReplayRecord::new(
            self.game_type,
            self.board_size,
            self.moves.iter().cloned().collect(),
        )
    }

    // === Accessors ===

    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Current index; `-1` before the first move.
    #[must_use]
    pub fn current_index(&self) -> isize {
        self.index
    }

    /// Move at the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Move> {
        usize::try_from(self.index).ok().and_then(|i| self.moves.get(i))
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the cursor sits on the last move (always true when empty).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.last_index()
    }

    /// Moves up to and including the cursor.
    #[must_use]
    pub fn played(&self) -> Vector<Move> {
        self.moves.take(self.played_len())
    }

    fn played_len(&self) -> usize {
        usize::try_from(self.index + 1).unwrap_or(0)
    }

    fn last_index(&self) -> isize {
        self.moves.len() as isize - 1
    }

    // === Navigation ===

    /// Mark as playing. The cursor does not move.
    pub fn start(&mut self) {
        self.playing = true;
    }

    /// Mark as paused. The cursor does not move.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Move the cursor to `index`, saturating into `[-1, len - 1]`.
    pub fn jump_to(&mut self, index: isize) {
        self.index = index.clamp(-1, self.last_index());
        debug!(index = self.index, "replay cursor moved");
    }

    /// Advance one move and return it; `None` at the end.
    pub fn step_forward(&mut self) -> Option<&Move> {
        if self.index >= self.last_index() {
            return None;
        }
        self.index += 1;
        self.current()
    }

    /// Go back one move and return the move now under the cursor.
    ///
    /// Stops at the first move; never returns to `-1`.
    pub fn step_back(&mut self) -> Option<&Move> {
        if self.index <= 0 {
            return None;
        }
        self.index -= 1;
        self.current()
    }

    // === Reconstruction ===

    /// Fresh engine with every move up to the cursor re-applied through
    /// the normal protocol.
    pub fn rebuild(&self) -> Result<AnyEngine> {
        self.rebuild_with(EngineConfig::new(self.board_size))
    }

    /// `rebuild` with an explicit engine configuration (undo budget).
    pub fn rebuild_with(&self, config: EngineConfig) -> Result<AnyEngine> {
        let config = config.with_board_size(self.board_size);
        let mut engine = AnyEngine::with_config(self.game_type, config)?;
        for mv in self.moves.iter().take(self.played_len()) {
            engine.apply_move(mv)?;
        }
        Ok(engine)
    }
}
