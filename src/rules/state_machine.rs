//! The shared turn/resource state machine.
//!
//! `Engine<R>` implements the public game protocol once:
//! - `play` / `pass_turn`: validate, apply, record, hand over the turn,
//!   check for a result
//! - `undo`: pop the last move within the mover's undo budget
//! - `resign`, `restart`
//! - `serialize` / `deserialize` to the save-game record
//!
//! The rule set `R` only decides what a placement or pass means.

use tracing::{debug, info, instrument};

use super::engine::{GameResult, RulesEngine};
use crate::core::{
    BoardState, Color, ColorMap, EngineConfig, GameError, GameType, Grid, Move, Position, Result,
};
use crate::persistence::record::first_off_board;
use crate::persistence::GameRecord;

/// One game in progress: a rule set plus the state it governs.
///
/// ## Example
///
/// ```
/// use grid_games::core::{Color, EngineConfig, Position};
/// use grid_games::games::GomokuEngine;
///
/// let mut engine = GomokuEngine::new(EngineConfig::new(15)).unwrap();
/// engine.play(Position::new(7, 7)).unwrap();
///
/// assert_eq!(engine.current_player(), Color::White);
/// assert_eq!(engine.stones_on_board(Color::Black), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Engine<R: RulesEngine> {
    rules: R,
    state: BoardState,
    config: EngineConfig,
}

impl<R: RulesEngine + Default> Engine<R> {
    /// Create an engine with default rules.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_rules(R::default(), config)
    }
}

impl<R: RulesEngine> Engine<R> {
    /// Create an engine around a specific rules instance.
    ///
    /// Fails if the board size is out of range or wrong for the game.
    pub fn with_rules(mut rules: R, config: EngineConfig) -> Result<Self> {
        rules.game_type().validate_board_size(config.board_size)?;
        let mut state = BoardState::new(&config)?;
        rules.setup(&mut state);
        Ok(Self {
            rules,
            state,
            config,
        })
    }

    // === Accessors ===

    /// Game implemented by this engine.
    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.rules.game_type()
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rules instance.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Full state.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    /// Side to move.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.state.to_move()
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<Move> {
        self.state.history()
    }

    /// Terminal result, if the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.state.result()
    }

    /// Whether a result has been declared.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Stones `color` has on the board.
    #[must_use]
    pub fn stones_on_board(&self, color: Color) -> u32 {
        self.state.stones_on_board(color)
    }

    /// Stones `color` still has in supply.
    #[must_use]
    pub fn stones_remaining(&self, color: Color) -> u32 {
        self.state.stones_remaining(color)
    }

    /// Undos `color` may still take.
    #[must_use]
    pub fn undo_remaining(&self, color: Color) -> u32 {
        self.state.undo_remaining(color)
    }

    /// Opponent stones captured by `color`.
    #[must_use]
    pub fn captured(&self, color: Color) -> u32 {
        self.state.captured(color)
    }

    /// Legal placements for the side to move.
    #[must_use]
    pub fn legal_positions(&self) -> Vec<Position> {
        if self.is_finished() {
            return Vec::new();
        }
        self.rules.legal_positions(&self.state, self.state.to_move())
    }

    // === Protocol ===

    /// Place a stone for the side to move.
    #[instrument(level = "debug", skip(self), fields(game = %self.game_type()))]
    pub fn play(&mut self, position: Position) -> Result<Move> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        self.state.grid().check(position)?;
        if !self.state.grid().is_empty_at(position) {
            return Err(GameError::Occupied { position });
        }

        let mv = self.rules.place(&mut self.state, position).map_err(|err| {
            debug!(%err, "placement rejected");
            err
        })?;
        self.record(mv.clone());
        Ok(mv)
    }

    /// Pass the turn, where the rules allow it.
    #[instrument(level = "debug", skip(self), fields(game = %self.game_type()))]
    pub fn pass_turn(&mut self) -> Result<()> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        self.rules.pass(&self.state)?;
        self.record(Move::pass(self.state.to_move()));
        Ok(())
    }

    fn record(&mut self, mv: Move) {
        debug!(%mv, "move recorded");
        self.state.push_move(mv);
        let result = self
            .state
            .last_move()
            .and_then(|last| self.rules.check_terminal(&self.state, last));
        if let Some(result) = result {
            info!(%result, "game over");
            self.state.result = Some(result);
        }
    }

    /// Take back the last move, charging its author's undo budget.
    ///
    /// Clears any result, including a resignation.
    #[instrument(level = "debug", skip(self), fields(game = %self.game_type()))]
    pub fn undo(&mut self) -> Result<Move> {
        let color = self
            .state
            .last_move()
            .map(Move::color)
            .ok_or(GameError::NothingToUndo)?;
        if self.state.undo_remaining(color) == 0 {
            return Err(GameError::UndoBudgetExhausted { color });
        }

        let mv = self.state.pop_move().ok_or(GameError::NothingToUndo)?;
        self.state.undo_used[color] += 1;
        self.rules.revert(&mut self.state, &mv);
        self.state.result = None;
        self.rules.resync(&self.state);
        debug!(%mv, remaining = self.state.undo_remaining(color), "move undone");
        Ok(mv)
    }

    /// `color` concedes; the opponent wins. No move is recorded.
    #[instrument(level = "debug", skip(self), fields(game = %self.game_type()))]
    pub fn resign(&mut self, color: Color) -> Result<()> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        let result = GameResult::resignation(color);
        info!(%result, "resigned");
        self.state.result = Some(result);
        Ok(())
    }

    /// Start over with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        let mut state = BoardState::new(&self.config)?;
        self.rules.resync(&state);
        self.rules.setup(&mut state);
        self.state = state;
        debug!(game = %self.game_type(), "restarted");
        Ok(())
    }

    // === Persistence ===

    /// Snapshot the complete state as a save-game record.
    #[must_use]
    pub fn serialize(&self) -> GameRecord {
        let state = &self.state;
        GameRecord {
            game_type: Some(self.game_type()),
            board_size: state.grid().size(),
            board: state.grid().to_matrix(),
            current_player: state.to_move(),
            history: state.history().iter().cloned().collect(),
            captured: state.captured.to_map(),
            undo_used: state.undo_used.to_map(),
            stones_remaining: Some(state.stones_remaining.to_map()),
            stones_on_board: Some(state.stones_on_board.to_map()),
            winner: state.result().cloned(),
        }
    }

    /// Replace the state with a save-game record.
    ///
    /// The record is validated completely before anything is replaced.
    pub fn deserialize(&mut self, record: &GameRecord) -> Result<()> {
        if record.board_size != self.config.board_size {
            return Err(GameError::BoardSizeMismatch {
                expected: self.config.board_size,
                found: record.board_size,
            });
        }
        if let Some(game) = record.game_type {
            if game != self.game_type() {
                return Err(GameError::format(format!(
                    "record is a {game} game, engine plays {}",
                    self.game_type()
                )));
            }
        }

        let mut state = BoardState::new(&self.config)?;
        state.grid.load_matrix(&record.board)?;
        if let Some(bad) = first_off_board(&record.history, record.board_size) {
            return Err(GameError::format(format!("history references {bad} off the board")));
        }

        state.to_move = record.current_player;
        state.history = record.history.iter().cloned().collect();
        state.captured = ColorMap::from_map(&record.captured);
        state.undo_used = ColorMap::from_map(&record.undo_used);
        match (&record.stones_remaining, &record.stones_on_board) {
            (Some(remaining), Some(on_board)) => {
                state.stones_remaining = ColorMap::from_map(remaining);
                state.stones_on_board = ColorMap::from_map(on_board);
            }
            _ => state.recount_counters(),
        }
        state.check_counters()?;
        state.result = record.winner.clone();
        self.check_undoable_history(&state)?;

        self.rules.resync(&state);
        self.state = state;
        debug!(game = %self.game_type(), moves = self.state.history().len(), "state loaded");
        Ok(())
    }

    /// Walk back every move the undo budget still reaches and make sure
    /// each one matches the board it would be undone on.
    fn check_undoable_history(&self, state: &BoardState) -> Result<()> {
        let mut scratch = state.clone();
        let mut budget = ColorMap::new(|color| scratch.undo_remaining(color));
        while let Some(mv) = scratch.last_move().cloned() {
            let color = mv.color();
            if budget[color] == 0 {
                break;
            }
            budget[color] -= 1;
            if !self.rules.can_revert(scratch.grid(), &mv) {
                return Err(GameError::format(format!(
                    "history move {mv} does not match the board"
                )));
            }
            scratch.pop_move();
            self.rules.revert(&mut scratch, &mv);
        }
        Ok(())
    }
}
