//! Game session: one active engine, optional strategies, optional replay.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::core::{
    Color, ColorMap, EngineConfig, GameError, GameRng, GameType, Move, Position, Result,
    DEFAULT_MAX_UNDO,
};
use crate::games::AnyEngine;
use crate::persistence::{load_json, save_json, GameRecord, ReplayRecord};
use crate::replay::ReplayCursor;
use crate::strategy::{MoveStrategy, StrategyKind};

/// Per-color resource counters, as shown to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub stones_on_board: u32,
    pub stones_remaining: u32,
    pub undo_remaining: u32,
}

/// Drives at most one game at a time.
///
/// ## Example
///
/// ```
/// use grid_games::core::{Color, GameType};
/// use grid_games::session::GameSession;
/// use grid_games::strategy::StrategyKind;
///
/// let mut session = GameSession::with_seed(7);
/// session.start_game(GameType::Reversi, 8).unwrap();
/// session.set_strategy(Color::Black, StrategyKind::Weighted);
///
/// let mv = session.play_strategy_move().unwrap().unwrap();
/// assert_eq!(mv.color(), Color::Black);
/// assert_eq!(session.resources().unwrap()[Color::Black].stones_on_board, 4);
/// ```
#[derive(Debug)]
pub struct GameSession {
    engine: Option<AnyEngine>,
    max_undo: u32,
    strategies: ColorMap<Option<Box<dyn MoveStrategy>>>,
    replay: Option<ReplayCursor>,
    rng: GameRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }
}

impl GameSession {
    /// Session seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose random strategies are reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            engine: None,
            max_undo: DEFAULT_MAX_UNDO,
            strategies: ColorMap::new(|_| None),
            replay: None,
            rng,
        }
    }

    /// Undo budget applied to games started after this call.
    #[must_use]
    pub fn with_max_undo(mut self, max_undo: u32) -> Self {
        self.max_undo = max_undo;
        self
    }

    // === Accessors ===

    /// The active engine, if a game is running.
    #[must_use]
    pub fn engine(&self) -> Option<&AnyEngine> {
        self.engine.as_ref()
    }

    /// The loaded replay, if any.
    #[must_use]
    pub fn replay(&self) -> Option<&ReplayCursor> {
        self.replay.as_ref()
    }

    fn require(&self) -> Result<&AnyEngine> {
        self.engine.as_ref().ok_or(GameError::NoActiveGame)
    }

    fn require_mut(&mut self) -> Result<&mut AnyEngine> {
        self.engine.as_mut().ok_or(GameError::NoActiveGame)
    }

    fn require_replay(&mut self) -> Result<&mut ReplayCursor> {
        self.replay.as_mut().ok_or(GameError::NoReplayLoaded)
    }

    fn config(&self, board_size: usize) -> EngineConfig {
        EngineConfig::new(board_size).with_max_undo(self.max_undo)
    }

    // === Game lifecycle ===

    /// Replace any current game with a fresh one.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, game: GameType, board_size: usize) -> Result<()> {
        let engine = AnyEngine::with_config(game, self.config(board_size))?;
        info!(%game, board_size, "game started");
        self.engine = Some(engine);
        Ok(())
    }

    /// Place a stone for the side to move.
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<Move> {
        self.require_mut()?.play(Position::new(row, col))
    }

    pub fn pass_turn(&mut self) -> Result<()> {
        self.require_mut()?.pass_turn()
    }

    pub fn undo(&mut self) -> Result<Move> {
        self.require_mut()?.undo()
    }

    /// `color` concedes; defaults to the side to move.
    pub fn resign(&mut self, color: Option<Color>) -> Result<()> {
        let engine = self.require_mut()?;
        let color = color.unwrap_or_else(|| engine.current_player());
        engine.resign(color)
    }

    pub fn restart(&mut self) -> Result<()> {
        self.require_mut()?.restart()
    }

    // === Save files ===

    /// Write the active game to `path` as JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let record = self.require()?.serialize();
        save_json(path, &record)
    }

    /// Replace the active game with the one saved at `path`.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let record: GameRecord = load_json(path)?;
        let engine = AnyEngine::from_record(&record, self.max_undo)?;
        info!(game = %engine.game_type(), moves = engine.history().len(), "game loaded");
        self.engine = Some(engine);
        Ok(())
    }

    // === Display ===

    /// Text board: 1-based labels, `X` black, `O` white, `.` empty.
    pub fn board_display(&self) -> Result<String> {
        Ok(self.require()?.grid().to_string())
    }

    /// One-line summary of game, side to move, resources and result.
    pub fn status(&self) -> Result<String> {
        let engine = self.require()?;
        let size = engine.board_size();
        let mut line = format!(
            "Game: {} {size}x{size} | To move: {}",
            engine.game_type().label(),
            engine.current_player()
        );
        for (color, data) in self.resources()?.iter() {
            let _ = write!(
                line,
                " | {color}: {} on board, {} in supply, {} undo left",
                data.stones_on_board, data.stones_remaining, data.undo_remaining
            );
        }
        if let Some(result) = engine.result() {
            match result.winner() {
                Some(winner) => {
                    let _ = write!(line, " | Winner: {winner}");
                }
                None => line.push_str(" | Result: draw"),
            }
            let _ = write!(line, " | Reason: {}", result.reason());
        }
        Ok(line)
    }

    /// Counters for both colors.
    pub fn resources(&self) -> Result<ColorMap<ResourceSnapshot>> {
        let engine = self.require()?;
        Ok(ColorMap::new(|color| ResourceSnapshot {
            stones_on_board: engine.stones_on_board(color),
            stones_remaining: engine.stones_remaining(color),
            undo_remaining: engine.undo_remaining(color),
        }))
    }

    // === Strategies ===

    /// Let a built-in strategy play `color`.
    pub fn set_strategy(&mut self, color: Color, kind: StrategyKind) {
        let strategy = kind.build(&mut self.rng);
        self.install_strategy(color, strategy);
    }

    /// Let a custom strategy play `color`.
    pub fn install_strategy(&mut self, color: Color, strategy: Box<dyn MoveStrategy>) {
        debug!(%color, strategy = strategy.name(), "strategy set");
        self.strategies[color] = Some(strategy);
    }

    pub fn clear_strategy(&mut self, color: Color) {
        self.strategies[color] = None;
    }

    #[must_use]
    pub fn has_strategy(&self, color: Color) -> bool {
        self.strategies[color].is_some()
    }

    /// Let the side to move's strategy play.
    ///
    /// Passes when there is no legal placement. Returns the recorded move,
    /// or `None` if the strategy declined to choose.
    #[instrument(skip(self))]
    pub fn play_strategy_move(&mut self) -> Result<Option<Move>> {
        let engine = self.engine.as_mut().ok_or(GameError::NoActiveGame)?;
        let color = engine.current_player();
        let strategy = self.strategies[color]
            .as_mut()
            .ok_or(GameError::NoStrategy { color })?;

        let legal = engine.legal_positions();
        if legal.is_empty() {
            engine.pass_turn()?;
            return Ok(Some(Move::pass(color)));
        }
        match strategy.choose(engine.grid(), color, &legal) {
            Some(position) => engine.play(position).map(Some),
            None => {
                debug!(%color, strategy = strategy.name(), "strategy declined");
                Ok(None)
            }
        }
    }

    // === Replays ===

    /// Write the active game's moves to `path`.
    pub fn save_replay(&self, path: impl AsRef<Path>) -> Result<()> {
        let record = ReplayCursor::from_engine(self.require()?).to_record();
        save_json(path, &record)
    }

    /// Load a replay; the cursor starts before the first move.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_replay(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let record: ReplayRecord = load_json(path)?;
        let cursor = ReplayCursor::from_record(&record)?;
        info!(game = %cursor.game_type(), moves = cursor.len(), "replay loaded");
        self.replay = Some(cursor);
        Ok(())
    }

    /// Move the replay cursor and make the board at that point the active
    /// game.
    pub fn jump_to_replay(&mut self, index: isize) -> Result<()> {
        let mut cursor = self.replay.clone().ok_or(GameError::NoReplayLoaded)?;
        cursor.jump_to(index);
        let engine = cursor.rebuild_with(self.config(cursor.board_size()))?;
        self.replay = Some(cursor);
        self.engine = Some(engine);
        Ok(())
    }

    pub fn start_replay(&mut self) -> Result<()> {
        self.require_replay()?.start();
        Ok(())
    }

    pub fn stop_replay(&mut self) -> Result<()> {
        self.require_replay()?.stop();
        Ok(())
    }
}
