//! The three rule sets and a closed dispatcher over them.
//!
//! Each rule set plugs into the shared `Engine`. `AnyEngine` picks one at
//! runtime from a `GameType`, which is what sessions, replays and saved
//! records need.

pub mod go;
pub mod gomoku;
pub mod reversi;

use crate::core::{
    BoardState, Color, EngineConfig, GameError, GameType, Grid, Move, Position, Result,
};
use crate::persistence::GameRecord;
use crate::rules::{Engine, GameResult};

pub use go::Go;
pub use gomoku::Gomoku;
pub use reversi::Reversi;

/// Five-in-a-row engine.
pub type GomokuEngine = Engine<Gomoku>;
/// Enclosing-capture engine.
pub type GoEngine = Engine<Go>;
/// Disc-flipping engine.
pub type ReversiEngine = Engine<Reversi>;

/// An engine for any of the supported games.
///
/// ## Example
///
/// ```
/// use grid_games::core::{GameType, Position};
/// use grid_games::games::AnyEngine;
///
/// let mut engine = AnyEngine::new(GameType::Reversi, 8).unwrap();
/// assert_eq!(engine.legal_positions().len(), 4);
///
/// engine.play(Position::new(2, 3)).unwrap();
/// assert_eq!(engine.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub enum AnyEngine {
    Gomoku(GomokuEngine),
    Go(GoEngine),
    Reversi(ReversiEngine),
}

macro_rules! dispatch {
    ($self:expr, $engine:ident => $body:expr) => {
        match $self {
            AnyEngine::Gomoku($engine) => $body,
            AnyEngine::Go($engine) => $body,
            AnyEngine::Reversi($engine) => $body,
        }
    };
}

impl AnyEngine {
    /// Engine for `game` on a `board_size` board with the default undo budget.
    pub fn new(game: GameType, board_size: usize) -> Result<Self> {
        Self::with_config(game, EngineConfig::new(board_size))
    }

    /// Engine for `game` with an explicit configuration.
    pub fn with_config(game: GameType, config: EngineConfig) -> Result<Self> {
        Ok(match game {
            GameType::Gomoku => Self::Gomoku(Engine::new(config)?),
            GameType::Go => Self::Go(Engine::new(config)?),
            GameType::Reversi => Self::Reversi(Engine::new(config)?),
        })
    }

    /// Rebuild an engine from a save-game record.
    ///
    /// The record must name its game; the board size comes from the record.
    pub fn from_record(record: &GameRecord, max_undo: u32) -> Result<Self> {
        let game = record
            .game_type
            .ok_or_else(|| GameError::format("record does not name a game type"))?;
        let config = EngineConfig::new(record.board_size).with_max_undo(max_undo);
        let mut engine = Self::with_config(game, config)?;
        engine.deserialize(record)?;
        Ok(engine)
    }

    /// Engine for `game` at its default board size.
    pub fn for_game(game: GameType) -> Result<Self> {
        Self::with_config(game, EngineConfig::for_game(game))
    }

    // === Accessors ===

    #[must_use]
    pub fn game_type(&self) -> GameType {
        dispatch!(self, e => e.game_type())
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        dispatch!(self, e => e.config())
    }

    #[must_use]
    pub fn state(&self) -> &BoardState {
        dispatch!(self, e => e.state())
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        dispatch!(self, e => e.grid())
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.grid().size()
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        dispatch!(self, e => e.current_player())
    }

    #[must_use]
    pub fn history(&self) -> &im::Vector<Move> {
        dispatch!(self, e => e.history())
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        dispatch!(self, e => e.result())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        dispatch!(self, e => e.is_finished())
    }

    #[must_use]
    pub fn stones_on_board(&self, color: Color) -> u32 {
        dispatch!(self, e => e.stones_on_board(color))
    }

    #[must_use]
    pub fn stones_remaining(&self, color: Color) -> u32 {
        dispatch!(self, e => e.stones_remaining(color))
    }

    #[must_use]
    pub fn undo_remaining(&self, color: Color) -> u32 {
        dispatch!(self, e => e.undo_remaining(color))
    }

    #[must_use]
    pub fn captured(&self, color: Color) -> u32 {
        dispatch!(self, e => e.captured(color))
    }

    /// Legal placements for the side to move; empty once finished.
    #[must_use]
    pub fn legal_positions(&self) -> Vec<Position> {
        dispatch!(self, e => e.legal_positions())
    }

    // === Protocol ===

    pub fn play(&mut self, position: Position) -> Result<Move> {
        dispatch!(self, e => e.play(position))
    }

    pub fn pass_turn(&mut self) -> Result<()> {
        dispatch!(self, e => e.pass_turn())
    }

    pub fn undo(&mut self) -> Result<Move> {
        dispatch!(self, e => e.undo())
    }

    pub fn resign(&mut self, color: Color) -> Result<()> {
        dispatch!(self, e => e.resign(color))
    }

    pub fn restart(&mut self) -> Result<()> {
        dispatch!(self, e => e.restart())
    }

    /// Re-drive a recorded move through the normal protocol.
    ///
    /// Fails with `Format` when the move belongs to the other side; that
    /// only happens with a corrupt or foreign move list.
    pub fn apply_move(&mut self, mv: &Move) -> Result<()> {
        let expected = self.current_player();
        if mv.color() != expected {
            return Err(GameError::format(format!(
                "recorded move {mv} out of turn, {expected} to move"
            )));
        }
        match mv.position() {
            Some(position) => self.play(position).map(drop),
            None => self.pass_turn(),
        }
    }

    // === Persistence ===

    #[must_use]
    pub fn serialize(&self) -> GameRecord {
        dispatch!(self, e => e.serialize())
    }

    pub fn deserialize(&mut self, record: &GameRecord) -> Result<()> {
        dispatch!(self, e => e.deserialize(record))
    }
}

impl From<GomokuEngine> for AnyEngine {
    fn from(engine: GomokuEngine) -> Self {
        Self::Gomoku(engine)
    }
}

impl From<GoEngine> for AnyEngine {
    fn from(engine: GoEngine) -> Self {
        Self::Go(engine)
    }
}

impl From<ReversiEngine> for AnyEngine {
    fn from(engine: ReversiEngine) -> Self {
        Self::Reversi(engine)
    }
}
