//! Move-selection strategies.
//!
//! Strategies are collaborators: the engine never calls them. A caller
//! asks the engine for its legal positions, lets a strategy pick one, and
//! feeds the pick back into `play`.
//!
//! - `RandomStrategy`: uniform choice (level 1)
//! - `WeightedStrategy`: positional weights plus flip count (level 2)

mod random;
mod weighted;

pub use random::RandomStrategy;
pub use weighted::{WeightedStrategy, FLIP_WEIGHT, POSITION_WEIGHTS};

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameRng, Grid, Position};

/// Picks a placement from a list of legal positions.
pub trait MoveStrategy: Send + std::fmt::Debug {
    /// Short name for logs and status lines.
    fn name(&self) -> &'static str;

    /// Choose one of `legal` for `color` on `grid`.
    ///
    /// Returns `None` only when `legal` is empty.
    fn choose(&mut self, grid: &Grid, color: Color, legal: &[Position]) -> Option<Position>;
}

/// The built-in strategies, by difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Weighted,
}

impl StrategyKind {
    /// Strategy for difficulty level 1 or 2.
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Random),
            2 => Some(Self::Weighted),
            _ => None,
        }
    }

    /// Difficulty level of this strategy.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::Random => 1,
            Self::Weighted => 2,
        }
    }

    /// Instantiate, handing random strategies their own stream.
    #[must_use]
    pub fn build(self, rng: &mut GameRng) -> Box<dyn MoveStrategy> {
        match self {
            Self::Random => Box::new(RandomStrategy::new(rng.fork())),
            Self::Weighted => Box::new(WeightedStrategy),
        }
    }
}
