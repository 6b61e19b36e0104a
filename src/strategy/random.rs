use super::MoveStrategy;
use crate::core::{Color, GameRng, Grid, Position};

/// Uniformly random choice among legal positions.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seeded strategy, for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl MoveStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, _grid: &Grid, _color: Color, legal: &[Position]) -> Option<Position> {
        self.rng.choose(legal).copied()
    }
}
