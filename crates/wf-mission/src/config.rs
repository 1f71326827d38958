//! Configuration for a play session.

use serde::{Deserialize, Serialize};

use crate::error::{MissionError, MissionResult};
use crate::grid::{GridStrategy, ObjectivePlacement};

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for reproducible grids and rolls.
    pub seed: u64,
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// How rooms are populated.
    pub strategy: GridStrategy,
    /// Where the objective goes.
    pub objective: ObjectivePlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 5,
            height: 5,
            strategy: GridStrategy::default(),
            objective: ObjectivePlacement::FarCorner,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> MissionResult<Self> {
        serde_json::from_str(json).map_err(|e| MissionError::InvalidConfig(e.to_string()))
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the grid size.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the room population strategy.
    pub fn with_strategy(mut self, strategy: GridStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the objective placement.
    pub fn with_objective(mut self, objective: ObjectivePlacement) -> Self {
        self.objective = objective;
        self
    }
}
