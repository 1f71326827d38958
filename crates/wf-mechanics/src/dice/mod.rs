//! Dice, random draws, and pass/fail checks.
//!
//! All randomness in the game flows through [`DiceSource`]. The production
//! source is a seeded [`StdRng`]; tests and replays use [`ScriptedDice`] to
//! inject exact rolls.

pub mod check;
pub mod scripted;

pub use check::{
    AMBIENT_THRESHOLD, SkillCheck, determine_result, is_ambient_success, is_skill_check_success,
    roll_d20, skill_check,
};
pub use scripted::ScriptedDice;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A die the game rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Twenty-sided die, used for every check.
    D20,
    /// A die with any number of sides (at least one).
    Sides(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D20 => 20,
            Self::Sides(n) => n.max(1),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A source of random draws.
///
/// Implementations must return values inside the documented ranges; the
/// grid generator, resolver, and reward pools rely on it.
pub trait DiceSource {
    /// Roll a die, returning a value in `1..=die.sides()`.
    fn roll(&mut self, die: Die) -> u32;

    /// Pick an index uniformly from `0..len`. `len` is always non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Return `true` with the given probability (0.0 to 1.0).
    fn chance(&mut self, probability: f64) -> bool;
}

impl DiceSource for StdRng {
    fn roll(&mut self, die: Die) -> u32 {
        self.random_range(1..=die.sides())
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len.max(1))
    }

    fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.random_bool(probability.clamp(0.0, 1.0))
    }
}
