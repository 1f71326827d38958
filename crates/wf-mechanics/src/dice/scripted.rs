//! Deterministic dice for tests and replays.

use std::collections::VecDeque;

use super::{DiceSource, Die};

/// A [`DiceSource`] that replays queued values.
///
/// Rolls, picks, and chance results are kept in separate queues. When a
/// queue runs dry the fallback value is used: rolls fall back to 10, picks
/// to index 0, and chances to `false`. Values are clamped into the range
/// the caller asked for.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedDice {
    /// Create an empty script that always returns the fallback values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue die roll results.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue uniform pick results.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue chance results.
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Number of queued rolls not yet consumed.
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, die: Die) -> u32 {
        self.rolls.pop_front().unwrap_or(10).clamp(1, die.sides())
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
