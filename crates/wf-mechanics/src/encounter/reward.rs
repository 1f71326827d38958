//! Weighted reward pools.

use serde::{Deserialize, Serialize};

use crate::dice::DiceSource;

const fn default_weight() -> u32 {
    1
}

/// One entry in a reward pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Item granted.
    pub item: String,
    /// Relative weight. Equal weights make the pool uniform.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// A weighted list of items to draw from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardPool {
    entries: Vec<Reward>,
}

impl RewardPool {
    /// Build a uniform pool from item names.
    pub fn uniform<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: items
                .into_iter()
                .map(|item| Reward {
                    item: item.into(),
                    weight: 1,
                })
                .collect(),
        }
    }

    /// The pool entries.
    pub fn entries(&self) -> &[Reward] {
        &self.entries
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|r| r.weight).sum()
    }

    /// Returns true if nothing can be drawn.
    pub fn is_empty(&self) -> bool {
        self.total_weight() == 0
    }

    /// Draw one item, or `None` if the pool is empty.
    pub fn draw(&self, dice: &mut impl DiceSource) -> Option<&str> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let mut ticket = dice.pick(total as usize) as u32;
        for reward in &self.entries {
            if ticket < reward.weight {
                return Some(&reward.item);
            }
            ticket -= reward.weight;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn uniform_pick_maps_to_index() {
        let pool = RewardPool::uniform(["Gold", "Health Potion", "Weapon Upgrade"]);
        let mut dice = ScriptedDice::new().with_picks([0, 2, 1]);
        assert_eq!(pool.draw(&mut dice), Some("Gold"));
        assert_eq!(pool.draw(&mut dice), Some("Weapon Upgrade"));
        assert_eq!(pool.draw(&mut dice), Some("Health Potion"));
    }

    #[test]
    fn weighted_pick_walks_cumulative_weights() {
        let pool: RewardPool = serde_json::from_str(
            r#"[{"item": "Common", "weight": 3}, {"item": "Rare"}]"#,
        )
        .unwrap();
        assert_eq!(pool.total_weight(), 4);
        let mut dice = ScriptedDice::new().with_picks([2, 3]);
        assert_eq!(pool.draw(&mut dice), Some("Common"));
        assert_eq!(pool.draw(&mut dice), Some("Rare"));
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let pool = RewardPool::default();
        assert!(pool.is_empty());
        assert_eq!(pool.draw(&mut ScriptedDice::new()), None);
    }
}
