//! d20 checks: a roll plus a bonus compared against a threshold.
//!
//! Two comparison rules exist. Ambient checks need to beat the threshold
//! (`>`); encounter skill checks only need to meet it (`>=`).

use serde::{Deserialize, Serialize};

use super::{DiceSource, Die};

/// Threshold used by ambient checks that have no encounter difficulty.
pub const AMBIENT_THRESHOLD: u32 = 15;

/// Roll a single d20.
pub fn roll_d20(dice: &mut impl DiceSource) -> u32 {
    dice.roll(Die::D20)
}

/// Ambient success: `roll + bonus` must exceed `threshold`.
pub fn is_ambient_success(roll: u32, bonus: u32, threshold: u32) -> bool {
    roll + bonus > threshold
}

/// Skill check success: `roll + bonus` must meet or exceed `threshold`.
pub fn is_skill_check_success(roll: u32, bonus: u32, threshold: u32) -> bool {
    roll + bonus >= threshold
}

/// Roll an ambient check for a skill value against [`AMBIENT_THRESHOLD`].
pub fn determine_result(skill_value: u32, dice: &mut impl DiceSource) -> SkillCheck {
    let roll = roll_d20(dice);
    let success = is_ambient_success(roll, skill_value, AMBIENT_THRESHOLD);
    SkillCheck::new(roll, skill_value, AMBIENT_THRESHOLD, success)
}

/// Roll an encounter skill check for a skill value against a difficulty.
pub fn skill_check(skill_value: u32, difficulty: u32, dice: &mut impl DiceSource) -> SkillCheck {
    let roll = roll_d20(dice);
    let success = is_skill_check_success(roll, skill_value, difficulty);
    let check = SkillCheck::new(roll, skill_value, difficulty, success);
    log::debug!("skill check: {check}");
    check
}

/// The record of a single d20 check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheck {
    /// The raw d20 value.
    pub roll: u32,
    /// The skill bonus added to the roll.
    pub bonus: u32,
    /// The threshold the total was compared against.
    pub difficulty: u32,
    /// Whether the check passed.
    pub success: bool,
}

impl SkillCheck {
    fn new(roll: u32, bonus: u32, difficulty: u32, success: bool) -> Self {
        Self {
            roll,
            bonus,
            difficulty,
            success,
        }
    }

    /// Roll plus bonus.
    pub fn total(&self) -> u32 {
        self.roll + self.bonus
    }
}

impl std::fmt::Display for SkillCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rolled {} + {} = {} against difficulty {} ({})",
            self.roll,
            self.bonus,
            self.total(),
            self.difficulty,
            if self.success { "success" } else { "failure" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn tie_passes_skill_check_but_not_ambient() {
        assert!(is_skill_check_success(5, 7, 12));
        assert!(!is_ambient_success(5, 7, 12));
    }

    #[test]
    fn above_threshold_passes_both() {
        assert!(is_skill_check_success(6, 7, 12));
        assert!(is_ambient_success(6, 7, 12));
    }

    #[test]
    fn below_threshold_fails_both() {
        assert!(!is_skill_check_success(4, 7, 12));
        assert!(!is_ambient_success(4, 7, 12));
    }

    #[test]
    fn injected_tie_through_skill_check() {
        let mut dice = ScriptedDice::new().with_rolls([2]);
        let check = skill_check(10, 12, &mut dice);
        assert_eq!(check.total(), 12);
        assert!(check.success);
    }

    #[test]
    fn injected_tie_through_ambient_check() {
        let mut dice = ScriptedDice::new().with_rolls([5]);
        let check = determine_result(10, &mut dice);
        assert_eq!(check.total(), AMBIENT_THRESHOLD);
        assert!(!check.success);

        let mut dice = ScriptedDice::new().with_rolls([6]);
        assert!(determine_result(10, &mut dice).success);
    }

    #[test]
    fn display() {
        let mut dice = ScriptedDice::new().with_rolls([5]);
        let check = skill_check(10, 12, &mut dice);
        assert_eq!(
            check.to_string(),
            "rolled 5 + 10 = 15 against difficulty 12 (success)"
        );
    }
}
