//! The fixed set of character skills.

use serde::{Deserialize, Serialize};

/// A character skill. The set is fixed; there are no custom skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    /// Raw physical power. Used in combat.
    Strength,
    /// Speed and reflexes. Used against traps.
    Agility,
    /// Reasoning. Used for puzzles, items, treasure, and negotiation.
    Intelligence,
    /// Force of personality.
    Charisma,
    /// Stamina.
    Endurance,
    /// Fine motor control.
    Dexterity,
}

impl Skill {
    /// All skills in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Strength,
            Self::Agility,
            Self::Intelligence,
            Self::Charisma,
            Self::Endurance,
            Self::Dexterity,
        ]
    }

    /// Parse a skill name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "agility" | "agi" => Some(Self::Agility),
            "intelligence" | "int" => Some(Self::Intelligence),
            "charisma" | "cha" => Some(Self::Charisma),
            "endurance" | "end" => Some(Self::Endurance),
            "dexterity" | "dex" => Some(Self::Dexterity),
            _ => None,
        }
    }

    /// The display name of this skill.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Intelligence => "Intelligence",
            Self::Charisma => "Charisma",
            Self::Endurance => "Endurance",
            Self::Dexterity => "Dexterity",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_abbreviations() {
        assert_eq!(Skill::parse("Strength"), Some(Skill::Strength));
        assert_eq!(Skill::parse("agility"), Some(Skill::Agility));
        assert_eq!(Skill::parse(" INT "), Some(Skill::Intelligence));
        assert_eq!(Skill::parse("luck"), None);
    }

    #[test]
    fn names_round_trip() {
        for skill in Skill::all() {
            assert_eq!(Skill::parse(skill.name()), Some(*skill));
        }
    }
}
