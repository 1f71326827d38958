//! The encounter catalog: immutable data describing every encounter kind.
//!
//! The standard table ships as JSON inside the crate and is parsed once into
//! a process-wide value. Resolvers borrow it; nothing mutates it.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::EncounterKind;
use super::reward::RewardPool;
use crate::character::Skill;
use crate::error::{MechError, MechResult};

const STANDARD_CATALOG: &str = include_str!("../../data/encounters.json");

/// Catalog entry for one encounter kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterDefinition {
    /// Text shown when the encounter starts.
    pub prompt: String,
    /// Option labels offered to the player, in order.
    pub options: Vec<String>,
    /// Skill tested by the contest option.
    pub skill: Skill,
    /// Difficulty the check must meet.
    pub difficulty: u32,
    /// Shown when the check passes.
    pub success_message: String,
    /// Shown when the check fails.
    pub failure_message: String,
    /// XP granted on success.
    pub xp_reward: u32,
    /// Health lost on failure.
    pub failure_penalty: u32,
    /// Items that can be found on success (loot kinds only).
    #[serde(default)]
    pub rewards: RewardPool,
}

impl EncounterDefinition {
    /// Returns true if the label is one of this encounter's options.
    pub fn offers(&self, choice: &str) -> bool {
        self.options
            .iter()
            .any(|o| o.eq_ignore_ascii_case(choice.trim()))
    }
}

/// Rules for the Negotiate option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationRules {
    /// Skill tested (against the encounter's own difficulty).
    pub skill: Skill,
    /// Health lost on a failed negotiation.
    pub failure_penalty: u32,
    /// Items that can be won.
    pub rewards: RewardPool,
}

impl Default for NegotiationRules {
    fn default() -> Self {
        Self {
            skill: Skill::Intelligence,
            failure_penalty: 5,
            rewards: RewardPool::default(),
        }
    }
}

/// A named NPC and the lines they can say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcCharacter {
    /// NPC name.
    pub name: String,
    /// Dialogue lines, one chosen per meeting.
    pub lines: Vec<String>,
}

/// Something an NPC does for the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcAid {
    /// Narration of the aid.
    pub text: String,
    /// Item handed over, if any.
    #[serde(default)]
    pub item: Option<String>,
}

/// Data for NPC rooms, which are not regular catalog entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcTable {
    /// Text shown when an NPC appears.
    pub prompt: String,
    /// Option labels offered to the player.
    pub options: Vec<String>,
    /// XP granted for talking.
    pub xp_reward: u32,
    /// NPCs that can appear.
    pub characters: Vec<NpcCharacter>,
    /// Possible aid outcomes.
    pub aid: Vec<NpcAid>,
}

/// The full encounter data table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterCatalog {
    encounters: HashMap<EncounterKind, EncounterDefinition>,
    #[serde(default)]
    negotiation: NegotiationRules,
    #[serde(default)]
    npcs: NpcTable,
}

impl EncounterCatalog {
    /// The process-wide standard catalog, parsed on first use.
    pub fn shared() -> MechResult<&'static Self> {
        static CATALOG: OnceLock<Result<EncounterCatalog, String>> = OnceLock::new();
        CATALOG
            .get_or_init(|| {
                Self::standard().map_err(|e| match e {
                    MechError::InvalidCatalog(msg) => msg,
                    other => other.to_string(),
                })
            })
            .as_ref()
            .map_err(|msg| MechError::InvalidCatalog(msg.clone()))
    }

    /// Parse the standard catalog shipped with the crate.
    pub fn standard() -> MechResult<Self> {
        Self::from_json(STANDARD_CATALOG)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| MechError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> MechResult<()> {
        for (kind, def) in &self.encounters {
            if def.options.is_empty() {
                return Err(MechError::InvalidCatalog(format!("{kind} has no options")));
            }
            if kind.grants_loot() && def.rewards.is_empty() {
                return Err(MechError::InvalidCatalog(format!(
                    "{kind} has an empty reward pool"
                )));
            }
        }
        if self.negotiation.rewards.is_empty() {
            return Err(MechError::InvalidCatalog(
                "negotiation reward pool is empty".to_string(),
            ));
        }
        if self.npcs.characters.iter().any(|c| c.lines.is_empty()) {
            return Err(MechError::InvalidCatalog(
                "every NPC needs at least one line".to_string(),
            ));
        }
        Ok(())
    }

    /// Look up the definition for an encounter kind.
    pub fn get(&self, kind: EncounterKind) -> MechResult<&EncounterDefinition> {
        self.encounters
            .get(&kind)
            .ok_or_else(|| MechError::UnknownEncounterKind(kind.to_string()))
    }

    /// Negotiation rules.
    pub fn negotiation(&self) -> &NegotiationRules {
        &self.negotiation
    }

    /// NPC dialogue data.
    pub fn npcs(&self) -> &NpcTable {
        &self.npcs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_parses() {
        let catalog = EncounterCatalog::standard().unwrap();
        for kind in EncounterKind::catalogued() {
            assert!(catalog.get(*kind).is_ok(), "missing {kind}");
        }
    }

    #[test]
    fn shared_catalog_is_parsed_once() {
        let first = EncounterCatalog::shared().unwrap();
        let second = EncounterCatalog::shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.get(EncounterKind::Enemy).is_ok());
    }

    #[test]
    fn standard_values_match_table() {
        let catalog = EncounterCatalog::shared().unwrap();
        let enemy = catalog.get(EncounterKind::Enemy).unwrap();
        assert_eq!(enemy.skill, Skill::Strength);
        assert_eq!(enemy.difficulty, 12);
        assert_eq!(enemy.xp_reward, 20);
        assert_eq!(enemy.failure_penalty, 15);
        assert_eq!(enemy.options, vec!["Fight", "Flee", "Negotiate"]);

        let trap = catalog.get(EncounterKind::Trap).unwrap();
        assert_eq!((trap.skill, trap.difficulty), (Skill::Agility, 10));
        let puzzle = catalog.get(EncounterKind::Puzzle).unwrap();
        assert_eq!((puzzle.difficulty, puzzle.xp_reward), (14, 25));
        let item = catalog.get(EncounterKind::Item).unwrap();
        assert_eq!(item.rewards.entries().len(), 4);
        let treasure = catalog.get(EncounterKind::Treasure).unwrap();
        assert_eq!((treasure.difficulty, treasure.failure_penalty), (9, 10));
    }

    #[test]
    fn special_kinds_are_not_catalogued() {
        let catalog = EncounterCatalog::shared().unwrap();
        assert!(matches!(
            catalog.get(EncounterKind::Npc),
            Err(MechError::UnknownEncounterKind(_))
        ));
        assert!(catalog.get(EncounterKind::Empty).is_err());
    }

    #[test]
    fn negotiation_and_npcs_loaded() {
        let catalog = EncounterCatalog::shared().unwrap();
        assert_eq!(catalog.negotiation().skill, Skill::Intelligence);
        assert_eq!(catalog.negotiation().failure_penalty, 5);
        assert_eq!(catalog.negotiation().rewards.entries().len(), 3);
        assert_eq!(catalog.npcs().characters.len(), 2);
        assert_eq!(catalog.npcs().xp_reward, 10);
    }

    #[test]
    fn offers_ignores_case() {
        let catalog = EncounterCatalog::shared().unwrap();
        let item = catalog.get(EncounterKind::Item).unwrap();
        assert!(item.offers("take it"));
        assert!(!item.offers("Fight"));
    }

    #[test]
    fn rejects_loot_kind_without_rewards() {
        let json = r#"{
            "encounters": {
                "Item": {
                    "prompt": "p", "options": ["Take it"], "skill": "Intelligence",
                    "difficulty": 8, "success_message": "s", "failure_message": "f",
                    "xp_reward": 10, "failure_penalty": 5
                }
            },
            "negotiation": { "skill": "Intelligence", "failure_penalty": 5, "rewards": [{"item": "Gold"}] }
        }"#;
        assert!(matches!(
            EncounterCatalog::from_json(json),
            Err(MechError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            EncounterCatalog::from_json("not json"),
            Err(MechError::InvalidCatalog(_))
        ));
    }
}
