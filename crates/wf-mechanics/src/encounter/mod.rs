//! Encounters: kinds, player actions, the catalog, and the resolver.

pub mod catalog;
pub mod resolver;
pub mod reward;

pub use catalog::{EncounterCatalog, EncounterDefinition, NegotiationRules, NpcTable};
pub use resolver::{EncounterResolver, Resolution};
pub use reward::{Reward, RewardPool};

use serde::{Deserialize, Serialize};

/// What a grid room contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EncounterKind {
    /// Nothing happens.
    Empty,
    /// A hostile creature.
    Enemy,
    /// A trap to disarm.
    Trap,
    /// A puzzle to solve.
    Puzzle,
    /// A loose item.
    Item,
    /// A treasure chest.
    Treasure,
    /// A non-player character to talk to.
    #[serde(rename = "NPC")]
    Npc,
}

impl EncounterKind {
    /// The kinds backed by a catalog entry.
    pub fn catalogued() -> &'static [Self] {
        &[
            Self::Enemy,
            Self::Trap,
            Self::Puzzle,
            Self::Item,
            Self::Treasure,
        ]
    }

    /// The display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Enemy => "Enemy",
            Self::Trap => "Trap",
            Self::Puzzle => "Puzzle",
            Self::Item => "Item",
            Self::Treasure => "Treasure",
            Self::Npc => "NPC",
        }
    }

    /// Whether a successful contest yields an item from the reward pool.
    pub fn grants_loot(self) -> bool {
        matches!(self, Self::Item | Self::Treasure)
    }
}

impl std::fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Option labels that trigger the encounter's skill check.
pub const CONTEST_OPTIONS: &[&str] = &[
    "Fight",
    "Disarm",
    "Analyze",
    "Take it",
    "Open it",
    "Inspect it",
];

/// Option labels that walk away from any encounter.
pub const AVOID_OPTIONS: &[&str] = &["Leave it alone", "Leave it"];

/// How the resolver treats a chosen option label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Declined input or a "leave it" option.
    Avoid,
    /// The encounter's skill check.
    Contest,
    /// Run away.
    Flee,
    /// Talk your way through with Intelligence.
    Negotiate,
    /// Speak with an NPC.
    Talk,
    /// A label with no mechanical meaning.
    Other,
}

impl Action {
    /// Classify an option label. `None` means the player declined to choose.
    pub fn classify(choice: Option<&str>) -> Self {
        let Some(choice) = choice.map(str::trim) else {
            return Self::Avoid;
        };
        let is = |labels: &[&str]| labels.iter().any(|l| l.eq_ignore_ascii_case(choice));

        if choice.is_empty() || is(AVOID_OPTIONS) {
            Self::Avoid
        } else if is(CONTEST_OPTIONS) {
            Self::Contest
        } else if choice.eq_ignore_ascii_case("Flee") {
            Self::Flee
        } else if choice.eq_ignore_ascii_case("Negotiate") {
            Self::Negotiate
        } else if choice.eq_ignore_ascii_case("Talk") {
            Self::Talk
        } else {
            Self::Other
        }
    }
}
