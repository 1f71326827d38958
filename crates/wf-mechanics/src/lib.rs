//! Game mechanics for Wayfarer.
//!
//! Provides the dice layer, the player character model, the encounter
//! catalog, and the encounter resolver. Everything here is deterministic
//! given a [`DiceSource`], so the mission layer and tests can replay exact
//! outcomes.

pub mod character;
pub mod dice;
pub mod encounter;
pub mod error;

pub use character::{Character, LevelUp, Meter, Skill};
pub use dice::{DiceSource, Die, ScriptedDice, SkillCheck};
pub use encounter::{EncounterCatalog, EncounterKind, EncounterResolver, Resolution};
pub use error::{MechError, MechResult};
