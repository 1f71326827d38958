//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A mission began.
    MissionStart {
        /// Mission type name.
        mission_type: String,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
        /// When the mission started.
        timestamp: DateTime<Utc>,
    },
    /// A mission ended.
    MissionEnd {
        /// Mission type name.
        mission_type: String,
        /// How it ended (completed, abandoned, lost).
        outcome: String,
        /// Moves made.
        moves: u32,
        /// When the mission ended.
        timestamp: DateTime<Utc>,
    },
    /// Story narration.
    Story {
        /// The narrative text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
    /// The player moved.
    Move {
        /// Direction moved.
        direction: String,
        /// Destination column.
        x: usize,
        /// Destination row.
        y: usize,
        /// When moved.
        timestamp: DateTime<Utc>,
    },
    /// An encounter was resolved.
    Encounter {
        /// Encounter kind name.
        kind: String,
        /// The option chosen, if any.
        choice: Option<String>,
        /// What happened.
        outcome: String,
        /// When resolved.
        timestamp: DateTime<Utc>,
    },
    /// A skill check outside an encounter.
    Check {
        /// Skill tested.
        skill: String,
        /// The d20 roll.
        roll: u32,
        /// Skill bonus added.
        bonus: u32,
        /// Whether it passed.
        success: bool,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// An item was bought or sold.
    Trade {
        /// Item traded.
        item: String,
        /// Gold paid (negative) or received (positive).
        gold: i64,
        /// When traded.
        timestamp: DateTime<Utc>,
    },
    /// The character gained a level.
    LevelUp {
        /// New level.
        level: u32,
        /// Skill points available.
        skill_points: u32,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// The character died.
    Death {
        /// Character name.
        name: String,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}
