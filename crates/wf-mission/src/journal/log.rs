//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A journal holding only the last `n` entries.
    pub fn tail(&self, n: usize) -> Self {
        let start = self.entries.len().saturating_sub(n);
        Self {
            entries: self.entries[start..].to_vec(),
        }
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Wayfarer Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::MissionStart {
                    mission_type,
                    width,
                    height,
                    ..
                } => {
                    out.push_str(&format!("## {mission_type} Mission\n\n"));
                    out.push_str(&format!("**Grid**: {width}x{height}\n\n"));
                }
                JournalEntry::MissionEnd {
                    mission_type,
                    outcome,
                    moves,
                    ..
                } => {
                    out.push_str(&format!(
                        "*{mission_type} mission {outcome}* after {moves} moves\n\n"
                    ));
                }
                JournalEntry::Story { text, .. } => {
                    out.push_str(&format!("{text}\n\n"));
                }
                JournalEntry::Move { direction, x, y, .. } => {
                    out.push_str(&format!("- Moved {direction} to ({x}, {y})\n"));
                }
                JournalEntry::Encounter {
                    kind,
                    choice,
                    outcome,
                    ..
                } => {
                    let choice = choice.as_deref().unwrap_or("declined");
                    out.push_str(&format!("**{kind}** ({choice}): {outcome}\n\n"));
                }
                JournalEntry::Check {
                    skill,
                    roll,
                    bonus,
                    success,
                    ..
                } => {
                    let result = if *success { "Success" } else { "Failure" };
                    out.push_str(&format!(
                        "**Check** ({skill}): {roll} + {bonus} = {} **{result}**\n\n",
                        roll + bonus
                    ));
                }
                JournalEntry::Trade { item, gold, .. } => {
                    out.push_str(&format!("**Trade**: {item} ({gold:+} gold)\n\n"));
                }
                JournalEntry::LevelUp {
                    level,
                    skill_points,
                    ..
                } => {
                    out.push_str(&format!(
                        "**Level Up**: reached level {level} ({skill_points} skill points)\n\n"
                    ));
                }
                JournalEntry::Death { name, .. } => {
                    out.push_str(&format!("**{name} has died.**\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Wayfarer Journal\n================\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::MissionStart {
                    mission_type,
                    width,
                    height,
                    ..
                } => {
                    out.push_str(&format!("--- {mission_type} Mission ({width}x{height}) ---\n\n"));
                }
                JournalEntry::MissionEnd {
                    mission_type,
                    outcome,
                    moves,
                    ..
                } => {
                    out.push_str(&format!(
                        "{mission_type} mission {outcome} after {moves} moves\n\n"
                    ));
                }
                JournalEntry::Story { text, .. } => {
                    out.push_str(&format!("{text}\n\n"));
                }
                JournalEntry::Move { direction, x, y, .. } => {
                    out.push_str(&format!("Moved {direction} to ({x}, {y})\n"));
                }
                JournalEntry::Encounter {
                    kind,
                    choice,
                    outcome,
                    ..
                } => {
                    let choice = choice.as_deref().unwrap_or("declined");
                    out.push_str(&format!("{kind} ({choice}): {outcome}\n\n"));
                }
                JournalEntry::Check {
                    skill,
                    roll,
                    bonus,
                    success,
                    ..
                } => {
                    let result = if *success { "Success" } else { "Failure" };
                    out.push_str(&format!(
                        "Check ({skill}): {roll} + {bonus} = {} {result}\n\n",
                        roll + bonus
                    ));
                }
                JournalEntry::Trade { item, gold, .. } => {
                    out.push_str(&format!("Trade: {item} ({gold:+} gold)\n\n"));
                }
                JournalEntry::LevelUp {
                    level,
                    skill_points,
                    ..
                } => {
                    out.push_str(&format!(
                        "Level Up: reached level {level} ({skill_points} skill points)\n\n"
                    ));
                }
                JournalEntry::Death { name, .. } => {
                    out.push_str(&format!("{name} has died.\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("Note: {text}\n\n"));
                }
            }
        }
        out
    }
}
