//! Story flavor text for missions.

use wf_mechanics::DiceSource;

use crate::mission::MissionType;

/// Opening lines, one chosen at random per session.
pub const INTROS: &[&str] = &[
    "In a distant galaxy, you find yourself aboard a starship hurtling through space.",
    "The stars stretch out before you as you prepare for the challenges ahead.",
    "An uneasy peace has settled over the galaxy, but dangers still lurk in the shadows.",
];

/// A random opening line.
pub fn intro(dice: &mut impl DiceSource) -> &'static str {
    INTROS[dice.pick(INTROS.len())]
}

impl MissionType {
    /// Shown when the mission starts.
    pub fn start_text(self) -> &'static str {
        match self {
            Self::Rescue => {
                "You receive a distress signal from a nearby planet. A team is stranded and needs your help."
            }
            Self::Exploration => {
                "You receive orders to explore an uncharted sector of space. Unknown secrets await you."
            }
            Self::Stealth => {
                "You are tasked with infiltrating an enemy base to retrieve critical data."
            }
        }
    }

    /// Shown after the first encounter is resolved.
    pub fn mid_text(self) -> &'static str {
        match self {
            Self::Rescue => {
                "As you land, you realize the area is swarming with enemies. You must navigate carefully."
            }
            Self::Exploration => {
                "As you explore, you discover ancient ruins and strange alien technology."
            }
            Self::Stealth => {
                "You move through the shadows, avoiding detection from patrols and surveillance systems."
            }
        }
    }

    /// Shown when the objective is reached.
    pub fn end_text(self) -> &'static str {
        match self {
            Self::Rescue => {
                "You successfully rescue the team and return to your ship, knowing you made a difference."
            }
            Self::Exploration => "After careful study, you uncover valuable artifacts and knowledge.",
            Self::Stealth => {
                "You retrieve the data and escape unnoticed, your mission a complete success."
            }
        }
    }
}
