pub mod map;
pub mod new;
pub mod play;
pub mod sheet;

use std::fs;
use std::path::Path;

use wf_mechanics::Character;
use wf_mission::{GridStrategy, ObjectivePlacement};

/// Read a character from a JSON save file.
fn load_character(path: &Path) -> Result<Character, String> {
    let json =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Character::from_json(&json).map_err(|e| format!("cannot load {}: {e}", path.display()))
}

/// Write a character to a JSON save file.
fn save_character(character: &Character, path: &Path) -> Result<(), String> {
    let json = character.to_json().map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}

fn parse_strategy(name: &str) -> Result<GridStrategy, String> {
    GridStrategy::parse(name)
        .ok_or_else(|| format!("unknown strategy '{name}', use: uniform, sparse"))
}

fn placement(random_objective: bool) -> ObjectivePlacement {
    if random_objective {
        ObjectivePlacement::Random
    } else {
        ObjectivePlacement::FarCorner
    }
}
