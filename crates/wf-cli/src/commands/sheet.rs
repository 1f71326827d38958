use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wf_mechanics::Character;

pub fn run(save: &Path) -> Result<(), String> {
    let character = super::load_character(save)?;
    print_sheet(&character);
    Ok(())
}

/// Print a character as two tables: vitals and skills.
pub fn print_sheet(character: &Character) {
    println!(
        "  {} [{} level {}]",
        character.name.bold(),
        character.species,
        character.level
    );
    println!();

    let mut vitals = Table::new();
    vitals.set_content_arrangement(ContentArrangement::Dynamic);
    vitals.set_header(vec!["Stat", "Value"]);
    vitals.add_row(vec![
        "XP".to_string(),
        format!("{}/{}", character.xp, character.xp_to_next_level()),
    ]);
    vitals.add_row(vec!["Health".to_string(), character.health.to_string()]);
    vitals.add_row(vec!["Energy".to_string(), character.energy.to_string()]);
    vitals.add_row(vec![
        "Skill Points".to_string(),
        character.skill_points.to_string(),
    ]);
    vitals.add_row(vec!["Gold".to_string(), character.gold.to_string()]);
    let items = if character.items.is_empty() {
        "-".to_string()
    } else {
        character.items.join(", ")
    };
    vitals.add_row(vec!["Items".to_string(), items]);
    println!("{vitals}");
    println!();

    let mut skills = Table::new();
    skills.set_content_arrangement(ContentArrangement::Dynamic);
    skills.set_header(vec!["Skill", "Value"]);
    for (skill, value) in &character.skills {
        skills.add_row(vec![skill.to_string(), value.to_string()]);
    }
    println!("{skills}");
}
