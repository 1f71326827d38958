use std::path::{Path, PathBuf};

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wf_mechanics::Character;

pub fn run(
    name: &str,
    species: &str,
    standard: bool,
    seed: u64,
    output: Option<&Path>,
) -> Result<(), String> {
    let target = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("{}.json", name.trim().to_lowercase())),
    };
    if target.exists() {
        return Err(format!("{} already exists", target.display()));
    }

    let character = if standard {
        Character::new(name, species)
    } else {
        let mut rng = StdRng::seed_from_u64(seed);
        Character::roll(name, species, &mut rng)
    }
    .map_err(|e| e.to_string())?;

    super::save_character(&character, &target)?;

    println!(
        "  {} {} the {} in {}",
        "Created".green().bold(),
        character.name,
        character.species,
        target.display()
    );
    println!();
    super::sheet::print_sheet(&character);

    Ok(())
}
