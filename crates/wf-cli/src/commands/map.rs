use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wf_mechanics::EncounterKind;
use wf_mission::{Cell, Grid, MissionType};

pub fn run(
    seed: u64,
    width: usize,
    height: usize,
    strategy: &str,
    random_objective: bool,
) -> Result<(), String> {
    let strategy = super::parse_strategy(strategy)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = Grid::generate(
        width,
        height,
        MissionType::default(),
        strategy,
        super::placement(random_objective),
        &mut rng,
    )
    .map_err(|e| e.to_string())?;

    println!("  {} {width}x{height} (seed {seed})", "Mission map".bold());
    println!();
    for line in grid.render(None, true).lines() {
        println!("  {line}");
    }
    println!();
    println!("  S start  O objective  X exit  . empty");
    println!("  E enemy  T trap  P puzzle  I item  $ treasure  N npc");

    let encounters = grid.count(Cell::is_encounter);
    let empty = grid.count(|c| c == Cell::Room(EncounterKind::Empty));
    println!();
    println!("  {encounters} encounters, {empty} empty rooms");

    Ok(())
}
