//! Integration tests for mission flow.

use wf_mechanics::{Character, EncounterCatalog, EncounterKind, EncounterResolver, ScriptedDice};
use wf_mission::{
    Cell, Direction, FirstOption, GameConfig, GameSession, Grid, GridStrategy, Mission,
    MissionError, MissionState, MissionType, ObjectivePlacement, Position, ScriptedChoices,
};

fn hero() -> Character {
    Character::new("Kael", "Human").unwrap()
}

// ---------------------------------------------------------------------------
// Scripted traversal
// ---------------------------------------------------------------------------

/// ```text
/// S E T
/// $ N P
/// . . O
/// ```
fn gauntlet() -> Grid {
    use EncounterKind::*;
    Grid::from_rows(
        MissionType::Exploration,
        vec![
            vec![Cell::Start, Cell::Room(Enemy), Cell::Room(Trap)],
            vec![Cell::Room(Treasure), Cell::Room(Npc), Cell::Room(Puzzle)],
            vec![Cell::Room(Empty), Cell::Room(Empty), Cell::Objective],
        ],
    )
    .unwrap()
}

#[test]
fn scripted_run_through_every_encounter() {
    let resolver = EncounterResolver::new(EncounterCatalog::shared().unwrap());
    let mut mission = Mission::new(gauntlet());
    let mut c = hero();
    let mut chooser = ScriptedChoices::new(["Fight", "Disarm", "Analyze", "Talk"]);
    // Fight 5+10 vs 12, Disarm 2+8 vs 10, Analyze 3+8 vs 14 (fails).
    let mut dice = ScriptedDice::new().with_rolls([5, 2, 3]).with_picks([1, 0, 0]);

    let r = mission
        .advance(Direction::East, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    assert!(r.resolution.as_ref().unwrap().handled);
    assert_eq!(c.xp, 20);

    let r = mission
        .advance(Direction::East, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    assert_eq!(r.messages[0], "You deftly avoided the trap!");
    assert_eq!(c.xp, 35);

    let r = mission
        .advance(Direction::South, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    assert_eq!(
        r.messages[0],
        "The puzzle was too complex, and you failed to solve it."
    );
    assert_eq!(c.health.current, 95);

    let r = mission
        .advance(Direction::West, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    assert_eq!(
        r.messages[0],
        "QuestGiver: I need your help! Will you accept this mission?"
    );
    assert_eq!(c.xp, 45);

    // The chooser is out of answers, so the treasure is declined. Declining
    // still counts as handled.
    let r = mission
        .advance(Direction::West, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    assert_eq!(r.messages, vec!["You chose to avoid the situation."]);
    assert_eq!(mission.grid().get(Position::new(0, 1)), Some(Cell::Cleared));

    mission
        .advance(Direction::South, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    mission
        .advance(Direction::East, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    let r = mission
        .advance(Direction::East, &mut c, &resolver, &mut chooser, &mut dice)
        .unwrap();
    assert!(r.completed());
    assert_eq!(mission.moves(), 8);
    assert_eq!(mission.encounters_resolved(), 5);
    assert_eq!(dice.remaining_rolls(), 0);
}

#[test]
fn completed_mission_rejects_moves() {
    let resolver = EncounterResolver::new(EncounterCatalog::shared().unwrap());
    let grid = Grid::from_rows(MissionType::Rescue, vec![vec![Cell::Start, Cell::Objective]])
        .unwrap();
    let mut mission = Mission::new(grid);
    let mut c = hero();
    let mut dice = ScriptedDice::new();
    let r = mission
        .advance(Direction::East, &mut c, &resolver, &mut FirstOption, &mut dice)
        .unwrap();
    assert_eq!(r.state, MissionState::Completed);
    let err = mission
        .advance(Direction::West, &mut c, &resolver, &mut FirstOption, &mut dice)
        .unwrap_err();
    assert!(matches!(err, MissionError::NotActive(MissionState::Completed)));
    assert!(mission.abandon().is_err());
}

#[test]
fn random_objective_walks_past_the_exit() {
    let config = GameConfig::default()
        .with_size(2, 2)
        .with_strategy(GridStrategy::Uniform)
        .with_objective(ObjectivePlacement::Random);
    // Every room draws Empty, then the objective lands on index 1.
    let mut dice = ScriptedDice::new().with_picks([0, 0, 0, 0, 0]);
    let mut mission = Mission::start(MissionType::Stealth, &config, &mut dice).unwrap();
    assert_eq!(mission.objective(), Position::new(1, 0));
    assert_eq!(mission.grid().get(Position::new(1, 1)), Some(Cell::Exit));

    let resolver = EncounterResolver::new(EncounterCatalog::shared().unwrap());
    let mut c = hero();
    let r = mission
        .advance(Direction::South, &mut c, &resolver, &mut FirstOption, &mut dice)
        .unwrap();
    assert_eq!(r.cell, Cell::Room(EncounterKind::Empty));

    let r = mission
        .advance(Direction::East, &mut c, &resolver, &mut FirstOption, &mut dice)
        .unwrap();
    assert_eq!(r.cell, Cell::Exit);
    assert_eq!(r.summary(), "You found the exit.");
    assert!(r.resolution.is_none());
    assert_eq!(r.state, MissionState::Active);

    let r = mission
        .advance(Direction::North, &mut c, &resolver, &mut FirstOption, &mut dice)
        .unwrap();
    assert!(r.completed());
    assert_eq!(r.position, Position::new(1, 0));
    assert_eq!(mission.state(), MissionState::Completed);
    assert_eq!(mission.moves(), 3);
    assert_eq!(c, hero());
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[test]
fn seeded_sessions_replay_identically() {
    let play = || {
        let config = GameConfig::default().with_seed(99);
        let mut s = GameSession::new(config).unwrap();
        let mut out = Vec::new();
        for cmd in ["create Kael", "start", "e", "e", "s", "s", "map", "status"] {
            out.push(match s.process(cmd, &mut FirstOption) {
                Ok(text) => text,
                Err(e) => e.to_string(),
            });
        }
        out
    };
    assert_eq!(play(), play());
}

#[test]
fn save_round_trip_through_session() {
    let mut c = hero();
    c.gain_xp(350);
    let json = c.to_json().unwrap();
    let loaded = Character::from_json(&json).unwrap();
    let mut s = GameSession::new(GameConfig::default()).unwrap().with_character(loaded);
    let sheet = s.process("sheet", &mut FirstOption).unwrap();
    assert!(sheet.contains("Level: 3"));
    assert!(sheet.contains("Skill Points: 6"));
}
