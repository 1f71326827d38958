//! Integration tests for the wf-cli binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wf() -> Command {
    Command::cargo_bin("wf").unwrap()
}

/// Create a character save in a temp directory with standard skills.
fn saved_character(dir: &TempDir) -> String {
    let path = dir.path().join("kael.json");
    wf().args(["new", "Kael", "--standard", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    path.to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_prints_grid_and_legend() {
    wf().args(["map", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5x5 (seed 7)")
                .and(predicate::str::contains("S "))
                .and(predicate::str::contains(" O"))
                .and(predicate::str::contains("empty rooms")),
        );
}

#[test]
fn map_uniform_strategy() {
    wf().args(["map", "--strategy", "uniform", "--width", "7", "--height", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7x7 (seed 42)"));
}

#[test]
fn map_rejects_unknown_strategy() {
    wf().args(["map", "--strategy", "dense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn map_rejects_tiny_grid() {
    wf().args(["map", "--width", "1", "--height", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid grid dimensions"));
}

#[test]
fn map_rejects_huge_grid() {
    wf().args(["map", "--width", "100000", "--height", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 64 per side"));
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_writes_save_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mira.json");
    wf().args(["new", "Mira", "--species", "Elf", "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Created")
                .and(predicate::str::contains("Mira the Elf"))
                .and(predicate::str::contains("Strength")),
        );

    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"name\": \"Mira\""));
    assert!(json.contains("\"gold\": 50"));
}

#[test]
fn new_defaults_to_name_json() {
    let dir = TempDir::new().unwrap();
    wf().args(["new", "Kael"])
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(dir.path().join("kael.json").exists());
}

#[test]
fn new_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = saved_character(&dir);
    wf().args(["new", "Kael", "-o", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_rejects_blank_name() {
    let dir = TempDir::new().unwrap();
    wf().args(["new", " "])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));
}

// ---------------------------------------------------------------------------
// sheet
// ---------------------------------------------------------------------------

#[test]
fn sheet_shows_saved_character() {
    let dir = TempDir::new().unwrap();
    let path = saved_character(&dir);
    wf().args(["sheet", &path])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Kael")
                .and(predicate::str::contains("100/100"))
                .and(predicate::str::contains("Basic Sword, Health Potion"))
                .and(predicate::str::contains("Intelligence")),
        );
}

#[test]
fn sheet_rejects_tampered_save() {
    let dir = TempDir::new().unwrap();
    let path = saved_character(&dir);
    let json = fs::read_to_string(&path).unwrap().replace("\"level\": 1", "\"level\": 50000000");
    fs::write(&path, json).unwrap();
    wf().args(["sheet", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character record"));
}

#[test]
fn sheet_missing_file() {
    wf().args(["sheet", "/nonexistent/kael.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn sheet_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    wf().args(["sheet", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_session_basics() {
    wf().args(["play", "--seed", "1"])
        .write_stdin("create Kael\nstart stealth\nmap\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome, Kael the Human!")
                .and(predicate::str::contains("Stealth Mission"))
                .and(predicate::str::contains("@ you"))
                .and(predicate::str::contains("Character: Kael"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_reaches_objective_on_tiny_grid() {
    wf().args(["play", "--width", "2", "--height", "1"])
        .write_stdin("create Kael\nstart\ne\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mission completed! You have reached the objective.",
        ));
}

#[test]
fn play_reports_errors_and_continues() {
    wf().args(["play"])
        .write_stdin("start\nfly\ncreate Kael\nw\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("no active character")
                .and(predicate::str::contains("unknown command: fly"))
                .and(predicate::str::contains("no active mission")),
        );
}

#[test]
fn play_loads_and_saves_character() {
    let dir = TempDir::new().unwrap();
    let path = saved_character(&dir);
    let copy = dir.path().join("copy.json");
    let script = format!("buy health potion\nsave {}\nquit\n", copy.display());

    wf().args(["play", "--load", &path])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded").and(predicate::str::contains("Saved to")));

    let json = fs::read_to_string(copy).unwrap();
    assert!(json.contains("\"gold\": 25"));
}

#[test]
fn play_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("game.json");
    fs::write(&config, r#"{"seed": 3, "width": 3, "height": 2}"#).unwrap();
    wf().args(["play", "--config", config.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grid: 3x2 | Seed: 3"));
}

#[test]
fn play_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("game.json");
    fs::write(&config, "[1, 2]").unwrap();
    wf().args(["play", "--config", config.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn play_answers_encounter_prompts_from_stdin() {
    // Uniform 3x1 grids put an encounter or an empty room in the middle.
    // Declining with an empty line always resolves it.
    wf().args(["play", "--width", "3", "--height", "1", "--strategy", "uniform"])
        .write_stdin("create Kael\nstart\ne\n\ne\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mission completed!"));
}

#[test]
fn play_only_saves_on_the_save_word() {
    let dir = TempDir::new().unwrap();
    wf().args(["play", "--seed", "1"])
        .current_dir(dir.path())
        .write_stdin("create Kael\nsaved\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: saved"));
    assert!(!dir.path().join("d").exists());
}
