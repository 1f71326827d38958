//! The mission state machine.
//!
//! A [`Mission`] owns its grid and the player's position on it. Each
//! [`Mission::advance`] moves one cell, resolves whatever is there, and
//! reports the outcome as a [`MoveResult`]. Reaching the objective completes
//! the mission; the player can abandon it at any time while it is active.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use wf_mechanics::{Character, DiceSource, EncounterKind, EncounterResolver, Resolution};

use crate::config::GameConfig;
use crate::error::{MissionError, MissionResult};
use crate::grid::{Cell, Direction, Grid, Position};

/// The flavor of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MissionType {
    /// Rescue a stranded team.
    #[default]
    Rescue,
    /// Explore an uncharted sector.
    Exploration,
    /// Infiltrate an enemy base.
    Stealth,
}

impl MissionType {
    /// All mission types.
    pub fn all() -> &'static [Self] {
        &[Self::Rescue, Self::Exploration, Self::Stealth]
    }

    /// Parse a mission type name, ignoring case.
    pub fn parse(s: &str) -> MissionResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "rescue" => Ok(Self::Rescue),
            "exploration" | "explore" => Ok(Self::Exploration),
            "stealth" => Ok(Self::Stealth),
            other => Err(MissionError::InvalidChoice(format!(
                "mission information is unclear for '{other}', choose rescue, exploration, or stealth"
            ))),
        }
    }
}

impl std::fmt::Display for MissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rescue => "Rescue",
            Self::Exploration => "Exploration",
            Self::Stealth => "Stealth",
        };
        f.write_str(name)
    }
}

/// Lifecycle of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionState {
    /// In progress.
    Active,
    /// The objective was reached.
    Completed,
    /// The player gave up, or died.
    Abandoned,
}

impl std::fmt::Display for MissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        };
        f.write_str(name)
    }
}

/// Answers encounter prompts on behalf of the player.
pub trait ChoiceProvider {
    /// Pick one of `options` for an encounter, or `None` to decline.
    fn choose(&mut self, kind: EncounterKind, prompt: &str, options: &[String]) -> Option<String>;
}

/// Always picks the first option offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOption;

impl ChoiceProvider for FirstOption {
    fn choose(&mut self, _kind: EncounterKind, _prompt: &str, options: &[String]) -> Option<String> {
        options.first().cloned()
    }
}

/// Always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decline;

impl ChoiceProvider for Decline {
    fn choose(&mut self, _kind: EncounterKind, _prompt: &str, _options: &[String]) -> Option<String> {
        None
    }
}

/// Always answers with the same label, offered or not.
#[derive(Debug, Clone)]
pub struct FixedChoice(pub String);

impl ChoiceProvider for FixedChoice {
    fn choose(&mut self, _kind: EncounterKind, _prompt: &str, _options: &[String]) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Replays queued answers, then declines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    answers: VecDeque<Option<String>>,
}

impl ScriptedChoices {
    /// Queue answers in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
        }
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose(&mut self, _kind: EncounterKind, _prompt: &str, _options: &[String]) -> Option<String> {
        self.answers.pop_front().flatten()
    }
}

/// The outcome of one move.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Narration, in order.
    pub messages: Vec<String>,
    /// The cell as it was when the player entered.
    pub cell: Cell,
    /// The player's new position.
    pub position: Position,
    /// Mission state after the move.
    pub state: MissionState,
    /// The encounter resolution, if an encounter ran.
    pub resolution: Option<Resolution>,
    /// The character died.
    pub game_over: bool,
}

impl MoveResult {
    /// All messages, one per line.
    pub fn summary(&self) -> String {
        self.messages.join("\n")
    }

    /// Whether this move completed the mission.
    pub fn completed(&self) -> bool {
        self.state == MissionState::Completed
    }
}

/// One traversal of a grid from the start to the objective.
#[derive(Debug, Clone)]
pub struct Mission {
    mission_type: MissionType,
    grid: Grid,
    position: Position,
    state: MissionState,
    moves: u32,
    encounters_resolved: u32,
}

impl Mission {
    /// Generate a grid from the configuration and start a mission on it.
    pub fn start(
        mission_type: MissionType,
        config: &GameConfig,
        dice: &mut impl DiceSource,
    ) -> MissionResult<Self> {
        let grid = Grid::generate(
            config.width,
            config.height,
            mission_type,
            config.strategy,
            config.objective,
            dice,
        )?;
        Ok(Self::new(grid))
    }

    /// Start a mission on an existing grid.
    pub fn new(grid: Grid) -> Self {
        log::info!(
            "{} mission started on a {}x{} grid",
            grid.mission_type(),
            grid.width(),
            grid.height()
        );
        Self {
            mission_type: grid.mission_type(),
            grid,
            position: Position::ORIGIN,
            state: MissionState::Active,
            moves: 0,
            encounters_resolved: 0,
        }
    }

    /// The mission type.
    pub fn mission_type(&self) -> MissionType {
        self.mission_type
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player's position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Where the objective is.
    pub fn objective(&self) -> Position {
        self.grid.objective()
    }

    /// The current state.
    pub fn state(&self) -> MissionState {
        self.state
    }

    /// Whether the mission is still in progress.
    pub fn is_active(&self) -> bool {
        self.state == MissionState::Active
    }

    /// Number of moves made.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Number of encounters resolved and cleared.
    pub fn encounters_resolved(&self) -> u32 {
        self.encounters_resolved
    }

    /// Move one cell and resolve whatever is there.
    ///
    /// Moves that would leave the grid fail with [`MissionError::InvalidMove`]
    /// and change nothing. A death during the encounter ends the mission as
    /// abandoned and sets `game_over`.
    pub fn advance(
        &mut self,
        direction: Direction,
        character: &mut Character,
        resolver: &EncounterResolver<'_>,
        chooser: &mut impl ChoiceProvider,
        dice: &mut impl DiceSource,
    ) -> MissionResult<MoveResult> {
        if self.state != MissionState::Active {
            return Err(MissionError::NotActive(self.state));
        }
        let next = self
            .position
            .step(direction, self.grid.width(), self.grid.height())
            .ok_or(MissionError::InvalidMove(direction))?;
        let cell = self
            .grid
            .get(next)
            .ok_or(MissionError::InvalidMove(direction))?;

        self.position = next;
        self.moves += 1;
        log::debug!("moved {direction} to {next} ({cell})");

        let mut messages = Vec::new();
        let mut resolution = None;
        match cell {
            Cell::Room(kind) if cell.is_encounter() => {
                let prompt = resolver.prompt(kind).unwrap_or_default();
                let choice = chooser.choose(kind, prompt, resolver.options(kind));
                let r = resolver.resolve(kind, character, choice.as_deref(), dice);
                messages.extend(r.messages.iter().cloned());
                if r.handled {
                    self.grid.clear(next);
                    self.encounters_resolved += 1;
                }
                resolution = Some(r);
            }
            Cell::Objective => {}
            Cell::Room(_) => {
                self.grid.clear(next);
                messages.push(cell.describe().to_string());
            }
            _ => messages.push(cell.describe().to_string()),
        }

        let game_over = resolution.as_ref().is_some_and(|r| r.game_over);
        if game_over {
            log::warn!("{} mission lost after {} moves", self.mission_type, self.moves);
            self.state = MissionState::Abandoned;
        } else if next == self.grid.objective() {
            let outcome = messages.join(" ");
            let done = format!("Mission completed! You have reached the objective. {outcome}");
            messages = vec![done.trim_end().to_string()];
            log::info!("{} mission completed in {} moves", self.mission_type, self.moves);
            self.state = MissionState::Completed;
        }

        Ok(MoveResult {
            messages,
            cell,
            position: next,
            state: self.state,
            resolution,
            game_over,
        })
    }

    /// Give up on the mission.
    pub fn abandon(&mut self) -> MissionResult<()> {
        if self.state != MissionState::Active {
            return Err(MissionError::NotActive(self.state));
        }
        log::info!("{} mission abandoned after {} moves", self.mission_type, self.moves);
        self.state = MissionState::Abandoned;
        Ok(())
    }
}
