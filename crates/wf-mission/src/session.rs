//! Interactive play session.
//!
//! `GameSession` owns the character, the current mission, the journal, and
//! the dice. It turns one line of player input into one response, so any
//! front end (REPL, tests, scripts) can drive a full game.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wf_mechanics::character::SPECIES;
use wf_mechanics::dice::determine_result;
use wf_mechanics::{Character, DiceSource, EncounterCatalog, EncounterResolver, Skill};

use crate::config::GameConfig;
use crate::error::{MissionError, MissionResult};
use crate::grid::Direction;
use crate::journal::entry::JournalEntry;
use crate::journal::log::Journal;
use crate::mission::{ChoiceProvider, Mission, MissionType, MoveResult};
use crate::{shop, story};

/// An interactive play session.
pub struct GameSession<D: DiceSource = StdRng> {
    config: GameConfig,
    catalog: &'static EncounterCatalog,
    character: Option<Character>,
    mission: Option<Mission>,
    journal: Journal,
    dice: D,
}

impl GameSession<StdRng> {
    /// Create a session with dice seeded from the configuration.
    pub fn new(config: GameConfig) -> MissionResult<Self> {
        let dice = StdRng::seed_from_u64(config.seed);
        Self::with_dice(config, dice)
    }
}

impl<D: DiceSource> GameSession<D> {
    /// Create a session with an explicit dice source.
    ///
    /// Fails only if the standard encounter catalog cannot be parsed.
    pub fn with_dice(config: GameConfig, dice: D) -> MissionResult<Self> {
        Ok(Self {
            config,
            catalog: EncounterCatalog::shared()?,
            character: None,
            mission: None,
            journal: Journal::new(),
            dice,
        })
    }

    /// Start with an existing character, e.g. one loaded from a save.
    pub fn with_character(mut self, character: Character) -> Self {
        self.character = Some(character);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the active character.
    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// Get the current mission, finished or not.
    pub fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Process a line of user input and return a response.
    ///
    /// Encounter prompts raised by a move are answered by `chooser`.
    pub fn process(
        &mut self,
        input: &str,
        chooser: &mut impl ChoiceProvider,
    ) -> MissionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        if let Some(direction) = Direction::parse(&cmd) {
            return self.do_move(direction, chooser);
        }

        match cmd.as_str() {
            "create" => self.do_create(rest, false),
            "roll" => self.do_create(rest, true),
            "sheet" | "character" => self.do_sheet(),
            "start" => self.do_start(rest),
            "move" | "go" => {
                let direction = Direction::parse(rest).ok_or_else(|| {
                    MissionError::InvalidChoice("usage: move north|south|east|west".to_string())
                })?;
                self.do_move(direction, chooser)
            }
            "map" => self.do_map(),
            "abandon" => self.do_abandon(),
            "use" => self.do_use(rest),
            "buy" => self.do_buy(rest),
            "sell" => self.do_sell(rest),
            "shop" => self.do_shop(),
            "rest" => self.do_rest(),
            "train" => self.do_train(rest),
            "check" => self.do_check(rest),
            "note" => self.do_note(rest),
            "journal" => self.do_journal_show(),
            "export" => self.do_journal_export(rest),
            "status" => self.do_status(),
            "help" => self.do_help(rest),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(MissionError::UnknownCommand(cmd)),
        }
    }

    fn character_mut(&mut self) -> MissionResult<&mut Character> {
        self.character.as_mut().ok_or(MissionError::NoCharacter)
    }

    fn mission_in_progress(&self) -> bool {
        self.mission.as_ref().is_some_and(Mission::is_active)
    }

    fn do_create(&mut self, rest: &str, rolled: bool) -> MissionResult<String> {
        if self.mission_in_progress() {
            return Err(MissionError::MissionInProgress);
        }
        let mut words = rest.split_whitespace();
        let name = words.next().ok_or_else(|| {
            MissionError::InvalidChoice("usage: create <name> [species]".to_string())
        })?;
        let species = words.collect::<Vec<_>>().join(" ");
        let species = match SPECIES.iter().find(|s| s.eq_ignore_ascii_case(&species)) {
            Some(known) => known.to_string(),
            None if species.is_empty() => SPECIES[0].to_string(),
            None => species,
        };

        let character = if rolled {
            Character::roll(name, species, &mut self.dice)?
        } else {
            Character::new(name, species)?
        };
        let intro = story::intro(&mut self.dice);
        let output = format!(
            "{intro}\nWelcome, {} the {}!\n\n{character}",
            character.name, character.species
        );

        self.journal.append(JournalEntry::Story {
            text: format!("{} the {} sets out. {intro}", character.name, character.species),
            timestamp: Utc::now(),
        });
        self.character = Some(character);
        self.mission = None;
        Ok(output)
    }

    fn do_sheet(&self) -> MissionResult<String> {
        let character = self.character.as_ref().ok_or(MissionError::NoCharacter)?;
        Ok(character.to_string())
    }

    fn do_start(&mut self, rest: &str) -> MissionResult<String> {
        if self.character.is_none() {
            return Err(MissionError::NoCharacter);
        }
        if self.mission_in_progress() {
            return Err(MissionError::MissionInProgress);
        }
        let mission_type = if rest.is_empty() {
            MissionType::default()
        } else {
            MissionType::parse(rest)?
        };

        let mission = Mission::start(mission_type, &self.config, &mut self.dice)?;
        let grid = mission.grid();
        let output = format!(
            "--- {mission_type} Mission ---\n{}\n\n{}\nReach the objective (O) to complete the mission.",
            mission_type.start_text(),
            grid.render(Some(mission.position()), false),
        );

        self.journal.append(JournalEntry::MissionStart {
            mission_type: mission_type.to_string(),
            width: grid.width(),
            height: grid.height(),
            timestamp: Utc::now(),
        });
        self.journal.append(JournalEntry::Story {
            text: mission_type.start_text().to_string(),
            timestamp: Utc::now(),
        });
        self.mission = Some(mission);
        Ok(output)
    }

    fn do_move(
        &mut self,
        direction: Direction,
        chooser: &mut impl ChoiceProvider,
    ) -> MissionResult<String> {
        let character = self.character.as_mut().ok_or(MissionError::NoCharacter)?;
        let mission = self.mission.as_mut().ok_or(MissionError::NoMission)?;
        let resolver = EncounterResolver::new(self.catalog);
        let before = mission.encounters_resolved();

        let result = mission.advance(direction, character, &resolver, chooser, &mut self.dice)?;
        let mission_type = mission.mission_type();
        let moves = mission.moves();
        let first_clear = before == 0 && mission.encounters_resolved() == 1;
        let name = character.name.clone();

        self.record_move(direction, &result);
        let mut out = result.messages.clone();

        if result.game_over {
            self.journal.append(JournalEntry::Death {
                name,
                timestamp: Utc::now(),
            });
            self.record_end(mission_type, "lost", moves);
            self.character = None;
            self.mission = None;
            out.push("Create a new character to play again.".to_string());
            return Ok(out.join("\n"));
        }

        if first_clear && !result.completed() {
            out.push(mission_type.mid_text().to_string());
            self.journal.append(JournalEntry::Story {
                text: mission_type.mid_text().to_string(),
                timestamp: Utc::now(),
            });
        }
        if result.completed() {
            out.push(mission_type.end_text().to_string());
            self.journal.append(JournalEntry::Story {
                text: mission_type.end_text().to_string(),
                timestamp: Utc::now(),
            });
            self.record_end(mission_type, "completed", moves);
        }
        Ok(out.join("\n"))
    }

    fn record_move(&mut self, direction: Direction, result: &MoveResult) {
        self.journal.append(JournalEntry::Move {
            direction: direction.to_string(),
            x: result.position.x,
            y: result.position.y,
            timestamp: Utc::now(),
        });
        let Some(resolution) = &result.resolution else {
            return;
        };
        self.journal.append(JournalEntry::Encounter {
            kind: resolution.kind.to_string(),
            choice: resolution.choice.clone(),
            outcome: resolution.summary(),
            timestamp: Utc::now(),
        });
        for level_up in &resolution.level_ups {
            self.journal.append(JournalEntry::LevelUp {
                level: level_up.level,
                skill_points: level_up.skill_points,
                timestamp: Utc::now(),
            });
        }
    }

    fn record_end(&mut self, mission_type: MissionType, outcome: &str, moves: u32) {
        self.journal.append(JournalEntry::MissionEnd {
            mission_type: mission_type.to_string(),
            outcome: outcome.to_string(),
            moves,
            timestamp: Utc::now(),
        });
    }

    fn do_map(&self) -> MissionResult<String> {
        let mission = self.mission.as_ref().ok_or(MissionError::NoMission)?;
        Ok(format!(
            "{}\n\n@ you  S start  O objective  X exit  * cleared  ? unexplored",
            mission.grid().render(Some(mission.position()), false)
        ))
    }

    fn do_abandon(&mut self) -> MissionResult<String> {
        let mission = self.mission.as_mut().ok_or(MissionError::NoMission)?;
        mission.abandon()?;
        let (mission_type, moves) = (mission.mission_type(), mission.moves());
        self.record_end(mission_type, "abandoned", moves);
        Ok(format!("You abandon the {mission_type} mission."))
    }

    fn do_use(&mut self, item: &str) -> MissionResult<String> {
        if item.is_empty() {
            return Err(MissionError::InvalidChoice("usage: use <item>".to_string()));
        }
        let character = self.character_mut()?;
        let item = held_name(character, item);
        let health = character.use_item(&item)?;
        Ok(format!("You used a {item}. Health: {health}/{}", character.health.max))
    }

    fn do_buy(&mut self, item: &str) -> MissionResult<String> {
        if item.is_empty() {
            return Err(MissionError::InvalidChoice("usage: buy <item>".to_string()));
        }
        let character = self.character_mut()?;
        let listing = shop::buy(character, item)?;
        let output = format!(
            "You bought a {} for {} gold. Gold left: {}",
            listing.item, listing.price, character.gold
        );
        self.journal.append(JournalEntry::Trade {
            item: listing.item.to_string(),
            gold: -i64::from(listing.price),
            timestamp: Utc::now(),
        });
        Ok(output)
    }

    fn do_sell(&mut self, item: &str) -> MissionResult<String> {
        if item.is_empty() {
            return Err(MissionError::InvalidChoice("usage: sell <item>".to_string()));
        }
        let character = self.character_mut()?;
        let item = held_name(character, item);
        let price = shop::sell(character, &item)?;
        let output = format!(
            "You sold a {item} for {price} gold. Gold: {}",
            character.gold
        );
        self.journal.append(JournalEntry::Trade {
            item,
            gold: i64::from(price),
            timestamp: Utc::now(),
        });
        Ok(output)
    }

    fn do_shop(&self) -> MissionResult<String> {
        let mut out = shop::catalog();
        if let Some(character) = &self.character {
            out.push_str(&format!("\nYour gold: {}", character.gold));
        }
        Ok(out)
    }

    fn do_rest(&mut self) -> MissionResult<String> {
        let character = self.character_mut()?;
        character.rest();
        Ok(format!(
            "You rest and recover your energy. Energy: {}",
            character.energy
        ))
    }

    fn do_train(&mut self, skill: &str) -> MissionResult<String> {
        if skill.is_empty() {
            return Err(MissionError::InvalidChoice("usage: train <skill>".to_string()));
        }
        let character = self.character_mut()?;
        let value = character.increase_skill(skill)?;
        let name = Skill::parse(skill).map_or(skill, |s| s.name());
        Ok(format!(
            "{name} increased to {value}. Skill points left: {}",
            character.skill_points
        ))
    }

    fn do_check(&mut self, skill: &str) -> MissionResult<String> {
        let skill = Skill::parse(skill).ok_or_else(|| {
            MissionError::InvalidChoice(format!(
                "usage: check <skill>, one of: {}",
                skill_names()
            ))
        })?;
        let value = self
            .character
            .as_ref()
            .ok_or(MissionError::NoCharacter)?
            .skill(skill);
        let check = determine_result(value, &mut self.dice);

        self.journal.append(JournalEntry::Check {
            skill: skill.to_string(),
            roll: check.roll,
            bonus: check.bonus,
            success: check.success,
            timestamp: Utc::now(),
        });
        Ok(format!("{skill} check: {check}"))
    }

    fn do_note(&mut self, text: &str) -> MissionResult<String> {
        if text.is_empty() {
            return Err(MissionError::InvalidChoice("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> MissionResult<String> {
        if self.journal.is_empty() {
            return Ok("Journal is empty.".to_string());
        }
        let recent = self.journal.tail(10);
        let mut out = format!(
            "Journal ({} entries, showing last {}):\n\n",
            self.journal.len(),
            recent.len()
        );
        out.push_str(&recent.export_text());
        Ok(out.trim_end().to_string())
    }

    fn do_journal_export(&self, format: &str) -> MissionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            other => Err(MissionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> MissionResult<String> {
        let mut out = String::new();
        match &self.character {
            Some(c) => out.push_str(&format!(
                "Character: {} (Level {}, Health {}, Gold {})\n",
                c.name, c.level, c.health, c.gold
            )),
            None => out.push_str("No active character.\n"),
        }
        match &self.mission {
            Some(m) => out.push_str(&format!(
                "Mission: {} ({}), position {}, {} moves\n",
                m.mission_type(),
                m.state(),
                m.position(),
                m.moves()
            )),
            None => out.push_str("No mission.\n"),
        }
        out.push_str(&format!("Journal: {} entries", self.journal.len()));
        Ok(out)
    }

    fn do_help(&self, topic: &str) -> MissionResult<String> {
        match topic.to_lowercase().as_str() {
            "mission" | "move" => Ok("\
Mission Commands:
  start [rescue|exploration|stealth]  Start a mission
  n, s, e, w                          Move one room
  move <direction>                    Move one room
  map                                 Show the mission map
  abandon                             Give up the mission"
                .to_string()),
            "character" | "shop" => Ok("\
Character Commands:
  sheet                         Show your character
  use <item>                    Use an item (Health Potion)
  shop                          List items for sale
  buy <item>                    Buy an item
  sell <item>                   Sell an item
  rest                          Restore energy
  train <skill>                 Spend a skill point
  check <skill>                 Roll an ambient skill check"
                .to_string()),
            "journal" | "note" => Ok("\
Journal Commands:
  note <text>                   Add a journal note
  journal                       Show recent entries
  export [markdown|text]        Export full journal"
                .to_string()),
            _ => Ok("\
Wayfarer Commands:
  create <name> [species]       Create a character
  roll <name> [species]         Create a character with rolled skills
  sheet                         Show your character
  start [type]                  Start a mission
  n, s, e, w                    Move
  map                           Show the map
  abandon                       Abandon the mission
  use, buy, sell, shop          Manage items and gold
  rest                          Restore energy
  train <skill>                 Spend a skill point
  check <skill>                 Roll an ambient skill check
  note <text>                   Add journal note
  journal                       Show journal
  export [markdown|text]        Export journal
  status                        Show session status
  help [topic]                  Show help (mission, character, journal)
  quit                          Exit"
                .to_string()),
        }
    }
}

/// The inventory spelling of an item name, if held; otherwise the input.
fn held_name(character: &Character, name: &str) -> String {
    character
        .items
        .iter()
        .find(|i| i.eq_ignore_ascii_case(name.trim()))
        .cloned()
        .unwrap_or_else(|| name.trim().to_string())
}

fn skill_names() -> String {
    Skill::all()
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ")
}
