//! Encounter resolution.
//!
//! The resolver applies one chosen option to one encounter: it runs the
//! skill check, then applies XP, loot, or damage to the character. Every
//! call reports whether the encounter counts as handled, so the caller can
//! decide whether to clear the room.

use super::catalog::EncounterCatalog;
use super::{Action, EncounterKind};
use crate::character::{Character, LevelUp};
use crate::dice::{DiceSource, SkillCheck, skill_check};

/// The outcome of resolving an encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The encounter that was resolved.
    pub kind: EncounterKind,
    /// The option the player chose (`None` if they declined).
    pub choice: Option<String>,
    /// Whether the encounter is finished and its room can be cleared.
    pub handled: bool,
    /// Narration, in order.
    pub messages: Vec<String>,
    /// The skill check, if one was rolled.
    pub check: Option<SkillCheck>,
    /// Item gained, if any.
    pub reward: Option<String>,
    /// XP gained.
    pub xp_gained: u32,
    /// Health lost.
    pub damage: u32,
    /// Level-ups triggered by the XP gain.
    pub level_ups: Vec<LevelUp>,
    /// The character died.
    pub game_over: bool,
}

impl Resolution {
    fn new(kind: EncounterKind, choice: Option<&str>) -> Self {
        Self {
            kind,
            choice: choice.map(str::to_string),
            handled: true,
            messages: Vec::new(),
            check: None,
            reward: None,
            xp_gained: 0,
            damage: 0,
            level_ups: Vec::new(),
            game_over: false,
        }
    }

    fn unhandled(kind: EncounterKind, choice: Option<&str>, message: String) -> Self {
        let mut resolution = Self::new(kind, choice);
        resolution.handled = false;
        resolution.messages.push(message);
        resolution
    }

    /// All messages joined into one line.
    pub fn summary(&self) -> String {
        self.messages.join(" ")
    }
}

/// Resolves encounters against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct EncounterResolver<'a> {
    catalog: &'a EncounterCatalog,
}

impl<'a> EncounterResolver<'a> {
    /// Create a resolver over a catalog.
    pub fn new(catalog: &'a EncounterCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver reads.
    pub fn catalog(&self) -> &'a EncounterCatalog {
        self.catalog
    }

    /// The prompt for an encounter, if it needs a choice.
    pub fn prompt(&self, kind: EncounterKind) -> Option<&'a str> {
        match kind {
            EncounterKind::Empty => None,
            EncounterKind::Npc => Some(self.catalog.npcs().prompt.as_str()),
            _ => self.catalog.get(kind).ok().map(|d| d.prompt.as_str()),
        }
    }

    /// The options offered for an encounter. Empty rooms offer none.
    pub fn options(&self, kind: EncounterKind) -> &'a [String] {
        match kind {
            EncounterKind::Empty => &[],
            EncounterKind::Npc => &self.catalog.npcs().options,
            _ => self
                .catalog
                .get(kind)
                .map(|d| d.options.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Resolve an encounter with the chosen option.
    pub fn resolve(
        &self,
        kind: EncounterKind,
        character: &mut Character,
        choice: Option<&str>,
        dice: &mut impl DiceSource,
    ) -> Resolution {
        log::debug!("resolving {kind} with choice {choice:?}");

        if kind == EncounterKind::Empty {
            let mut r = Resolution::new(kind, choice);
            r.messages
                .push("The room is empty. Nothing of interest here.".to_string());
            return r;
        }

        let action = Action::classify(choice);
        if action == Action::Avoid {
            let mut r = Resolution::new(kind, choice);
            r.messages
                .push("You chose to avoid the situation.".to_string());
            return r;
        }

        if kind == EncounterKind::Npc {
            return self.talk(character, choice, dice);
        }

        let def = match self.catalog.get(kind) {
            Ok(def) => def,
            Err(e) => return Resolution::unhandled(kind, choice, e.to_string()),
        };
        let label = choice.unwrap_or_default();
        if !def.offers(label) {
            return Resolution::unhandled(
                kind,
                choice,
                format!("'{label}' is not an option here."),
            );
        }

        let mut r = Resolution::new(kind, choice);
        match action {
            Action::Contest => {
                let check = skill_check(character.skill(def.skill), def.difficulty, dice);
                r.check = Some(check);
                if check.success {
                    r.messages.push(def.success_message.clone());
                    if kind.grants_loot() {
                        if let Some(item) = def.rewards.draw(dice) {
                            character.add_item(item);
                            r.messages.push(format!("You acquired a {item}."));
                            r.reward = Some(item.to_string());
                        }
                    }
                    grant_xp(&mut r, character, def.xp_reward);
                } else {
                    r.messages.push(def.failure_message.clone());
                    take_damage(&mut r, character, def.failure_penalty);
                }
            }
            Action::Flee => {
                r.messages
                    .push("You fled from the encounter, avoiding any damage.".to_string());
            }
            Action::Negotiate => {
                let rules = self.catalog.negotiation();
                let check = skill_check(character.skill(rules.skill), def.difficulty, dice);
                r.check = Some(check);
                if check.success {
                    match rules.rewards.draw(dice) {
                        Some(item) => {
                            character.add_item(item);
                            r.messages
                                .push(format!("Negotiation succeeded! You gained a {item}."));
                            r.reward = Some(item.to_string());
                        }
                        None => r.messages.push("Negotiation succeeded!".to_string()),
                    }
                } else {
                    r.messages.push(format!(
                        "Negotiation failed, and you had to retreat. Lost {} health.",
                        rules.failure_penalty
                    ));
                    take_damage(&mut r, character, rules.failure_penalty);
                }
            }
            Action::Avoid | Action::Talk | Action::Other => {
                return Resolution::unhandled(
                    kind,
                    choice,
                    format!("Nothing comes of '{label}'."),
                );
            }
        }
        r
    }

    fn talk(
        &self,
        character: &mut Character,
        choice: Option<&str>,
        dice: &mut impl DiceSource,
    ) -> Resolution {
        let npcs = self.catalog.npcs();
        let mut r = Resolution::new(EncounterKind::Npc, choice);

        if npcs.characters.is_empty() {
            r.messages.push("The NPC remains silent.".to_string());
        } else {
            let npc = &npcs.characters[dice.pick(npcs.characters.len())];
            let line = npc
                .lines
                .get(dice.pick(npc.lines.len()))
                .map(String::as_str)
                .unwrap_or("...");
            r.messages.push(format!("{}: {line}", npc.name));
        }

        if !npcs.aid.is_empty() {
            let aid = &npcs.aid[dice.pick(npcs.aid.len())];
            r.messages.push(aid.text.clone());
            if let Some(item) = &aid.item {
                character.add_item(item.clone());
                r.reward = Some(item.clone());
            }
        }

        grant_xp(&mut r, character, npcs.xp_reward);
        r
    }
}

fn grant_xp(r: &mut Resolution, character: &mut Character, amount: u32) {
    if amount == 0 {
        return;
    }
    r.xp_gained += amount;
    r.messages.push(format!("You gained {amount} XP."));
    let level_ups = character.gain_xp(amount);
    r.messages.extend(level_ups.iter().map(ToString::to_string));
    r.level_ups.extend(level_ups);
}

fn take_damage(r: &mut Resolution, character: &mut Character, amount: u32) {
    let before = character.health.current;
    character.apply_damage(amount);
    r.damage += before - character.health.current;
    if character.is_dead() {
        log::warn!("{} has died", character.name);
        r.game_over = true;
        r.messages.push("You have died. Game over.".to_string());
    }
}
