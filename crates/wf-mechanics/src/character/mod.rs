//! The player character: stats, inventory, currency, and progression.
//!
//! A [`Character`] is the single structured record every encounter, shop,
//! and rest action mutates. It serializes losslessly to JSON for save files.

pub mod meter;
pub mod skill;

pub use meter::Meter;
pub use skill::Skill;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dice::{DiceSource, Die};
use crate::error::{MechError, MechResult};

/// XP needed per level: reaching level `n + 1` takes `n * LEVEL_XP_STEP`.
pub const LEVEL_XP_STEP: u32 = 100;

/// Highest level a character can reach.
pub const MAX_LEVEL: u32 = 1000;

/// Maximum health and energy.
pub const MAX_VITALITY: u32 = 100;

/// Skill points awarded on each level-up.
pub const SKILL_POINTS_PER_LEVEL: u32 = 3;

/// The only consumable item.
pub const HEALTH_POTION: &str = "Health Potion";

/// Health restored by a [`HEALTH_POTION`].
pub const POTION_HEALING: u32 = 50;

/// Gold a new character starts with.
pub const STARTING_GOLD: u32 = 50;

/// Items a new character starts with.
pub const STARTING_ITEMS: &[&str] = &["Basic Sword", HEALTH_POTION];

/// Species offered at character creation.
pub const SPECIES: &[&str] = &["Human", "Elf", "Dwarf", "Orc"];

/// Record of a single level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// The level reached.
    pub level: u32,
    /// Unspent skill points after the level-up.
    pub skill_points: u32,
}

impl std::fmt::Display for LevelUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Leveled up to Level {}! Skill points available: {}",
            self.level, self.skill_points
        )
    }
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name (never empty).
    pub name: String,
    /// Species, e.g. "Human".
    pub species: String,
    /// Health. Zero means the character is dead.
    pub health: Meter,
    /// Energy, restored by resting.
    pub energy: Meter,
    /// Current level, starting at 1.
    pub level: u32,
    /// XP toward the next level.
    pub xp: u32,
    /// Unspent skill points.
    pub skill_points: u32,
    /// Skill values.
    pub skills: BTreeMap<Skill, u32>,
    /// Inventory in acquisition order. Duplicates are allowed.
    pub items: Vec<String>,
    /// Gold on hand.
    pub gold: u32,
}

impl Character {
    /// Create a character with the fixed starting stats.
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> MechResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(MechError::EmptyName);
        }

        let skills = Skill::all()
            .iter()
            .map(|&skill| {
                let value = if skill == Skill::Strength { 10 } else { 8 };
                (skill, value)
            })
            .collect();

        Ok(Self {
            name,
            species: species.into(),
            health: Meter::full(MAX_VITALITY),
            energy: Meter::full(MAX_VITALITY),
            level: 1,
            xp: 0,
            skill_points: 0,
            skills,
            items: STARTING_ITEMS.iter().map(|s| s.to_string()).collect(),
            gold: STARTING_GOLD,
        })
    }

    /// Create a character whose skills are each rolled uniformly in 5..=15.
    pub fn roll(
        name: impl Into<String>,
        species: impl Into<String>,
        dice: &mut impl DiceSource,
    ) -> MechResult<Self> {
        let mut character = Self::new(name, species)?;
        for &skill in Skill::all() {
            character.skills.insert(skill, 4 + dice.roll(Die::Sides(11)));
        }
        Ok(character)
    }

    /// The value of a skill (0 if somehow missing).
    pub fn skill(&self, skill: Skill) -> u32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// XP threshold for the current level.
    pub fn xp_to_next_level(&self) -> u32 {
        self.level.saturating_mul(LEVEL_XP_STEP)
    }

    /// Add XP, leveling up as many times as the total allows.
    ///
    /// At [`MAX_LEVEL`] XP stops one short of the next threshold.
    pub fn gain_xp(&mut self, amount: u32) -> Vec<LevelUp> {
        self.xp = self.xp.saturating_add(amount);
        let mut level_ups = Vec::new();
        while self.level < MAX_LEVEL && self.xp >= self.xp_to_next_level() {
            level_ups.push(self.level_up());
        }
        if self.level >= MAX_LEVEL {
            self.xp = self.xp.min(self.xp_to_next_level() - 1);
        }
        level_ups
    }

    /// Advance one level: roll over XP, grant skill points, restore health.
    pub fn level_up(&mut self) -> LevelUp {
        self.level = self.level.saturating_add(1);
        self.xp = self
            .xp
            .saturating_sub((self.level - 1).saturating_mul(LEVEL_XP_STEP));
        self.skill_points = self.skill_points.saturating_add(SKILL_POINTS_PER_LEVEL);
        self.health.fill();
        log::info!("{} reached level {}", self.name, self.level);
        LevelUp {
            level: self.level,
            skill_points: self.skill_points,
        }
    }

    /// Spend a skill point on the named skill. Returns the new skill value.
    pub fn increase_skill(&mut self, name: &str) -> MechResult<u32> {
        if self.skill_points == 0 {
            return Err(MechError::NoSkillPoints);
        }
        let skill = Skill::parse(name).ok_or_else(|| MechError::UnknownSkill(name.to_string()))?;
        let value = self.skills.entry(skill).or_insert(0);
        *value += 1;
        self.skill_points -= 1;
        Ok(*value)
    }

    /// Use an item from the inventory. Returns health after use.
    ///
    /// Only [`HEALTH_POTION`] is usable; it is consumed.
    pub fn use_item(&mut self, name: &str) -> MechResult<u32> {
        if !self.has_item(name) {
            return Err(MechError::ItemNotFound(name.to_string()));
        }
        if name != HEALTH_POTION {
            return Err(MechError::ItemNotUsable(name.to_string()));
        }
        self.remove_item(name)?;
        Ok(self.health.restore(POTION_HEALING))
    }

    /// Returns true if the inventory holds at least one of the item.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    /// Number of copies of an item in the inventory.
    pub fn item_count(&self, name: &str) -> usize {
        self.items.iter().filter(|i| *i == name).count()
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    /// Remove the first copy of an item.
    pub fn remove_item(&mut self, name: &str) -> MechResult<()> {
        let pos = self
            .items
            .iter()
            .position(|i| i == name)
            .ok_or_else(|| MechError::ItemNotFound(name.to_string()))?;
        self.items.remove(pos);
        Ok(())
    }

    /// Buy an item. Returns the gold left.
    pub fn buy_item(&mut self, name: &str, cost: u32) -> MechResult<u32> {
        if self.gold < cost {
            return Err(MechError::InsufficientGold {
                item: name.to_string(),
                cost,
                shortfall: cost - self.gold,
            });
        }
        self.gold -= cost;
        self.add_item(name);
        Ok(self.gold)
    }

    /// Sell an item. Returns the gold after the sale.
    pub fn sell_item(&mut self, name: &str, price: u32) -> MechResult<u32> {
        self.remove_item(name)?;
        self.gold = self.gold.saturating_add(price);
        Ok(self.gold)
    }

    /// Rest, restoring energy to full.
    pub fn rest(&mut self) {
        self.energy.fill();
    }

    /// Take damage. Returns health left.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.health.drain(amount)
    }

    /// Returns true once health has run out.
    pub fn is_dead(&self) -> bool {
        self.health.is_empty()
    }

    /// Serialize the character to a JSON record.
    pub fn to_json(&self) -> MechResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a character from a JSON record, rejecting records whose
    /// stats are out of range.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let character: Self = serde_json::from_str(json)?;
        character.validate()?;
        Ok(character)
    }

    fn validate(&self) -> MechResult<()> {
        let invalid = |msg: String| -> MechResult<()> { Err(MechError::InvalidRecord(msg)) };
        if self.name.trim().is_empty() {
            return invalid("name is empty".to_string());
        }
        for (label, meter) in [("health", self.health), ("energy", self.energy)] {
            if meter.max != MAX_VITALITY || meter.current > meter.max {
                return invalid(format!("{label} {meter} must be within 0/{MAX_VITALITY}"));
            }
        }
        if !(1..=MAX_LEVEL).contains(&self.level) {
            return invalid(format!("level {} must be 1 to {MAX_LEVEL}", self.level));
        }
        if self.xp >= self.xp_to_next_level() {
            return invalid(format!(
                "xp {} must be below {}",
                self.xp,
                self.xp_to_next_level()
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Species: {}", self.species)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "XP: {}/{}", self.xp, self.xp_to_next_level())?;
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Energy: {}", self.energy)?;
        writeln!(f, "Skill Points: {}", self.skill_points)?;
        let skills: Vec<String> = self
            .skills
            .iter()
            .map(|(skill, value)| format!("{skill} {value}"))
            .collect();
        writeln!(f, "Skills: {}", skills.join(", "))?;
        writeln!(f, "Items: {}", self.items.join(", "))?;
        write!(f, "Gold: {}", self.gold)
    }
}
