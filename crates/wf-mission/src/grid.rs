//! Mission grid generation.
//!
//! A grid is a rectangle of cells with the start fixed at the top-left
//! corner `(0, 0)` and the far corner `(width - 1, height - 1)` holding the
//! objective or, with random objective placement, the exit. Every other
//! cell is populated by a [`GridStrategy`].

use serde::{Deserialize, Serialize};
use wf_mechanics::{DiceSource, EncounterKind};

use crate::error::{MissionError, MissionResult};
use crate::mission::MissionType;

/// Largest width or height a generated grid may have.
pub const MAX_DIMENSION: usize = 64;

/// Kinds drawn by [`GridStrategy::Uniform`].
pub const UNIFORM_KINDS: [EncounterKind; 5] = [
    EncounterKind::Empty,
    EncounterKind::Enemy,
    EncounterKind::Trap,
    EncounterKind::Puzzle,
    EncounterKind::Item,
];

/// Kinds drawn by [`GridStrategy::Sparse`] when a room is populated.
pub const SPARSE_KINDS: [EncounterKind; 5] = [
    EncounterKind::Enemy,
    EncounterKind::Trap,
    EncounterKind::Treasure,
    EncounterKind::Puzzle,
    EncounterKind::Npc,
];

/// A grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Position {
    /// The start corner.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a position.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring position in a direction, if it is inside the bounds.
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let (x, y) = match direction {
            Direction::North => (Some(self.x), self.y.checked_sub(1)),
            Direction::South => (Some(self.x), Some(self.y + 1)),
            Direction::East => (Some(self.x + 1), Some(self.y)),
            Direction::West => (self.x.checked_sub(1), Some(self.y)),
        };
        match (x, y) {
            (Some(x), Some(y)) if x < width && y < height => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up a row.
    North,
    /// Down a row.
    South,
    /// Right a column.
    East,
    /// Left a column.
    West,
}

impl Direction {
    /// Parse a direction name or its first letter.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "up" => Some(Self::North),
            "s" | "south" | "down" => Some(Self::South),
            "e" | "east" | "right" => Some(Self::East),
            "w" | "west" | "left" => Some(Self::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// What a grid cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Where the player starts.
    Start,
    /// The mission goal.
    Objective,
    /// The exit, placed at the far corner when the objective is elsewhere.
    Exit,
    /// A room whose encounter has been resolved.
    Cleared,
    /// A room holding an encounter.
    Room(EncounterKind),
}

impl Cell {
    /// Whether entering this cell starts an encounter.
    pub fn is_encounter(self) -> bool {
        matches!(self, Self::Room(kind) if kind != EncounterKind::Empty)
    }

    /// Map symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Objective => 'O',
            Self::Exit => 'X',
            Self::Cleared => '*',
            Self::Room(kind) => match kind {
                EncounterKind::Empty => '.',
                EncounterKind::Enemy => 'E',
                EncounterKind::Trap => 'T',
                EncounterKind::Puzzle => 'P',
                EncounterKind::Item => 'I',
                EncounterKind::Treasure => '$',
                EncounterKind::Npc => 'N',
            },
        }
    }

    /// Narration for entering a cell with no encounter.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Start => "You are back where you started.",
            Self::Objective => "You have reached the objective.",
            Self::Exit => "You found the exit.",
            Self::Cleared => "You have already dealt with this room.",
            Self::Room(EncounterKind::Empty) => "The room is empty. Nothing of interest here.",
            Self::Room(_) => "Something stirs in this room.",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("Start"),
            Self::Objective => f.write_str("Objective"),
            Self::Exit => f.write_str("Exit"),
            Self::Cleared => f.write_str("Cleared"),
            Self::Room(kind) => write!(f, "{kind}"),
        }
    }
}

/// How non-fixed cells are populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridStrategy {
    /// Every cell drawn uniformly from [`UNIFORM_KINDS`].
    Uniform,
    /// Each cell holds an encounter from [`SPARSE_KINDS`] with probability
    /// `density`, else it is empty.
    Sparse {
        /// Chance that a room is populated.
        density: f64,
    },
}

impl Default for GridStrategy {
    fn default() -> Self {
        Self::Sparse { density: 0.2 }
    }
}

impl GridStrategy {
    /// Parse a strategy name. `sparse` uses the default density.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Some(Self::Uniform),
            "sparse" => Some(Self::default()),
            _ => None,
        }
    }

    /// Draw the contents of one room.
    pub fn populate(self, dice: &mut impl DiceSource) -> EncounterKind {
        match self {
            Self::Uniform => UNIFORM_KINDS[dice.pick(UNIFORM_KINDS.len())],
            Self::Sparse { density } => {
                if dice.chance(density) {
                    SPARSE_KINDS[dice.pick(SPARSE_KINDS.len())]
                } else {
                    EncounterKind::Empty
                }
            }
        }
    }
}

/// Where the objective is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectivePlacement {
    /// At the far corner.
    #[default]
    FarCorner,
    /// At a random non-start cell, with the exit at the far corner.
    Random,
}

/// A generated mission grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    objective: Position,
    mission_type: MissionType,
}

impl Grid {
    /// Generate a grid.
    ///
    /// The mission type is recorded on the grid but does not change how it
    /// is populated.
    pub fn generate(
        width: usize,
        height: usize,
        mission_type: MissionType,
        strategy: GridStrategy,
        placement: ObjectivePlacement,
        dice: &mut impl DiceSource,
    ) -> MissionResult<Self> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(MissionError::InvalidDimensions { width, height });
        }
        let cell_count = width
            .checked_mul(height)
            .filter(|&n| n >= 2)
            .ok_or(MissionError::InvalidDimensions { width, height })?;

        let mut cells: Vec<Cell> = (0..cell_count)
            .map(|_| Cell::Room(strategy.populate(dice)))
            .collect();
        cells[0] = Cell::Start;

        let corner = cell_count - 1;
        let objective_index = match placement {
            ObjectivePlacement::FarCorner => corner,
            ObjectivePlacement::Random => 1 + dice.pick(corner),
        };
        cells[corner] = Cell::Exit;
        cells[objective_index] = Cell::Objective;

        let objective = Position::new(objective_index % width, objective_index / width);
        log::debug!(
            "generated {width}x{height} {mission_type} grid ({strategy:?}), objective at {objective}"
        );

        Ok(Self {
            width,
            height,
            cells,
            objective,
            mission_type,
        })
    }

    /// Build a grid from explicit rows. Exactly one cell must be the objective.
    pub fn from_rows(mission_type: MissionType, rows: Vec<Vec<Cell>>) -> MissionResult<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 || width * height < 2 || rows.iter().any(|r| r.len() != width) {
            return Err(MissionError::InvalidDimensions { width, height });
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let mut objectives = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Objective)
            .map(|(i, _)| Position::new(i % width, i / width));
        let objective = match (objectives.next(), objectives.next()) {
            (Some(pos), None) => pos,
            _ => {
                return Err(MissionError::InvalidChoice(
                    "a grid needs exactly one objective".to_string(),
                ));
            }
        };

        Ok(Self {
            width,
            height,
            cells,
            objective,
            mission_type,
        })
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The mission type this grid was generated for.
    pub fn mission_type(&self) -> MissionType {
        self.mission_type
    }

    /// Where the objective is.
    pub fn objective(&self) -> Position {
        self.objective
    }

    /// Whether a position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The cell at a position.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            self.cells.get(pos.y * self.width + pos.x).copied()
        } else {
            None
        }
    }

    /// Mark a room as cleared. Fixed cells are left alone.
    pub fn clear(&mut self, pos: Position) {
        if !self.contains(pos) {
            return;
        }
        let cell = &mut self.cells[pos.y * self.width + pos.x];
        if let Cell::Room(_) = cell {
            *cell = Cell::Cleared;
        }
    }

    /// Iterate over all cells with their positions, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Position::new(i % width, i / width), *c))
    }

    /// Count the cells matching a predicate.
    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(**c)).count()
    }

    /// Render the grid as text, one row per line.
    ///
    /// The player is drawn as `@`. Unless `reveal` is set, rooms that still
    /// hold something are drawn as `?`.
    pub fn render(&self, player: Option<Position>, reveal: bool) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            let row: Vec<String> = (0..self.width)
                .map(|x| {
                    let pos = Position::new(x, y);
                    let cell = self.cells[y * self.width + x];
                    if player == Some(pos) {
                        '@'
                    } else if !reveal && matches!(cell, Cell::Room(_)) {
                        '?'
                    } else {
                        cell.symbol()
                    }
                })
                .map(String::from)
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out.trim_end().to_string()
    }
}
