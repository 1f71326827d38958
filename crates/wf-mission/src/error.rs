//! Error types for missions and play sessions.

use thiserror::Error;
use wf_mechanics::MechError;

use crate::grid::Direction;
use crate::mission::MissionState;

/// Result type for mission operations.
pub type MissionResult<T> = Result<T, MissionError>;

/// Errors that can occur while running a mission or a session.
#[derive(Debug, Error)]
pub enum MissionError {
    /// The move would leave the grid.
    #[error("you can't move {0} from here")]
    InvalidMove(Direction),

    /// The mission already ended.
    #[error("the mission is {0}")]
    NotActive(MissionState),

    /// The grid is too small to hold a start and an objective, or too large.
    #[error(
        "invalid grid dimensions {width}x{height}: need at least 2 cells and at most {max} per side",
        max = crate::grid::MAX_DIMENSION
    )]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A command needs a character and there is none.
    #[error("no active character, use 'create <name>' first")]
    NoCharacter,

    /// A command needs a mission and there is none.
    #[error("no active mission, use 'start' first")]
    NoMission,

    /// A command needs the current mission to be over.
    #[error("a mission is already in progress")]
    MissionInProgress,

    /// Invalid argument or usage.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A configuration file could not be read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mechanics engine error.
    #[error("{0}")]
    Mechanics(#[from] MechError),
}
