//! Missions and play sessions for Wayfarer.
//!
//! Provides grid generation, the mission state machine, story flavor, the
//! shop, a journal of everything that happens, and a text-command session
//! that ties them together around one character.

pub mod config;
pub mod error;
pub mod grid;
pub mod journal;
pub mod mission;
pub mod session;
pub mod shop;
pub mod story;

pub use config::GameConfig;
pub use error::{MissionError, MissionResult};
pub use grid::{Cell, Direction, Grid, GridStrategy, ObjectivePlacement, Position};
pub use mission::{
    ChoiceProvider, Decline, FirstOption, FixedChoice, Mission, MissionState, MissionType,
    MoveResult, ScriptedChoices,
};
pub use session::GameSession;
