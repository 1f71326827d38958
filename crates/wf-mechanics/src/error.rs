//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
///
/// Every variant is recoverable: callers report the message and carry on
/// with the character unchanged.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A character was created without a name.
    #[error("character name cannot be empty")]
    EmptyName,

    /// A skill name does not match any known skill.
    #[error("skill '{0}' not found")]
    UnknownSkill(String),

    /// A skill increase was requested with no skill points left.
    #[error("no skill points available")]
    NoSkillPoints,

    /// The named item is not in the inventory.
    #[error("{0} is not in your inventory")]
    ItemNotFound(String),

    /// The named item exists but has no use effect.
    #[error("{0} can't be used right now")]
    ItemNotUsable(String),

    /// Not enough gold to complete a purchase.
    #[error("not enough gold to purchase {item}: you need {shortfall} more gold")]
    InsufficientGold {
        /// The item being purchased.
        item: String,
        /// The full price of the item.
        cost: u32,
        /// How much gold is missing.
        shortfall: u32,
    },

    /// An encounter kind has no entry in the catalog.
    #[error("no encounter data for '{0}'")]
    UnknownEncounterKind(String),

    /// The encounter catalog data is malformed.
    #[error("invalid encounter catalog: {0}")]
    InvalidCatalog(String),

    /// A loaded character record breaks a stat invariant.
    #[error("invalid character record: {0}")]
    InvalidRecord(String),

    /// A character record could not be serialized or deserialized.
    #[error("character record error: {0}")]
    Persistence(#[from] serde_json::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
