//! Error types for the engine, the storage adapter and configuration loading.

use thiserror::Error;

/// Reasons the engine refuses to start a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The deck has no cards at all.
    #[error("the deck has no cards")]
    EmptyDeck,

    /// The previous group has not been completed yet.
    #[error("group {index} is locked until group {} is completed", .index.saturating_sub(1))]
    GroupLocked { index: usize },

    /// The group index lies past the end of the deck.
    #[error("group {index} does not exist (deck has {groups} groups)")]
    GroupOutOfRange { index: usize, groups: usize },

    /// A session that has not reached its terminal state is still running.
    #[error("another session is still in progress")]
    SessionAlreadyActive,

    /// Boss mode needs at least one card with recorded mistakes.
    #[error("no eligible cards: no card has any recorded mistakes")]
    NoEligibleCards,

    /// Arcade modes need a minimum deck size.
    #[error("arcade needs at least {required} cards, the deck has {available}")]
    NotEnoughCards { required: usize, available: usize },
}

/// Failures of the SQLite store and the JSON import/export.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("deck not found: {0}")]
    DeckNotFound(String),

    #[error("deck '{0}' already exists")]
    DeckExists(String),

    #[error("deck '{0}' contains no usable cards")]
    NoCards(String),

    #[error("deck '{deck}' has more than one card with front '{front}'")]
    DuplicateFront { deck: String, front: String },

    #[error("stored card id is not a valid id: {0}")]
    CorruptId(String),
}

/// Failures while reading the TOML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
