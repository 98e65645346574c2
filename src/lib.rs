pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod speech;

pub use config::{AppConfig, EngineConfig};
pub use engine::{ArcadeMode, Effect, Engine, Status, Update};
pub use error::{ConfigError, EngineError, StoreError};
pub use models::{Card, CardId, Deck, DeckSet, Progress};
