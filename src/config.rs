//! Application configuration loaded from `lexiquest.toml`.
//!
//! Every field has a default, so a partial file (or no file at all) is fine.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "lexiquest.toml";

/// Tunable constants of the session and arcade engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards per structured group.
    pub group_size: usize,
    /// Countdown per think-stage entry.
    pub think_seconds: u32,
    /// Whole-session countdown in time attack.
    pub time_attack_seconds: u32,
    /// Per-round countdown in word hunt.
    pub word_hunt_seconds: u32,
    /// Distractors shown next to the answer in 4-option rounds.
    pub quiz_distractors: usize,
    /// Distractors in word hunt rounds.
    pub word_hunt_distractors: usize,
    /// Cards drawn for the daily challenge.
    pub daily_sample_size: usize,
    /// Smallest deck any arcade mode accepts.
    pub arcade_min_cards: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            group_size: 5,
            think_seconds: 7,
            time_attack_seconds: 30,
            word_hunt_seconds: 5,
            quiz_distractors: 3,
            word_hunt_distractors: 8,
            daily_sample_size: 10,
            arcade_min_cards: 5,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite file holding decks and progress.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("lexiquest.sqlite3")
}

fn default_log_filter() -> String {
    "lexiquest=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_filter: default_log_filter(),
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads an explicit config file, or `lexiquest.toml` from the working
    /// directory when no path is given. A missing default file yields defaults;
    /// a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) if p.exists() => p.to_path_buf(),
            Some(p) => return Err(ConfigError::NotFound(p.display().to_string())),
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let text = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&text)
    }
}
