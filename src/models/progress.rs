//! Progress snapshot handed to the store at checkpoints.
use super::CardId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub completed_groups: BTreeSet<usize>,
    #[serde(default)]
    pub mistake_counts: BTreeMap<CardId, u32>,
    /// Set by the shell when it stores a checkpoint; the engine never reads the clock.
    #[serde(default)]
    pub last_played_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_json_defaults_missing_fields() {
        let progress: Progress = serde_json::from_str("{}").unwrap();
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn test_progress_json_shape() {
        let id = CardId::new();
        let progress = Progress {
            completed_groups: BTreeSet::from([2, 0]),
            mistake_counts: BTreeMap::from([(id, 3)]),
            last_played_at: None,
        };

        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["completed_groups"], serde_json::json!([0, 2]));
        assert_eq!(json["mistake_counts"][id.to_string()], 3);
    }
}
