//! Card is a pair <front, back> with a stable id. Only text is used on either side.
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque card identity. The only thing ever compared to decide whether two
/// cards (or two facets of a card) are "the same".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(text: &str) -> Option<Self> {
        Uuid::parse_str(text).ok().map(Self)
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub mistake_count: u32,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self::with_id(CardId::new(), front, back)
    }

    pub fn with_id(id: CardId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
            mistake_count: 0,
        }
    }

    /// First letter of the front text, lowercased. Used to pick look-alike distractors.
    pub fn initial(&self) -> Option<char> {
        self.front
            .trim_start()
            .chars()
            .next()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
    }
}
