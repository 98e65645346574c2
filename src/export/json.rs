//! JSON import/export for decks and progress snapshots.
//!
//! Deck files hold only `{front, back}` pairs; ids are assigned on import so a
//! file can be shared between installations.

use crate::error::StoreError;
use crate::models::{Deck, Progress};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct DeckFile {
    name: String,
    cards: Vec<CardEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CardEntry {
    front: String,
    back: String,
}

impl From<&Deck> for DeckFile {
    fn from(deck: &Deck) -> Self {
        Self {
            name: deck.name.clone(),
            cards: deck
                .all_cards()
                .iter()
                .map(|card| CardEntry {
                    front: card.front.clone(),
                    back: card.back.clone(),
                })
                .collect(),
        }
    }
}

/// Exports a deck to a pretty-printed JSON file.
pub fn export_json_to_path(deck: &Deck, path: &Path) -> Result<(), StoreError> {
    let json_string = serde_json::to_string_pretty(&DeckFile::from(deck))?;
    fs::write(path, json_string)?;
    info!(deck = %deck.name, path = %path.display(), "deck exported");
    Ok(())
}

/// Parses deck JSON. Blank cards are dropped; a deck left with no cards is an
/// error.
pub fn parse_deck(json: &str) -> Result<Deck, StoreError> {
    let file: DeckFile = serde_json::from_str(json)?;
    let deck = Deck::from_pairs(
        file.name.trim(),
        file.cards.into_iter().map(|entry| (entry.front, entry.back)),
    );
    if deck.is_empty() {
        return Err(StoreError::NoCards(deck.name));
    }
    Ok(deck)
}

/// Imports a deck from a JSON file.
pub fn import_json(path: &Path) -> Result<Deck, StoreError> {
    let deck = parse_deck(&fs::read_to_string(path)?)?;
    info!(deck = %deck.name, cards = deck.len(), path = %path.display(), "deck imported");
    Ok(deck)
}

pub fn export_progress_to_path(progress: &Progress, path: &Path) -> Result<(), StoreError> {
    fs::write(path, serde_json::to_string_pretty(progress)?)?;
    info!(path = %path.display(), "progress exported");
    Ok(())
}

pub fn import_progress(path: &Path) -> Result<Progress, StoreError> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardId;
    use std::collections::{BTreeMap, BTreeSet};
    use tempfile::tempdir;

    fn create_test_deck() -> Deck {
        Deck::from_pairs("Test Deck", [("hello", "salom"), ("goodbye", "xayr")])
    }

    #[test]
    fn test_export_json_to_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.json");

        export_json_to_path(&create_test_deck(), &path).unwrap();

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["name"], "Test Deck");
        assert_eq!(written["cards"][1]["front"], "goodbye");
        assert!(written["cards"][0].get("id").is_none());
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"{
  "name": "Import Test Deck",
  "cards": [
    { "front": "test front", "back": "test back" },
    { "front": "   ", "back": "dropped" }
  ]
}"#;
        let dir = tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, json_content).unwrap();

        let deck = import_json(&path).unwrap();
        assert_eq!(deck.name, "Import Test Deck");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards[0].front, "test front");
        assert_eq!(deck.cards[0].back, "test back");
        assert_eq!(deck.cards[0].mistake_count, 0);
    }

    #[test]
    fn test_export_then_import_keeps_text_and_order() {
        let original = create_test_deck();
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.json");

        export_json_to_path(&original, &path).unwrap();
        let imported = import_json(&path).unwrap();

        assert_eq!(original.name, imported.name);
        for (orig, imp) in original.all_cards().iter().zip(imported.all_cards()) {
            assert_eq!(orig.front, imp.front);
            assert_eq!(orig.back, imp.back);
            assert_ne!(orig.id, imp.id);
        }
    }

    #[test]
    fn test_import_deck_without_cards() {
        let result = parse_deck(r#"{ "name": "Hollow", "cards": [] }"#);
        assert!(matches!(result, Err(StoreError::NoCards(name)) if name == "Hollow"));
    }

    #[test]
    fn test_import_nonexistent_file() {
        let dir = tempdir().unwrap();
        let result = import_json(&dir.path().join("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let result = parse_deck("{ this is not valid json }");
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn test_progress_export_and_import() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let progress = Progress {
            completed_groups: BTreeSet::from([0, 2]),
            mistake_counts: BTreeMap::from([(CardId::new(), 2)]),
            last_played_at: None,
        };

        export_progress_to_path(&progress, &path).unwrap();
        assert_eq!(import_progress(&path).unwrap(), progress);
    }
}
