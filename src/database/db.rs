//! Database operations for the vocabulary trainer
//!
//! Handles SQLite initialization, deck and card CRUD, and the per-deck
//! progress snapshot (stored as a JSON blob).

use crate::error::StoreError;
use crate::models::{Card, CardId, Deck, DeckSet, Progress};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::{debug, info};

/// Opens (or creates) the database file and makes sure every table exists.
pub fn init_database(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    info!(path = %path.display(), "database ready");
    Ok(conn)
}

/// Fresh in-memory database with the full schema.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS decks (
            name TEXT PRIMARY KEY
        )",
        (),
    )?;

    // Cards keep their deck position so groups slice the same way every run
    conn.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            id TEXT PRIMARY KEY,
            deck_name TEXT NOT NULL,
            position INTEGER NOT NULL,
            front TEXT NOT NULL,
            back TEXT NOT NULL,
            FOREIGN KEY (deck_name) REFERENCES decks(name),
            UNIQUE(deck_name, front)
        )",
        (),
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS progress (
            deck_name TEXT PRIMARY KEY,
            blob TEXT NOT NULL,
            FOREIGN KEY (deck_name) REFERENCES decks(name)
        )",
        (),
    )?;

    Ok(())
}

fn deck_exists(name: &str, conn: &Connection) -> Result<bool, StoreError> {
    let found = conn
        .query_row("SELECT 1 FROM decks WHERE name = ?1", params![name], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Creates a new, empty deck
pub fn new_deck(name: &str, conn: &Connection) -> Result<(), StoreError> {
    let inserted = conn.execute("INSERT OR IGNORE INTO decks (name) VALUES (?1)", params![name])?;
    if inserted == 0 {
        return Err(StoreError::DeckExists(name.to_string()));
    }
    info!(deck = name, "deck created");
    Ok(())
}

/// Appends a card to the end of a deck.
///
/// Returns `false` when the deck already has a card with the same front; the
/// UNIQUE constraint makes the insert a no-op then.
pub fn add_card(deck_name: &str, card: &Card, conn: &Connection) -> Result<bool, StoreError> {
    if !deck_exists(deck_name, conn)? {
        return Err(StoreError::DeckNotFound(deck_name.to_string()));
    }

    let position: i64 = conn.query_row(
        "SELECT COALESCE(MAX(position) + 1, 0) FROM cards WHERE deck_name = ?1",
        params![deck_name],
        |row| row.get(0),
    )?;

    let inserted = conn.execute(
        "INSERT OR IGNORE INTO cards (id, deck_name, position, front, back)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![card.id.to_string(), deck_name, position, card.front, card.back],
    )?;
    debug!(deck = deck_name, front = %card.front, inserted = inserted > 0, "add card");
    Ok(inserted > 0)
}

/// Removes a card. Returns `false` if no card had that id.
pub fn delete_card(id: CardId, conn: &Connection) -> Result<bool, StoreError> {
    let deleted = conn.execute("DELETE FROM cards WHERE id = ?1", params![id.to_string()])?;
    Ok(deleted > 0)
}

/// Stores a whole deck (e.g. an import) in one transaction.
///
/// Fails without storing anything if two cards share a front, so the stored
/// deck always slices into the same groups as the one in memory.
pub fn save_deck(deck: &Deck, conn: &Connection) -> Result<(), StoreError> {
    if deck.is_empty() {
        return Err(StoreError::NoCards(deck.name.clone()));
    }

    let tx = conn.unchecked_transaction()?;
    new_deck(&deck.name, &tx)?;
    for card in deck.all_cards() {
        if !add_card(&deck.name, card, &tx)? {
            return Err(StoreError::DuplicateFront {
                deck: deck.name.clone(),
                front: card.front.clone(),
            });
        }
    }
    tx.commit()?;
    Ok(())
}

/// Retrieves the cards of a deck in deck order
pub fn get_cards_for_deck(deck_name: &str, conn: &Connection) -> Result<Vec<Card>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT id, front, back FROM cards WHERE deck_name = ?1 ORDER BY position")?;

    let rows = stmt
        .query_map(params![deck_name], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, front, back)| match CardId::parse(&id) {
            Some(id) => Ok(Card::with_id(id, front, back)),
            None => Err(StoreError::CorruptId(id)),
        })
        .collect()
}

/// Retrieves all deck names, alphabetically
pub fn get_all_decks(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare("SELECT name FROM decks ORDER BY name")?;
    let decks = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(decks)
}

pub fn load_deck(deck_name: &str, conn: &Connection) -> Result<Deck, StoreError> {
    if !deck_exists(deck_name, conn)? {
        return Err(StoreError::DeckNotFound(deck_name.to_string()));
    }
    Ok(Deck {
        name: deck_name.to_string(),
        cards: get_cards_for_deck(deck_name, conn)?,
    })
}

/// Loads all decks with their cards into memory
///
/// Mistake counters are not part of the card rows; they come back with
/// [`load_progress`].
pub fn load_all_decks(conn: &Connection) -> Result<DeckSet, StoreError> {
    let decks = get_all_decks(conn)?
        .iter()
        .map(|name| load_deck(name, conn))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DeckSet { decks })
}

/// Progress of a deck, or the empty default if it was never saved.
pub fn load_progress(deck_name: &str, conn: &Connection) -> Result<Progress, StoreError> {
    let blob: Option<String> = conn
        .query_row(
            "SELECT blob FROM progress WHERE deck_name = ?1",
            params![deck_name],
            |row| row.get(0),
        )
        .optional()?;

    match blob {
        Some(blob) => Ok(serde_json::from_str(&blob)?),
        None => Ok(Progress::default()),
    }
}

pub fn save_progress(
    deck_name: &str,
    progress: &Progress,
    conn: &Connection,
) -> Result<(), StoreError> {
    let blob = serde_json::to_string(progress)?;
    conn.execute(
        "INSERT INTO progress (deck_name, blob) VALUES (?1, ?2)
         ON CONFLICT(deck_name) DO UPDATE SET blob = excluded.blob",
        params![deck_name, blob],
    )?;
    debug!(deck = deck_name, groups = progress.completed_groups.len(), "progress saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::{BTreeMap, BTreeSet};

    fn seeded_conn() -> Connection {
        let conn = open_in_memory().unwrap();
        new_deck("Fruits", &conn).unwrap();
        for (front, back) in [("apple", "olma"), ("pear", "nok"), ("plum", "olxo'ri")] {
            add_card("Fruits", &Card::new(front, back), &conn).unwrap();
        }
        conn
    }

    #[test]
    fn test_new_deck_twice_fails() {
        let conn = seeded_conn();
        assert!(matches!(new_deck("Fruits", &conn), Err(StoreError::DeckExists(name)) if name == "Fruits"));
        assert_eq!(get_all_decks(&conn).unwrap(), vec!["Fruits".to_string()]);
    }

    #[test]
    fn test_cards_come_back_in_insertion_order_with_ids() {
        let conn = seeded_conn();
        let extra = Card::new("fig", "anjir");
        add_card("Fruits", &extra, &conn).unwrap();

        let cards = get_cards_for_deck("Fruits", &conn).unwrap();
        let fronts: Vec<_> = cards.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["apple", "pear", "plum", "fig"]);
        assert_eq!(cards[3].id, extra.id);
    }

    #[test]
    fn test_duplicate_front_is_ignored() {
        let conn = seeded_conn();
        assert!(!add_card("Fruits", &Card::new("apple", "boshqa"), &conn).unwrap());
        assert_eq!(get_cards_for_deck("Fruits", &conn).unwrap().len(), 3);
    }

    #[test]
    fn test_save_deck_with_shared_front_stores_nothing() {
        let conn = open_in_memory().unwrap();
        let deck = Deck::from_pairs(
            "Homonyms",
            [("bank", "bank (money)"), ("bank", "qirg'oq"), ("tree", "daraxt")],
        );
        assert_eq!(deck.len(), 3);

        let result = save_deck(&deck, &conn);
        assert!(matches!(
            result,
            Err(StoreError::DuplicateFront { deck, front }) if deck == "Homonyms" && front == "bank"
        ));
        assert!(matches!(load_deck("Homonyms", &conn), Err(StoreError::DeckNotFound(_))));
        assert!(get_all_decks(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_add_card_to_unknown_deck() {
        let conn = seeded_conn();
        let result = add_card("Nope", &Card::new("a", "b"), &conn);
        assert!(matches!(result, Err(StoreError::DeckNotFound(_))));
    }

    #[test]
    fn test_delete_card() {
        let conn = seeded_conn();
        let pear = get_cards_for_deck("Fruits", &conn).unwrap()[1].id;

        assert!(delete_card(pear, &conn).unwrap());
        assert!(!delete_card(pear, &conn).unwrap());
        let fronts: Vec<_> = get_cards_for_deck("Fruits", &conn)
            .unwrap()
            .into_iter()
            .map(|c| c.front)
            .collect();
        assert_eq!(fronts, vec!["apple", "plum"]);
    }

    #[test]
    fn test_save_and_load_deck() {
        let conn = open_in_memory().unwrap();
        let deck = Deck::from_pairs("Animals", [("cat", "mushuk"), ("dog", "it")]);
        save_deck(&deck, &conn).unwrap();

        let loaded = load_deck("Animals", &conn).unwrap();
        assert_eq!(loaded, deck);
        assert!(matches!(load_deck("Plants", &conn), Err(StoreError::DeckNotFound(_))));
    }

    #[test]
    fn test_save_empty_deck_is_rejected() {
        let conn = open_in_memory().unwrap();
        let result = save_deck(&Deck::from_pairs("Empty", Vec::<(String, String)>::new()), &conn);
        assert!(matches!(result, Err(StoreError::NoCards(_))));
        assert!(get_all_decks(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_load_all_decks() {
        let conn = seeded_conn();
        save_deck(&Deck::from_pairs("Animals", [("cat", "mushuk")]), &conn).unwrap();

        let set = load_all_decks(&conn).unwrap();
        assert_eq!(set.decks.len(), 2);
        assert_eq!(set.find("Fruits").unwrap().len(), 3);
        assert_eq!(set.find("Animals").unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_card_id() {
        let conn = seeded_conn();
        conn.execute("UPDATE cards SET id = 'not-a-uuid' WHERE front = 'pear'", ())
            .unwrap();
        assert!(matches!(
            get_cards_for_deck("Fruits", &conn),
            Err(StoreError::CorruptId(id)) if id == "not-a-uuid"
        ));
    }

    #[test]
    fn test_progress_defaults_then_round_trips() {
        let conn = seeded_conn();
        assert_eq!(load_progress("Fruits", &conn).unwrap(), Progress::default());

        let apple = get_cards_for_deck("Fruits", &conn).unwrap()[0].id;
        let progress = Progress {
            completed_groups: BTreeSet::from([0, 1]),
            mistake_counts: BTreeMap::from([(apple, 3)]),
            last_played_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()),
        };
        save_progress("Fruits", &progress, &conn).unwrap();
        assert_eq!(load_progress("Fruits", &conn).unwrap(), progress);

        let later = Progress {
            completed_groups: BTreeSet::from([0, 1, 2]),
            ..progress
        };
        save_progress("Fruits", &later, &conn).unwrap();
        assert_eq!(load_progress("Fruits", &conn).unwrap(), later);
    }

    #[test]
    fn test_init_database_on_disk_is_reopenable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexiquest.sqlite3");
        {
            let conn = init_database(&path).unwrap();
            save_deck(&Deck::from_pairs("Words", [("one", "bir")]), &conn).unwrap();
        }

        let conn = init_database(&path).unwrap();
        assert_eq!(get_all_decks(&conn).unwrap(), vec!["Words".to_string()]);
    }
}
