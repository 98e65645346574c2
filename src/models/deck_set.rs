//! Container for all stored decks
use super::Deck;

#[derive(Clone, Default)]
pub struct DeckSet {
    pub decks: Vec<Deck>,
}

impl DeckSet {
    pub fn find(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}
