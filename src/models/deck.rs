//! Deck is an ordered set of cards. It doubles as the card store the engines read from.
use super::{Card, CardId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            name: "My Deck".to_string(),
            cards: Vec::new(),
        }
    }
}

impl Deck {
    /// Builds a deck from raw `(front, back)` pairs, assigning fresh ids.
    ///
    /// Both sides are trimmed; pairs with an empty side are skipped.
    pub fn from_pairs<I, F, B>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, B)>,
        F: AsRef<str>,
        B: AsRef<str>,
    {
        let cards = pairs
            .into_iter()
            .filter_map(|(front, back)| {
                let front = front.as_ref().trim();
                let back = back.as_ref().trim();
                if front.is_empty() || back.is_empty() {
                    None
                } else {
                    Some(Card::new(front, back))
                }
            })
            .collect();

        Self {
            name: name.into(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Number of groups of `group_size` cards, the last one possibly short.
    pub fn group_count(&self, group_size: usize) -> usize {
        if group_size == 0 {
            return 0;
        }
        self.cards.len().div_ceil(group_size)
    }

    /// Cards of group `index`, in deck order. Empty when out of range.
    pub fn cards_in_group(&self, index: usize, group_size: usize) -> &[Card] {
        let start = index.saturating_mul(group_size);
        if group_size == 0 || start >= self.cards.len() {
            return &[];
        }
        let end = (start + group_size).min(self.cards.len());
        &self.cards[start..end]
    }

    /// 1-based inclusive card range of a group, e.g. `(6, 10)`.
    pub fn group_range(&self, index: usize, group_size: usize) -> Option<(usize, usize)> {
        let cards = self.cards_in_group(index, group_size);
        if cards.is_empty() {
            return None;
        }
        let first = index * group_size + 1;
        Some((first, first + cards.len() - 1))
    }

    /// Increments the mistake counter of a card. Returns the new count.
    pub fn record_mistake(&mut self, id: CardId) -> Option<u32> {
        let card = self.cards.iter_mut().find(|card| card.id == id)?;
        card.mistake_count += 1;
        Some(card.mistake_count)
    }

    pub fn mistake_counts(&self) -> BTreeMap<CardId, u32> {
        self.cards
            .iter()
            .filter(|card| card.mistake_count > 0)
            .map(|card| (card.id, card.mistake_count))
            .collect()
    }

    /// Overwrites counters from a stored snapshot. Unknown ids are ignored.
    pub fn apply_mistake_counts(&mut self, counts: &BTreeMap<CardId, u32>) {
        for card in &mut self.cards {
            card.mistake_count = counts.get(&card.id).copied().unwrap_or(0);
        }
    }

    /// Case-insensitive substring search over both sides, in deck order.
    pub fn search(&self, query: &str) -> Vec<&Card> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.cards
            .iter()
            .filter(|card| {
                card.front.to_lowercase().contains(&query)
                    || card.back.to_lowercase().contains(&query)
            })
            .collect()
    }
}
