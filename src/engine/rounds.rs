//! Round generation: option sets, matching facets and masked prompts.
//!
//! Everything here is a pure function of its inputs and the random source it
//! is handed, so a seeded `StdRng` makes every round reproducible.

use crate::models::{Card, CardId};
use rand::Rng;
use rand::seq::SliceRandom;

/// Glyph that hides a character in masked prompts.
pub const MASK_GLYPH: char = '_';

pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// The target plus up to `distractors` other cards from `pool`, shuffled.
///
/// Distractors are sampled uniformly without replacement; the target is
/// excluded from the pool by id.
pub fn multiple_choice_options<R: Rng + ?Sized>(
    target: &Card,
    pool: &[Card],
    distractors: usize,
    rng: &mut R,
) -> Vec<Card> {
    let candidates: Vec<&Card> = pool.iter().filter(|card| card.id != target.id).collect();
    with_distractors(target, &candidates, distractors, rng)
}

/// Like [`multiple_choice_options`] but prefers distractors whose front starts
/// with the same letter as the target's. Falls back to the whole pool when the
/// look-alikes are fewer than `distractors`.
pub fn confusion_options<R: Rng + ?Sized>(
    target: &Card,
    pool: &[Card],
    distractors: usize,
    rng: &mut R,
) -> Vec<Card> {
    let initial = target.initial();
    let lookalikes: Vec<&Card> = pool
        .iter()
        .filter(|card| card.id != target.id && initial.is_some() && card.initial() == initial)
        .collect();

    if lookalikes.len() < distractors {
        return multiple_choice_options(target, pool, distractors, rng);
    }
    with_distractors(target, &lookalikes, distractors, rng)
}

fn with_distractors<R: Rng + ?Sized>(
    target: &Card,
    candidates: &[&Card],
    distractors: usize,
    rng: &mut R,
) -> Vec<Card> {
    let mut options: Vec<Card> = candidates
        .choose_multiple(rng, distractors)
        .map(|card| (*card).clone())
        .collect();
    options.push(target.clone());
    options.shuffle(rng);
    options
}

/// Which side of a card a facet shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

/// Identifies one facet on the matching board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FacetId {
    pub card: CardId,
    pub side: Side,
}

/// One tile of the matching board.
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    pub card: CardId,
    pub side: Side,
    pub text: String,
    pub matched: bool,
}

impl Facet {
    pub fn id(&self) -> FacetId {
        FacetId {
            card: self.card,
            side: self.side,
        }
    }

    /// Two facets match iff they belong to the same card and show different sides.
    pub fn pairs_with(&self, other: &Facet) -> bool {
        self.card == other.card && self.side != other.side
    }
}

/// Front and back facets for every card, shuffled together.
pub fn matching_deck<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Facet> {
    let mut facets: Vec<Facet> = cards
        .iter()
        .flat_map(|card| {
            [
                Facet {
                    card: card.id,
                    side: Side::Front,
                    text: card.front.clone(),
                    matched: false,
                },
                Facet {
                    card: card.id,
                    side: Side::Back,
                    text: card.back.clone(),
                    matched: false,
                },
            ]
        })
        .collect();
    facets.shuffle(rng);
    facets
}

/// Hides each character with probability 1/2, always hiding at least one.
pub fn masked_text<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text
        .chars()
        .map(|c| if rng.gen_bool(0.5) { MASK_GLYPH } else { c })
        .collect();

    let masked_any = chars
        .iter()
        .zip(text.chars())
        .any(|(shown, original)| *shown == MASK_GLYPH && original != MASK_GLYPH);
    if !masked_any {
        if let Some(first) = chars.first_mut() {
            *first = MASK_GLYPH;
        }
    }
    chars.into_iter().collect()
}

/// Typed-answer check: case-insensitive, ignores surrounding whitespace only.
pub fn answers_match(input: &str, target: &str) -> bool {
    let input = input.trim();
    !input.is_empty() && input.to_lowercase() == target.trim().to_lowercase()
}
