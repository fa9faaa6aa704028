//! The mutable 78-card deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::catalog::standard_cards;

/// Number of cards in a freshly built deck.
pub const FULL_DECK_SIZE: usize = 78;

/// An ordered, drawable stack of tarot cards.
///
/// Cards are drawn from the end of the sequence. A new or reset deck holds
/// the full population in canonical order, all upright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a full deck in canonical order.
    pub fn new() -> Self {
        Self {
            cards: standard_cards(),
        }
    }

    /// The remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards left to draw.
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Permute the remaining cards uniformly, then flip each one on an
    /// independent coin toss.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        for card in &mut self.cards {
            if rng.random_bool(0.5) {
                card.flip();
            }
        }
        tracing::debug!(remaining = self.cards.len(), "deck shuffled");
    }

    /// Remove and return the top (last) card, or `None` if empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `count` cards, stopping early when the deck runs out.
    ///
    /// The first card drawn is at index 0.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count.min(self.cards.len()));
        while drawn.len() < count {
            match self.draw_card() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Rebuild the full deck in canonical order, discarding orientation.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(standard_cards());
        tracing::debug!("deck reset");
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
