//! Reading session management.
//!
//! `ReadingSession` owns a deck, a random source, and the history of
//! readings performed with it. Sessions share nothing, so independent
//! sessions never affect each other.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::deck::Deck;
use crate::error::{TarotError, TarotResult};
use crate::persist;
use crate::reading::Reading;
use crate::spread::Spread;

/// A tarot reading session.
#[derive(Debug)]
pub struct ReadingSession {
    deck: Deck,
    history: Vec<Reading>,
    rng: StdRng,
}

impl ReadingSession {
    /// Create a session with a full deck and an empty history.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            deck: Deck::new(),
            history: Vec::new(),
            rng,
        }
    }

    /// Readings performed so far, oldest first.
    pub fn history(&self) -> &[Reading] {
        &self.history
    }

    /// The session's deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mutable access to the session's deck.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Restore the deck to a full, canonical 78 cards. History is kept.
    pub fn reset_deck(&mut self) {
        self.deck.reset();
    }

    /// Names of the available reading types.
    pub fn reading_types(&self) -> Vec<String> {
        Spread::ALL.iter().map(ToString::to_string).collect()
    }

    /// Draw one card of guidance.
    pub fn single_card_reading(&mut self) -> TarotResult<Reading> {
        self.reading(Spread::SingleCard)
    }

    /// Draw three cards for past, present, and future.
    pub fn three_card_reading(&mut self) -> TarotResult<Reading> {
        self.reading(Spread::ThreeCard)
    }

    /// Draw the ten-card Celtic Cross.
    pub fn celtic_cross_reading(&mut self) -> TarotResult<Reading> {
        self.reading(Spread::CelticCross)
    }

    /// Shuffle, draw the spread's cards, and record the reading.
    ///
    /// If the deck cannot supply enough cards the reading fails with
    /// [`TarotError::InsufficientCards`], nothing is recorded, and the cards
    /// drawn in the attempt stay out of the deck.
    pub fn reading(&mut self, spread: Spread) -> TarotResult<Reading> {
        self.deck.shuffle(&mut self.rng);
        let cards = self.deck.draw_cards(spread.card_count());

        if cards.len() < spread.card_count() {
            tracing::debug!(
                %spread,
                available = cards.len(),
                "not enough cards for reading"
            );
            return Err(TarotError::InsufficientCards {
                spread,
                available: cards.len(),
            });
        }

        let reading = Reading::new(spread, &cards);
        self.history.push(reading.clone());
        tracing::debug!(
            %spread,
            remaining = self.deck.remaining_count(),
            "reading complete"
        );
        Ok(reading)
    }

    /// Save a reading to `path`. Returns `false` on failure.
    pub fn save_reading(&self, path: &Path, reading: &Reading) -> bool {
        persist::save_reading(path, reading)
    }

    /// Load a reading from `path`. Returns `None` on failure.
    pub fn load_reading(&self, path: &Path) -> Option<Reading> {
        persist::load_reading(path)
    }
}

impl Default for ReadingSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
