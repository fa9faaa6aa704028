//! Tarot deck and reading engine.
//!
//! Provides the 78-card tarot deck with shuffling and orientation,
//! the three fixed spreads (single card, past/present/future, Celtic Cross),
//! a reading session that keeps a history of its readings, and JSON
//! persistence for individual readings.

pub mod card;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod error;
pub mod persist;
pub mod reading;
pub mod session;
pub mod spread;

pub use card::{Card, CardSnapshot};
pub use config::SessionConfig;
pub use deck::{Deck, FULL_DECK_SIZE};
pub use error::{TarotError, TarotResult};
pub use persist::{load_reading, read_reading, save_reading, write_reading};
pub use reading::Reading;
pub use session::ReadingSession;
pub use spread::Spread;
