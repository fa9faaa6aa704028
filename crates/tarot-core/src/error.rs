//! Error types for the tarot engine.

use thiserror::Error;

use crate::spread::Spread;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while drawing, reading, or persisting.
#[derive(Debug, Error)]
pub enum TarotError {
    /// The deck ran out before the spread could be filled.
    #[error("{}", .spread.shortage_message())]
    InsufficientCards {
        /// The spread that was being laid out.
        spread: Spread,
        /// How many cards the deck actually produced.
        available: usize,
    },

    /// A card snapshot is missing a required key.
    #[error("malformed card snapshot: {0}")]
    MalformedSnapshot(String),

    /// A loaded reading does not match any known spread shape.
    #[error("invalid reading: {0}")]
    InvalidReading(String),

    /// Filesystem error while saving or loading.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
