//! Individual tarot cards and their serializable snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TarotError, TarotResult};

/// A single tarot card.
///
/// Name and description are fixed at construction. Orientation is the only
/// mutable state and changes through [`Card::flip`] (directly or during a
/// deck shuffle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    name: String,
    description: String,
    image_ref: Option<String>,
    reversed: bool,
}

impl Card {
    /// Create an upright card with no image.
    ///
    /// Arguments are not checked for emptiness; untrusted data goes through
    /// [`Card::from_json`], which rejects empty names and descriptions.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_ref: None,
            reversed: false,
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Set the initial orientation.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// The card's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The card's upright meaning.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Optional image reference.
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    /// Whether the card is reversed.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Toggle the card's orientation.
    pub fn flip(&mut self) {
        self.reversed = !self.reversed;
    }

    /// The card's meaning for its current orientation.
    pub fn meaning(&self) -> String {
        if self.reversed {
            format!(
                "{} (Reversed): {} - Consider the opposite or blocked energy.",
                self.name, self.description
            )
        } else {
            format!("{}: {}", self.name, self.description)
        }
    }

    /// Field-only copy of this card.
    pub fn to_snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            image_file: self.image_ref.clone(),
            reversed: self.reversed,
        }
    }

    /// Rebuild a card from a snapshot.
    pub fn from_snapshot(snapshot: &CardSnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            description: snapshot.description.clone(),
            image_ref: snapshot.image_file.clone(),
            reversed: snapshot.reversed,
        }
    }

    /// Rebuild a card from an untyped JSON object.
    ///
    /// `name` and `description` are required non-empty strings. `image_file`
    /// defaults to none and `reversed` to upright when absent or `null`; a
    /// present value of the wrong type is rejected.
    pub fn from_json(value: &Value) -> TarotResult<Self> {
        let map = value.as_object().ok_or_else(|| {
            TarotError::MalformedSnapshot("expected a JSON object".to_string())
        })?;

        let required = |key: &str| -> TarotResult<String> {
            match map.get(key) {
                None | Some(Value::Null) => Err(TarotError::MalformedSnapshot(format!(
                    "missing key \"{key}\""
                ))),
                Some(Value::String(s)) if s.is_empty() => Err(TarotError::MalformedSnapshot(
                    format!("key \"{key}\" is empty"),
                )),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(TarotError::MalformedSnapshot(format!(
                    "key \"{key}\" must be a string"
                ))),
            }
        };

        let image_ref = match map.get("image_file") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(TarotError::MalformedSnapshot(
                    "key \"image_file\" must be a string or null".to_string(),
                ));
            }
        };

        let reversed = match map.get("reversed") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                return Err(TarotError::MalformedSnapshot(
                    "key \"reversed\" must be a boolean".to_string(),
                ));
            }
        };

        Ok(Self {
            name: required("name")?,
            description: required("description")?,
            image_ref,
            reversed,
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.meaning())
    }
}

/// Serializable field-only representation of a [`Card`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    /// Card name.
    pub name: String,
    /// Upright meaning.
    pub description: String,
    /// Optional image reference, written as `null` when absent.
    #[serde(default)]
    pub image_file: Option<String>,
    /// Orientation at the time of the snapshot.
    #[serde(default)]
    pub reversed: bool,
}

impl CardSnapshot {
    /// The meaning of the snapshotted card in its recorded orientation.
    pub fn meaning(&self) -> String {
        Card::from_snapshot(self).meaning()
    }
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        card.to_snapshot()
    }
}
