//! Completed readings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::card::{Card, CardSnapshot};
use crate::error::{TarotError, TarotResult};
use crate::spread::Spread;

/// A completed reading: the spread label, the cards in draw order, and the
/// rendered interpretation.
///
/// This is also the on-disk format: `{"type", "cards", "interpretation"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The spread label, e.g. `"Celtic Cross"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Snapshots of the drawn cards, first drawn first.
    pub cards: Vec<CardSnapshot>,
    /// One line per position, derived from `kind` and `cards`.
    pub interpretation: String,
}

impl Reading {
    /// Lay `cards` out in `spread` and render the interpretation.
    pub fn new(spread: Spread, cards: &[Card]) -> Self {
        let cards: Vec<CardSnapshot> = cards.iter().map(Card::to_snapshot).collect();
        let interpretation = spread.interpret(&cards);
        Self {
            kind: spread.label().to_string(),
            cards,
            interpretation,
        }
    }

    /// Rebuild a reading from an untyped JSON object.
    ///
    /// Each card goes through [`Card::from_json`], so a card with missing or
    /// wrong-typed keys fails with [`TarotError::MalformedSnapshot`]. A missing
    /// top-level key fails with [`TarotError::InvalidReading`]. The shape is
    /// not checked against the spread here; see [`Reading::validate`].
    pub fn from_json(value: &Value) -> TarotResult<Self> {
        let map = value.as_object().ok_or_else(|| {
            TarotError::InvalidReading("expected a JSON object".to_string())
        })?;

        let text = |key: &str| -> TarotResult<String> {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| TarotError::InvalidReading(format!("missing key \"{key}\"")))
        };

        let cards = map
            .get("cards")
            .and_then(Value::as_array)
            .ok_or_else(|| TarotError::InvalidReading("missing key \"cards\"".to_string()))?
            .iter()
            .enumerate()
            .map(|(i, card)| match Card::from_json(card) {
                Ok(card) => Ok(card.to_snapshot()),
                Err(TarotError::MalformedSnapshot(m)) => {
                    Err(TarotError::MalformedSnapshot(format!("card {}: {m}", i + 1)))
                }
                Err(e) => Err(e),
            })
            .collect::<TarotResult<Vec<_>>>()?;

        Ok(Self {
            kind: text("type")?,
            cards,
            interpretation: text("interpretation")?,
        })
    }

    /// The spread named by `kind`, if it is one of the known labels.
    pub fn spread(&self) -> Option<Spread> {
        Spread::from_label(&self.kind)
    }

    /// Recompute the interpretation from the cards, if the spread is known.
    pub fn render_interpretation(&self) -> Option<String> {
        self.spread().map(|s| s.interpret(&self.cards))
    }

    /// Pair each card with its position name.
    ///
    /// Single-card readings have no named positions and yield `None`.
    pub fn positioned_cards(&self) -> Vec<(Option<&'static str>, &CardSnapshot)> {
        let positions = self.spread().map(Spread::positions).unwrap_or(&[]);
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (positions.get(i).copied(), card))
            .collect()
    }

    /// Check that `kind` names a known spread and the card count matches it.
    pub fn validate(&self) -> TarotResult<()> {
        let spread = self.spread().ok_or_else(|| {
            TarotError::InvalidReading(format!("unknown reading type \"{}\"", self.kind))
        })?;
        if self.cards.len() != spread.card_count() {
            return Err(TarotError::InvalidReading(format!(
                "{} reading has {} cards, expected {}",
                self.kind,
                self.cards.len(),
                spread.card_count()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn three_cards() -> Vec<Card> {
        vec![
            Card::new("The Fool", "New beginnings"),
            Card::new("The Tower", "Sudden change").with_reversed(true),
            Card::new("The World", "Completion").with_image("world.png"),
        ]
    }

    #[test]
    fn new_binds_label_and_cards() {
        let reading = Reading::new(Spread::ThreeCard, &three_cards());
        assert_eq!(reading.kind, "Three Card (Past, Present, Future)");
        assert_eq!(reading.cards.len(), 3);
        assert_eq!(reading.cards[1].name, "The Tower");
        assert!(reading.cards[1].reversed);
        assert_eq!(reading.spread(), Some(Spread::ThreeCard));
    }

    #[test]
    fn interpretation_is_recomputable() {
        let reading = Reading::new(Spread::ThreeCard, &three_cards());
        assert_eq!(
            reading.render_interpretation().as_deref(),
            Some(reading.interpretation.as_str())
        );
    }

    #[test]
    fn positioned_cards_follow_layout() {
        let reading = Reading::new(Spread::ThreeCard, &three_cards());
        let positions: Vec<Option<&str>> =
            reading.positioned_cards().into_iter().map(|(p, _)| p).collect();
        assert_eq!(positions, [Some("Past"), Some("Present"), Some("Future")]);

        let single = Reading::new(Spread::SingleCard, &three_cards()[..1]);
        assert_eq!(single.positioned_cards()[0].0, None);
    }

    #[test]
    fn serializes_type_key() {
        let reading = Reading::new(Spread::SingleCard, &three_cards()[..1]);
        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(value["type"], json!("Single Card"));
        assert!(value.get("kind").is_none());
        assert_eq!(
            value["interpretation"],
            json!("Today's guidance: The Fool: New beginnings")
        );
    }

    #[test]
    fn from_json_matches_serde_output() {
        let reading = Reading::new(Spread::ThreeCard, &three_cards());
        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(Reading::from_json(&value).unwrap(), reading);
    }

    #[test]
    fn from_json_reports_malformed_card_position() {
        let value = json!({
            "type": "Three Card (Past, Present, Future)",
            "cards": [
                { "name": "A", "description": "B" },
                { "description": "no name" },
                { "name": "C", "description": "D" }
            ],
            "interpretation": ""
        });
        let err = Reading::from_json(&value).unwrap_err();
        assert!(matches!(err, TarotError::MalformedSnapshot(ref m) if m.starts_with("card 2:")));
    }

    #[test]
    fn from_json_missing_type_is_invalid() {
        let value = json!({ "cards": [], "interpretation": "" });
        let err = Reading::from_json(&value).unwrap_err();
        assert!(matches!(err, TarotError::InvalidReading(ref m) if m.contains("type")));
    }

    #[test]
    fn validate_accepts_well_formed() {
        let reading = Reading::new(Spread::ThreeCard, &three_cards());
        assert!(reading.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_type() {
        let mut reading = Reading::new(Spread::ThreeCard, &three_cards());
        reading.kind = "Horseshoe".to_string();
        let err = reading.validate().unwrap_err();
        assert!(err.to_string().contains("unknown reading type"));
    }

    #[test]
    fn validate_rejects_wrong_count() {
        let reading = Reading::new(Spread::CelticCross, &three_cards());
        let err = reading.validate().unwrap_err();
        assert!(matches!(err, TarotError::InvalidReading(_)));
        assert!(err.to_string().contains("expected 10"));
    }
}
