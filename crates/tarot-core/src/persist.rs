//! Saving and loading single readings as pretty-printed JSON.
//!
//! Readings are conventionally stored with a `.rdg` extension, but the
//! content is plain JSON and any extension works.

use std::path::Path;

use crate::error::TarotResult;
use crate::reading::Reading;

/// Conventional file extension for saved readings.
pub const READING_EXTENSION: &str = "rdg";

/// Write `reading` to `path` as indented JSON.
pub fn write_reading(path: &Path, reading: &Reading) -> TarotResult<()> {
    let json = serde_json::to_string_pretty(reading)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), kind = %reading.kind, "reading saved");
    Ok(())
}

/// Read and validate a reading from `path`.
///
/// Fails if the file cannot be read or is not JSON, if a card is malformed,
/// if the reading object lacks a key, names an unknown spread, or holds the
/// wrong number of cards for its spread.
pub fn read_reading(path: &Path) -> TarotResult<Reading> {
    let text = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let reading = Reading::from_json(&value)?;
    reading.validate()?;
    Ok(reading)
}

/// Save a reading, reporting success as a flag.
///
/// Failures are logged and never propagated.
pub fn save_reading(path: &Path, reading: &Reading) -> bool {
    match write_reading(path, reading) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "error saving reading");
            false
        }
    }
}

/// Load a reading, returning `None` on any failure.
///
/// Failures are logged and never propagated.
pub fn load_reading(path: &Path) -> Option<Reading> {
    match read_reading(path) {
        Ok(reading) => Some(reading),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "error loading reading");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::error::TarotError;
    use crate::spread::Spread;
    use tempfile::TempDir;

    fn sample() -> Reading {
        Reading::new(
            Spread::ThreeCard,
            &[
                Card::new("The Fool", "New beginnings"),
                Card::new("Justice", "Fairness").with_reversed(true),
                Card::new("Ace of Cups", "Love").with_image("cups1.png"),
            ],
        )
    }

    #[test]
    fn round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reading.rdg");
        let reading = sample();

        assert!(save_reading(&path, &reading));
        let loaded = load_reading(&path).unwrap();
        assert_eq!(loaded, reading);
    }

    #[test]
    fn json_extension_works_too() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reading.json");
        assert!(save_reading(&path, &sample()));
        assert_eq!(load_reading(&path), Some(sample()));
    }

    #[test]
    fn output_is_indented_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reading.rdg");
        write_reading(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"type\": \"Three Card (Past, Present, Future)\""));
        assert!(text.contains("\"image_file\": null"));
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/reading.rdg");
        assert!(!save_reading(&path, &sample()));
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_reading(&dir.path().join("absent.rdg")).is_none());
    }

    #[test]
    fn load_invalid_json_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.rdg");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_reading(&path).is_none());
        assert!(matches!(read_reading(&path), Err(TarotError::Json(_))));
    }

    #[test]
    fn load_without_cards_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.rdg");
        std::fs::write(&path, r#"{"type": "Single Card", "interpretation": "x"}"#).unwrap();
        assert!(load_reading(&path).is_none());
        assert!(matches!(
            read_reading(&path),
            Err(TarotError::InvalidReading(ref m)) if m.contains("cards")
        ));
    }

    #[test]
    fn card_without_name_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nameless.rdg");
        std::fs::write(
            &path,
            r#"{"type": "Single Card", "cards": [{"description": "x"}], "interpretation": "x"}"#,
        )
        .unwrap();

        assert!(matches!(
            read_reading(&path),
            Err(TarotError::MalformedSnapshot(ref m)) if m.contains("name")
        ));
        assert!(load_reading(&path).is_none());
    }

    #[test]
    fn card_with_wrong_typed_reversed_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("typed.rdg");
        std::fs::write(
            &path,
            r#"{"type": "Single Card", "cards": [{"name": "A", "description": "B", "reversed": "true"}], "interpretation": "x"}"#,
        )
        .unwrap();

        assert!(matches!(
            read_reading(&path),
            Err(TarotError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn load_with_mismatched_count_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.rdg");
        let mut reading = sample();
        reading.kind = Spread::CelticCross.label().to_string();
        write_reading(&path, &reading).unwrap();

        assert!(matches!(
            read_reading(&path),
            Err(TarotError::InvalidReading(_))
        ));
        assert!(load_reading(&path).is_none());
    }

    #[test]
    fn load_defaults_optional_card_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("minimal.rdg");
        std::fs::write(
            &path,
            r#"{
  "type": "Single Card",
  "cards": [{"name": "The Sun", "description": "Optimism"}],
  "interpretation": "Today's guidance: The Sun: Optimism"
}"#,
        )
        .unwrap();

        let reading = load_reading(&path).unwrap();
        assert_eq!(reading.cards[0].image_file, None);
        assert!(!reading.cards[0].reversed);
    }
}
