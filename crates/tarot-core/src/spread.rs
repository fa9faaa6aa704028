//! The fixed reading shapes.
//!
//! Each spread is described by an immutable [`SpreadLayout`] record: the
//! label written into readings, the named positions cards are bound to, how
//! many cards it needs, and the message reported when the deck runs short.

use crate::card::CardSnapshot;

/// Layout record for one spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadLayout {
    /// Label stored in a reading's `type` field.
    pub label: &'static str,
    /// Short display name.
    pub short_name: &'static str,
    /// Named positions in draw order. Empty for the single-card spread.
    pub positions: &'static [&'static str],
    /// Number of cards drawn.
    pub count: usize,
    /// Message reported when the deck cannot supply `count` cards.
    pub shortage_message: &'static str,
}

const SINGLE_CARD: SpreadLayout = SpreadLayout {
    label: "Single Card",
    short_name: "Single Card",
    positions: &[],
    count: 1,
    shortage_message: "Not enough cards available",
};

const THREE_CARD: SpreadLayout = SpreadLayout {
    label: "Three Card (Past, Present, Future)",
    short_name: "Three Card",
    positions: &["Past", "Present", "Future"],
    count: 3,
    shortage_message: "Not enough cards available",
};

const CELTIC_CROSS: SpreadLayout = SpreadLayout {
    label: "Celtic Cross",
    short_name: "Celtic Cross",
    positions: &[
        "Present Situation",
        "Challenge/Cross",
        "Distant Past/Foundation",
        "Recent Past",
        "Possible Outcome",
        "Near Future",
        "Your Approach",
        "External Influences",
        "Hopes and Fears",
        "Final Outcome",
    ],
    count: 10,
    shortage_message: "Not enough cards for Celtic Cross reading",
};

/// One of the three supported spreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spread {
    /// One card of daily guidance.
    SingleCard,
    /// Past, present, and future.
    ThreeCard,
    /// The ten-card Celtic Cross.
    CelticCross,
}

impl Spread {
    /// All spreads, smallest first.
    pub const ALL: [Spread; 3] = [Spread::SingleCard, Spread::ThreeCard, Spread::CelticCross];

    /// The layout record for this spread.
    pub fn layout(self) -> &'static SpreadLayout {
        match self {
            Self::SingleCard => &SINGLE_CARD,
            Self::ThreeCard => &THREE_CARD,
            Self::CelticCross => &CELTIC_CROSS,
        }
    }

    /// Label stored in a reading's `type` field.
    pub fn label(self) -> &'static str {
        self.layout().label
    }

    /// Number of cards the spread draws.
    pub fn card_count(self) -> usize {
        self.layout().count
    }

    /// Named positions in draw order.
    pub fn positions(self) -> &'static [&'static str] {
        self.layout().positions
    }

    /// Message reported when the deck cannot fill the spread.
    pub fn shortage_message(self) -> &'static str {
        self.layout().shortage_message
    }

    /// Find the spread whose reading label matches exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Render the interpretation text for cards laid out in this spread.
    ///
    /// The single-card spread reads as one line of guidance; the others
    /// prefix each card's meaning with its position, one line per card.
    pub fn interpret(self, cards: &[CardSnapshot]) -> String {
        match self {
            Self::SingleCard => cards
                .iter()
                .map(|c| format!("Today's guidance: {}", c.meaning()))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => self
                .positions()
                .iter()
                .zip(cards)
                .map(|(position, card)| format!("{position}: {}", card.meaning()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.layout().short_name)
    }
}

impl std::str::FromStr for Spread {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "single" | "singlecard" | "one" | "1" => Ok(Self::SingleCard),
            "three" | "threecard" | "pastpresentfuture" | "3" => Ok(Self::ThreeCard),
            "celtic" | "celticcross" | "cross" | "ten" | "10" => Ok(Self::CelticCross),
            _ => Err(format!(
                "unknown spread \"{s}\". Use: single, three, celtic-cross"
            )),
        }
    }
}
