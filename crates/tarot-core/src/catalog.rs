//! The static card tables that make up a standard 78-card deck.
//!
//! Major Arcana names and meanings are a fixed list; Minor Arcana cards are
//! generated from the four suits, ten numbered ranks, and four court ranks.

use crate::card::Card;

/// Major Arcana as `(name, description)` pairs, in canonical order (22 entries).
pub const MAJOR_ARCANA: &[(&str, &str)] = &[
    ("The Fool", "New beginnings, spontaneity, innocence"),
    ("The Magician", "Manifestation, resourcefulness, power"),
    (
        "The High Priestess",
        "Intuition, sacred knowledge, divine feminine",
    ),
    ("The Empress", "Femininity, beauty, nature, abundance"),
    ("The Emperor", "Authority, structure, control, father-figure"),
    (
        "The Hierophant",
        "Spiritual wisdom, religious beliefs, conformity",
    ),
    ("The Lovers", "Love, harmony, relationships, values alignment"),
    ("The Chariot", "Control, willpower, success, determination"),
    ("Strength", "Inner strength, bravery, compassion, focus"),
    ("The Hermit", "Soul searching, introspection, inner guidance"),
    ("Wheel of Fortune", "Good luck, karma, life cycles, destiny"),
    ("Justice", "Justice, fairness, truth, cause and effect"),
    ("The Hanged Man", "Suspension, restriction, letting go"),
    ("Death", "Endings, beginnings, change, transformation"),
    ("Temperance", "Balance, moderation, patience, purpose"),
    ("The Devil", "Shadow self, attachment, addiction, restriction"),
    ("The Tower", "Sudden change, upheaval, chaos, revelation"),
    ("The Star", "Hope, faith, purpose, renewal, spirituality"),
    ("The Moon", "Illusion, fear, anxiety, subconscious, intuition"),
    ("The Sun", "Optimism, fun, warmth, success, vitality"),
    ("Judgement", "Reflection, reckoning, awakening"),
    ("The World", "Completion, integration, accomplishment, travel"),
];

/// Court ranks in canonical order.
pub const COURT_RANKS: &[&str] = &["Page", "Knight", "Queen", "King"];

/// Highest numbered rank in each suit.
pub const NUMBERED_RANKS: u32 = 10;

/// One of the four Minor Arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Emotional and relational matters.
    Cups,
    /// Drive and creative action.
    Wands,
    /// Thought and conflict.
    Swords,
    /// Material and financial matters.
    Pentacles,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Cups, Suit::Wands, Suit::Swords, Suit::Pentacles];

    /// The themes the suit governs, used in generated descriptions.
    pub fn theme(self) -> &'static str {
        match self {
            Self::Cups => "emotions, intuition, relationships, spirituality",
            Self::Wands => "creativity, action, passion, career",
            Self::Swords => "thoughts, communication, conflict, intellect",
            Self::Pentacles => "material world, resources, money, career",
        }
    }

    /// Numbered cards 1 (Ace) through 10 for this suit.
    pub fn numbered_cards(self) -> impl Iterator<Item = Card> {
        (1..=NUMBERED_RANKS).map(move |rank| {
            let name = if rank == 1 {
                format!("Ace of {self}")
            } else {
                format!("{rank} of {self}")
            };
            Card::new(name, format!("Represents {} at level {rank}", self.theme()))
        })
    }

    /// Court cards Page, Knight, Queen, King for this suit.
    pub fn court_cards(self) -> impl Iterator<Item = Card> {
        COURT_RANKS.iter().map(move |court| {
            Card::new(
                format!("{court} of {self}"),
                format!("{court} energy in the realm of {}", self.theme()),
            )
        })
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cups => write!(f, "Cups"),
            Self::Wands => write!(f, "Wands"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Build the full 78-card population in canonical order, all upright.
pub fn standard_cards() -> Vec<Card> {
    let majors = MAJOR_ARCANA
        .iter()
        .map(|(name, description)| Card::new(*name, *description));
    let minors = Suit::ALL
        .into_iter()
        .flat_map(|suit| suit.numbered_cards().chain(suit.court_cards()));
    majors.chain(minors).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_sizes() {
        assert_eq!(MAJOR_ARCANA.len(), 22);
        assert_eq!(COURT_RANKS.len(), 4);
        assert_eq!(Suit::ALL.len(), 4);
    }

    #[test]
    fn standard_cards_count_and_uniqueness() {
        let cards = standard_cards();
        assert_eq!(cards.len(), 78);
        let names: HashSet<&str> = cards.iter().map(Card::name).collect();
        assert_eq!(names.len(), 78);
        assert!(cards.iter().all(|c| !c.is_reversed()));
    }

    #[test]
    fn canonical_order() {
        let cards = standard_cards();
        assert_eq!(cards[0].name(), "The Fool");
        assert_eq!(cards[21].name(), "The World");
        assert_eq!(cards[22].name(), "Ace of Cups");
        assert_eq!(cards[23].name(), "2 of Cups");
        assert_eq!(cards[31].name(), "10 of Cups");
        assert_eq!(cards[32].name(), "Page of Cups");
        assert_eq!(cards[35].name(), "King of Cups");
        assert_eq!(cards[36].name(), "Ace of Wands");
        assert_eq!(cards[77].name(), "King of Pentacles");
    }

    #[test]
    fn generated_descriptions() {
        let cards = standard_cards();
        assert_eq!(
            cards[22].description(),
            "Represents emotions, intuition, relationships, spirituality at level 1"
        );
        assert_eq!(
            cards[77].description(),
            "King energy in the realm of material world, resources, money, career"
        );
    }

    #[test]
    fn suit_display() {
        assert_eq!(Suit::Swords.to_string(), "Swords");
        assert_eq!(Suit::Pentacles.to_string(), "Pentacles");
    }
}
