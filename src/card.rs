//! Card identity: ranks, suits and the card sum type.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::custom::CustomCard;
use crate::error::CardError;

/// Card rank. `Joker` only carries meaning on the single-glyph path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "JOKER")]
    Joker,
}

impl Rank {
    /// The thirteen ranks of a standard deck, in deal order.
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "JOKER",
        }
    }

    /// Number of pips on a numeral card, `None` for everything else.
    pub fn pip_count(self) -> Option<usize> {
        match self {
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten => Some(10),
            _ => None,
        }
    }

    /// Ace and court cards, which take the special-art path.
    pub fn is_special(self) -> bool {
        matches!(self, Rank::Ace | Rank::Jack | Rank::Queen | Rank::King)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim().to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" | "JACK" => Rank::Jack,
            "Q" | "QUEEN" => Rank::Queen,
            "K" | "KING" => Rank::King,
            "A" | "ACE" => Rank::Ace,
            "JOKER" => Rank::Joker,
            _ => return Err(CardError::UnknownRank(s.to_string())),
        };
        Ok(rank)
    }
}

/// Card suit, tied one-to-one to its display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// Color class a presentation layer applies to a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitColor {
    Red,
    White,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn glyph(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    pub fn from_glyph(glyph: char) -> Result<Self, CardError> {
        match glyph {
            '♥' => Ok(Suit::Hearts),
            '♦' => Ok(Suit::Diamonds),
            '♣' => Ok(Suit::Clubs),
            '♠' => Ok(Suit::Spades),
            other => Err(CardError::UnknownGlyph(other, other as u32)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn color(self) -> SuitColor {
        match self {
            Suit::Hearts | Suit::Diamonds => SuitColor::Red,
            Suit::Clubs | Suit::Spades => SuitColor::White,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Accepts a suit name, its initial, or the glyph itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Ok(suit) = Suit::from_glyph(ch) {
                return Ok(suit);
            }
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "hearts" | "heart" | "h" => Ok(Suit::Hearts),
            "diamonds" | "diamond" | "d" => Ok(Suit::Diamonds),
            "clubs" | "club" | "c" => Ok(Suit::Clubs),
            "spades" | "spade" | "s" => Ok(Suit::Spades),
            _ => Err(CardError::UnknownSuit(s.to_string())),
        }
    }
}

/// A card held in a zone: either a standard playing card or a custom one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Custom(CustomCard),
}

impl Card {
    pub fn standard(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(*rank),
            Card::Custom(_) => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Custom(_) => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{}{}", rank, suit.glyph()),
            Card::Custom(custom) => write!(f, "[{}]", custom.title.as_deref().unwrap_or("custom")),
        }
    }
}

/// The 52-card deck: suits hearts, diamonds, clubs, spades, each 2 through A.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(Suit::ALL.len() * Rank::STANDARD.len());
    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            deck.push(Card::standard(rank, suit));
        }
    }
    deck
}

/// A deck laid out as adjacent same-rank pairs, for memory/matching games.
///
/// Pairs are taken from the back of each rank group, so a rank yields
/// (spades, clubs) then (diamonds, hearts). With `shuffle_pairs` the pair
/// order is randomized while each pair stays adjacent.
pub fn paired_deck<R: Rng + ?Sized>(rng: &mut R, shuffle_pairs: bool) -> Vec<Card> {
    let mut pairs: Vec<(Card, Card)> = Vec::new();
    for rank in Rank::STANDARD {
        let mut group: Vec<Card> = Suit::ALL
            .iter()
            .map(|&suit| Card::standard(rank, suit))
            .collect();
        while group.len() >= 2 {
            if let (Some(first), Some(second)) = (group.pop(), group.pop()) {
                pairs.push((first, second));
            }
        }
    }
    if shuffle_pairs {
        pairs.shuffle(rng);
    }
    pairs.into_iter().flat_map(|(a, b)| [a, b]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn glyph_mapping_round_trips() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_glyph(suit.glyph()), Ok(suit));
        }
        assert_eq!(
            Suit::from_glyph('x'),
            Err(CardError::UnknownGlyph('x', 0x78))
        );
    }

    #[test]
    fn suit_parses_names_initials_and_glyphs() {
        assert_eq!("Hearts".parse::<Suit>(), Ok(Suit::Hearts));
        assert_eq!("s".parse::<Suit>(), Ok(Suit::Spades));
        assert_eq!("♦".parse::<Suit>(), Ok(Suit::Diamonds));
        assert!("stars".parse::<Suit>().is_err());
    }

    #[test]
    fn rank_parses_labels_and_words() {
        assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
        assert_eq!("q".parse::<Rank>(), Ok(Rank::Queen));
        assert_eq!("joker".parse::<Rank>(), Ok(Rank::Joker));
        assert_eq!(
            "1".parse::<Rank>(),
            Err(CardError::UnknownRank("1".to_string()))
        );
    }

    #[test]
    fn red_suits_are_hearts_and_diamonds() {
        assert_eq!(Suit::Hearts.color(), SuitColor::Red);
        assert_eq!(Suit::Diamonds.color(), SuitColor::Red);
        assert_eq!(Suit::Clubs.color(), SuitColor::White);
        assert_eq!(Suit::Spades.color(), SuitColor::White);
    }

    #[test]
    fn standard_deck_has_every_card_once() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck[0], Card::standard(Rank::Two, Suit::Hearts));
        assert_eq!(deck[51], Card::standard(Rank::Ace, Suit::Spades));
        for (i, card) in deck.iter().enumerate() {
            assert!(!deck[i + 1..].contains(card));
        }
    }

    #[test]
    fn paired_deck_keeps_pairs_adjacent() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let deck = paired_deck(&mut rng, true);
        assert_eq!(deck.len(), 52);
        for pair in deck.chunks(2) {
            assert_eq!(pair[0].rank(), pair[1].rank());
        }

        let ordered = paired_deck(&mut rng, false);
        assert_eq!(ordered[0], Card::standard(Rank::Two, Suit::Spades));
        assert_eq!(ordered[1], Card::standard(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn card_serializes_with_kind_tag() {
        let card = Card::standard(Rank::Ten, Suit::Clubs);
        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(json, r#"{"kind":"standard","rank":"10","suit":"clubs"}"#);
        let back: Card = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, card);
    }
}
