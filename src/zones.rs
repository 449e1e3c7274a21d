//! Ordered card containers: deck, hand, discard pile and play area.
//!
//! The top of a zone is the end of its card list, so `add` places a card on
//! top and `draw` takes it back off.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::card::{Card, standard_deck};
use crate::error::CardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Deck,
    Hand,
    DiscardPile,
    PlayArea,
}

impl ZoneKind {
    pub fn name(self) -> &'static str {
        match self {
            ZoneKind::Deck => "Deck",
            ZoneKind::Hand => "Hand",
            ZoneKind::DiscardPile => "Discard Pile",
            ZoneKind::PlayArea => "Play Area",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZoneKind {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "deck" => Ok(ZoneKind::Deck),
            "hand" => Ok(ZoneKind::Hand),
            "discard" | "discard pile" => Ok(ZoneKind::DiscardPile),
            "play" | "play area" => Ok(ZoneKind::PlayArea),
            _ => Err(CardError::UnknownZone(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub cards: Vec<Card>,
}

impl Zone {
    pub fn new(kind: ZoneKind) -> Self {
        Self::with_cards(kind, Vec::new())
    }

    pub fn with_cards(kind: ZoneKind, cards: Vec<Card>) -> Self {
        Self { kind, cards }
    }

    /// A deck zone holding the 52 standard cards in suit order.
    pub fn standard_deck() -> Self {
        Self::with_cards(ZoneKind::Deck, standard_deck())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card `draw` would return next.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card equal to `card`. Returns whether one was found.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => {
                trace!(zone = %self.kind, %card, "remove: card not in zone");
                false
            }
        }
    }

    /// Uniform in-place shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Move the first `index` cards under the rest. Indexes past the end are clamped.
    pub fn cut(&mut self, index: usize) {
        let index = index.min(self.cards.len());
        self.cards.rotate_left(index);
    }

    /// Deal `count` cards to each hand, one at a time round-robin.
    ///
    /// Stops early when the zone runs dry and returns how many were dealt.
    pub fn deal(&mut self, count: usize, hands: &mut [Zone]) -> usize {
        let mut dealt = 0;
        for _ in 0..count {
            for hand in hands.iter_mut() {
                let Some(card) = self.draw() else {
                    trace!(dealt, "deal: zone exhausted");
                    return dealt;
                };
                hand.add(card);
                dealt += 1;
            }
        }
        dealt
    }

    /// Move every card from `other` on top of this zone, keeping their order.
    pub fn gather(&mut self, other: &mut Zone) {
        self.cards.append(&mut other.cards);
    }
}
