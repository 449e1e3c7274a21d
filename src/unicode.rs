//! Single-glyph cards from the Unicode "Playing Cards" block.

use crate::card::{Card, Rank, Suit};

/// Card back, `🂠`.
pub const CARD_BACK: char = '\u{1F0A0}';
pub const RED_JOKER: char = '\u{1F0BF}';
pub const BLACK_JOKER: char = '\u{1F0CF}';
pub const WHITE_JOKER: char = '\u{1F0DF}';

fn suit_base(suit: Suit) -> u32 {
    match suit {
        Suit::Spades => 0x1F0A0,
        Suit::Hearts => 0x1F0B0,
        Suit::Diamonds => 0x1F0C0,
        Suit::Clubs => 0x1F0D0,
    }
}

// The block's knight (0xC) is skipped.
fn rank_offset(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 0x1,
        Rank::Two => 0x2,
        Rank::Three => 0x3,
        Rank::Four => 0x4,
        Rank::Five => 0x5,
        Rank::Six => 0x6,
        Rank::Seven => 0x7,
        Rank::Eight => 0x8,
        Rank::Nine => 0x9,
        Rank::Ten => 0xA,
        Rank::Jack => 0xB,
        Rank::Queen => 0xD,
        Rank::King => 0xE,
        Rank::Joker => 0xF,
    }
}

/// The code point for `rank` of `suit`.
///
/// Jokers are red for hearts, black for spades and white otherwise.
pub fn card_glyph(suit: Suit, rank: Rank) -> char {
    if rank == Rank::Joker {
        return match suit {
            Suit::Hearts => RED_JOKER,
            Suit::Spades => BLACK_JOKER,
            Suit::Diamonds | Suit::Clubs => WHITE_JOKER,
        };
    }
    char::from_u32(suit_base(suit) + rank_offset(rank)).unwrap_or(CARD_BACK)
}

/// Glyph for a held card. Custom cards have no code point and show the back.
pub fn glyph_for(card: &Card, face_up: bool) -> char {
    match card {
        Card::Standard { rank, suit } if face_up => card_glyph(*suit, *rank),
        _ => CARD_BACK,
    }
}
