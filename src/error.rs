//! Errors raised while interpreting user-supplied names.
//!
//! Rendering itself never fails; these only surface when a rank, suit,
//! variant or theme has to be parsed from text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("unknown rank '{0}' (expected 2-10, J, Q, K, A or JOKER)")]
    UnknownRank(String),
    #[error("unknown suit '{0}' (expected hearts, diamonds, clubs or spades)")]
    UnknownSuit(String),
    #[error("'{0}' (U+{1:04X}) is not a suit glyph")]
    UnknownGlyph(char, u32),
    #[error("unknown variant '{0}' (expected ascii, simple or minimal)")]
    UnknownVariant(String),
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("unknown mini profile '{0}' (expected mini or micro)")]
    UnknownProfile(String),
    #[error("unknown card size '{0}' (expected small, medium or large)")]
    UnknownSize(String),
    #[error("unknown zone '{0}' (expected deck, hand, discard or play)")]
    UnknownZone(String),
}
