//! Fixed-grid text rendering of playing cards for terminal card games.

pub mod art;
mod builder;
mod card;
mod config;
mod custom;
mod error;
mod grid;
mod mini;
mod pips;
pub mod text;
mod unicode;
mod variant;
mod zones;

pub use art::Theme;
pub use builder::{
    CardContentBuilder, DEFAULT_BACK_PATTERN, build_card, create_bottom_line, create_top_line,
    render_back, side_by_side,
};
pub use card::{Card, Rank, Suit, SuitColor, paired_deck, standard_deck};
pub use config::RenderConfig;
pub use custom::{CardSize, Corner, CornerSymbol, CustomCard};
pub use error::CardError;
pub use grid::Grid;
pub use mini::{MiniProfile, render_mini};
pub use pips::{PipColumn, pip_positions};
pub use unicode::{BLACK_JOKER, CARD_BACK, RED_JOKER, WHITE_JOKER, card_glyph, glyph_for};
pub use variant::{PipColumns, Variant, VariantConfig};
pub use zones::{Zone, ZoneKind};
