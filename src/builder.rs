//! Card face composition.
//!
//! A framed (ascii or simple) card of width `W` and height `H` is laid out
//! as:
//!
//! ```text
//! row 0        index line: rank (and glyph) from the left edge
//! row 1        margin
//! rows 2..H-2  interior band, H-4 rows of W-2 columns between margin columns
//! row H-2      margin
//! row H-1      index line: rank (and glyph) against the right edge
//! ```
//!
//! Pips and special art address the interior band. Everything is drawn on
//! a [`Grid`], so the block is always exactly `H` lines of `W` chars.

use tracing::debug;

use crate::art::{self, Theme};
use crate::card::{Card, Rank, Suit};
use crate::custom;
use crate::grid::Grid;
use crate::pips::pip_positions;
use crate::text::{self, RESERVED_MARGIN};
use crate::variant::{Variant, VariantConfig};

const BAND_TOP: usize = 2;
const BAND_LEFT: usize = 1;

/// Default pattern painted on face-down cards.
pub const DEFAULT_BACK_PATTERN: &str = "░";

fn index_label(rank: Rank, suit: Suit, variant: Variant, top: bool) -> String {
    match (variant, top) {
        (Variant::Simple, _) => rank.label().to_string(),
        (_, true) => format!("{}{}", rank.label(), suit.glyph()),
        (_, false) => format!("{}{}", suit.glyph(), rank.label()),
    }
}

/// Top index line, spanning the full card width.
pub fn create_top_line(rank: Rank, suit: Suit, width: usize, variant: Variant) -> String {
    text::left(
        &index_label(rank, suit, variant, true),
        width + RESERVED_MARGIN,
    )
}

/// Bottom index line, mirroring [`create_top_line`] against the right edge.
pub fn create_bottom_line(rank: Rank, suit: Suit, width: usize, variant: Variant) -> String {
    text::right(
        &index_label(rank, suit, variant, false),
        width + RESERVED_MARGIN,
    )
}

/// Renders card faces and backs for one variant, geometry and theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContentBuilder {
    variant: Variant,
    config: VariantConfig,
    theme: Theme,
}

impl CardContentBuilder {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            config: variant.default_config(),
            theme: Theme::default(),
        }
    }

    pub fn with_config(mut self, config: VariantConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Face lines for `rank` of `suit`.
    pub fn lines(&self, rank: Rank, suit: Suit) -> Vec<String> {
        if self.variant == Variant::Minimal {
            return self.minimal(rank, suit);
        }

        let VariantConfig { width, height, .. } = self.config;
        let mut grid = Grid::new(width, height, ' ');
        grid.write(0, 0, &create_top_line(rank, suit, width, self.variant));
        if height > 1 {
            grid.write(
                height - 1,
                0,
                &create_bottom_line(rank, suit, width, self.variant),
            );
        }

        if rank.is_special() {
            self.draw_art(&mut grid, rank, suit);
        } else {
            self.draw_pips(&mut grid, rank, suit);
        }
        grid.into_lines()
    }

    /// Face as a single newline-joined block.
    pub fn build(&self, rank: Rank, suit: Suit) -> String {
        self.lines(rank, suit).join("\n")
    }

    /// Face-down lines: same footprint as the face, no rank and no suit.
    pub fn back_lines(&self, pattern: &str) -> Vec<String> {
        let cells: Vec<char> = pattern.chars().collect();
        let cell = |row: usize, col: usize| -> char {
            if cells.is_empty() {
                ' '
            } else {
                cells[(row + col) % cells.len()]
            }
        };

        if self.variant == Variant::Minimal {
            let label: String = (0..2).map(|col| cell(1, col)).collect();
            return minimal_block(&label, self.config.width);
        }

        let VariantConfig { width, height, .. } = self.config;
        let mut grid = Grid::new(width, height, ' ');
        for row in 1..height.saturating_sub(1) {
            for col in BAND_LEFT..width.saturating_sub(1) {
                grid.put(row, col, cell(row, col));
            }
        }
        grid.into_lines()
    }

    /// Render any card, face up or down. Custom cards use their own geometry.
    pub fn render(&self, card: &Card, face_up: bool, back_pattern: &str) -> Vec<String> {
        match card {
            Card::Standard { rank, suit } if face_up => self.lines(*rank, *suit),
            Card::Standard { .. } => self.back_lines(back_pattern),
            Card::Custom(face) if face_up => custom::render(face),
            Card::Custom(face) => custom::render_back(face, back_pattern),
        }
    }

    fn minimal(&self, rank: Rank, suit: Suit) -> Vec<String> {
        let label = format!("{}{}", rank.label(), suit.glyph());
        let field = if rank.label().len() > 1 {
            self.config.width.saturating_sub(2)
        } else {
            self.config.width
        };
        minimal_block(&label, field)
    }

    fn draw_pips(&self, grid: &mut Grid, rank: Rank, suit: Suit) {
        let Some(columns) = self.config.pip_columns else {
            debug!(variant = %self.variant, "no pip columns configured");
            return;
        };
        let rows = self.config.interior_height();
        let cols = self.config.interior_width();
        for (row, col) in pip_positions(self.variant, rank, &columns) {
            if row >= rows || col >= cols {
                debug!(%rank, row, col, rows, cols, "pip outside interior, skipped");
                continue;
            }
            grid.put(BAND_TOP + row, BAND_LEFT + col, suit.glyph());
        }
    }

    fn draw_art(&self, grid: &mut Grid, rank: Rank, suit: Suit) {
        let VariantConfig {
            width,
            height,
            padding_x,
            ..
        } = self.config;
        let art = art::render_special(
            self.variant,
            self.theme,
            rank,
            suit,
            width.saturating_sub(padding_x * 2),
        );
        let rows = self.config.interior_height();
        let lead = height.saturating_sub(art.len() + 4) / 2;
        if lead + art.len() > rows {
            debug!(%rank, theme = %self.theme, lines = art.len(), rows, "art taller than interior, clipped");
        }

        let first_col = BAND_LEFT + padding_x;
        let max_col = width.saturating_sub(BAND_LEFT + padding_x);
        for (offset, line) in art.iter().take(rows.saturating_sub(lead)).enumerate() {
            let dropped = grid.write_clipped(BAND_TOP + lead + offset, first_col, line, max_col);
            if dropped > 0 {
                debug!(%rank, dropped, "art line wider than interior, clipped");
            }
        }
    }
}

fn minimal_block(label: &str, field: usize) -> Vec<String> {
    let line = text::center(label, field);
    vec![text::spaces(text::width_of(&line)), line]
}

/// Build one card face as a newline-joined block.
pub fn build_card(
    rank: Rank,
    suit: Suit,
    variant: Variant,
    config: &VariantConfig,
    theme: Theme,
) -> String {
    CardContentBuilder::new(variant)
        .with_config(*config)
        .with_theme(theme)
        .build(rank, suit)
}

/// Face-down block for `variant`, tiled with `pattern`.
pub fn render_back(variant: Variant, config: &VariantConfig, pattern: &str) -> String {
    CardContentBuilder::new(variant)
        .with_config(*config)
        .back_lines(pattern)
        .join("\n")
}

/// Lay blocks out left to right, separated by `gap` spaces.
///
/// Shorter blocks are padded with blank rows to the tallest block.
pub fn side_by_side(blocks: &[Vec<String>], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| block.iter().map(|l| text::width_of(l)).max().unwrap_or(0))
        .collect();
    let spacer = text::spaces(gap);
    (0..height)
        .map(|row| {
            blocks
                .iter()
                .zip(&widths)
                .map(|(block, &width)| match block.get(row) {
                    Some(line) => {
                        let mut padded = line.clone();
                        padded.push_str(&text::spaces(width - text::width_of(line)));
                        padded
                    }
                    None => text::spaces(width),
                })
                .collect::<Vec<_>>()
                .join(&spacer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(lines: &[String], glyph: char) -> usize {
        lines.iter().flat_map(|l| l.chars()).filter(|&c| c == glyph).count()
    }

    #[test]
    fn simple_six_of_clubs() {
        let lines = CardContentBuilder::new(Variant::Simple).lines(Rank::Six, Suit::Clubs);
        assert_eq!(
            lines,
            vec![
                "6          ",
                "           ",
                "   ♣   ♣   ",
                "           ",
                "   ♣   ♣   ",
                "           ",
                "   ♣   ♣   ",
                "           ",
                "          6",
            ]
        );
    }

    #[test]
    fn ascii_index_lines_carry_glyph() {
        assert_eq!(create_top_line(Rank::Ten, Suit::Hearts, 15, Variant::Ascii), "10♥            ");
        assert_eq!(create_bottom_line(Rank::Ten, Suit::Hearts, 15, Variant::Ascii), "            ♥10");
        assert_eq!(create_top_line(Rank::Ten, Suit::Hearts, 11, Variant::Simple), "10         ");
    }

    #[test]
    fn ascii_king_art_is_vertically_centered() {
        let config = Variant::Ascii.default_config().with_size(15, 12);
        let lines = CardContentBuilder::new(Variant::Ascii)
            .with_config(config)
            .lines(Rank::King, Suit::Hearts);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[4], "      \\^/      ");
        assert_eq!(lines[5], "      (♥)      ");
        assert_eq!(lines[6], "      /|\\      ");
        assert_eq!(lines[7], "      / \\      ");
        assert_eq!(lines[3].trim(), "");
        assert_eq!(lines[8].trim(), "");
    }

    #[test]
    fn minimal_is_two_lines() {
        let builder = CardContentBuilder::new(Variant::Minimal);
        assert_eq!(builder.lines(Rank::Ace, Suit::Spades), vec!["    ", " A♠ "]);
        assert_eq!(builder.lines(Rank::Ten, Suit::Hearts), vec!["   ", "10♥"]);
    }

    #[test]
    fn out_of_range_pips_are_dropped() {
        let config = Variant::Simple.default_config().with_size(11, 6);
        let lines = CardContentBuilder::new(Variant::Simple)
            .with_config(config)
            .lines(Rank::Ten, Suit::Spades);
        assert_eq!(lines.len(), 6);
        // Only rows 0 and 1 of the pip table fit in a two-row band.
        assert_eq!(count(&lines, '♠'), 4);
    }

    #[test]
    fn tall_art_is_clipped_to_the_band() {
        let config = Variant::Ascii.default_config().with_size(15, 8);
        let lines = CardContentBuilder::new(Variant::Ascii)
            .with_config(config)
            .with_theme(Theme::Robot)
            .lines(Rank::King, Suit::Spades);
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| text::width_of(l) == 15));
        assert_eq!(lines[6].trim(), "");
    }

    #[test]
    fn back_hides_rank_and_suit() {
        for variant in Variant::ALL {
            let builder = CardContentBuilder::new(variant);
            let face = builder.lines(Rank::Ace, Suit::Spades);
            let back = builder.back_lines(DEFAULT_BACK_PATTERN);
            assert_eq!(back.len(), face.len());
            assert_eq!(count(&back, '♠'), 0);
            assert!(back.iter().all(|l| !l.contains('A')));
        }
    }

    #[test]
    fn back_block_is_tiled() {
        let config = Variant::Simple.default_config().with_size(5, 4);
        assert_eq!(render_back(Variant::Simple, &config, "▒"), "     \n ▒▒▒ \n ▒▒▒ \n     ");
    }

    #[test]
    fn side_by_side_pads_ragged_blocks() {
        let joined = side_by_side(
            &[
                vec!["ab".to_string(), "c".to_string()],
                vec!["x".to_string()],
            ],
            1,
        );
        assert_eq!(joined, vec!["ab x", "c   "]);
    }
}
