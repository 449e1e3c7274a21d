//! Free-form cards: a title, some art, a wrapped description and corner marks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CardError;
use crate::grid::Grid;
use crate::text;

/// Preset footprint of a custom card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CardSize {
    pub const ALL: [CardSize; 3] = [CardSize::Small, CardSize::Medium, CardSize::Large];

    pub fn name(self) -> &'static str {
        match self {
            CardSize::Small => "small",
            CardSize::Medium => "medium",
            CardSize::Large => "large",
        }
    }

    /// `(width, height)` in cells.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            CardSize::Small => (10, 5),
            CardSize::Medium => (15, 7),
            CardSize::Large => (20, 10),
        }
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardSize {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownSize(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A single mark pinned to a corner, separated from the body by a blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerSymbol {
    #[serde(rename = "char")]
    pub symbol: char,
    pub position: Corner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub art: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<CornerSymbol>,
    #[serde(default)]
    pub size: CardSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
}

impl CustomCard {
    /// Explicit width/height win over the size preset.
    pub fn dimensions(&self) -> (usize, usize) {
        let (width, height) = self.size.dimensions();
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }
}

fn replace_row(grid: &mut Grid, row: usize, line: &str) {
    let width = grid.width();
    grid.write(row, 0, &text::spaces(width));
    let dropped = grid.write(row, 0, line);
    if dropped > 0 {
        debug!(row, dropped, "custom card line clipped");
    }
}

/// Render the face of a custom card as exactly `height` lines of `width` chars.
///
/// Layers are painted in order: art from the first row, the title over row
/// 0, the description wrapped from row 2, then the corner symbols.
pub fn render(card: &CustomCard) -> Vec<String> {
    let (width, height) = card.dimensions();
    let mut grid = Grid::new(width, height, ' ');

    for (row, line) in card.art.iter().take(height).enumerate() {
        replace_row(&mut grid, row, line);
    }

    if let Some(title) = &card.title {
        replace_row(&mut grid, 0, title);
    }

    if let Some(description) = &card.description {
        if width > 0 {
            for (offset, line) in textwrap::wrap(description, width).iter().enumerate() {
                if offset + 2 >= height {
                    debug!(height, "description truncated");
                    break;
                }
                replace_row(&mut grid, offset + 2, line);
            }
        }
    }

    let last_row = height.saturating_sub(1);
    let last_col = width.saturating_sub(1);
    for mark in &card.symbols {
        match mark.position {
            Corner::TopLeft => {
                grid.put(0, 0, mark.symbol);
                grid.put(0, 1, ' ');
            }
            Corner::TopRight => {
                grid.put(0, last_col.saturating_sub(1), ' ');
                grid.put(0, last_col, mark.symbol);
            }
            Corner::BottomLeft => {
                grid.put(last_row, 0, mark.symbol);
                grid.put(last_row, 1, ' ');
            }
            Corner::BottomRight => {
                grid.put(last_row, last_col.saturating_sub(1), ' ');
                grid.put(last_row, last_col, mark.symbol);
            }
        }
    }

    grid.into_lines()
}

/// Face-down custom card: the full footprint tiled with `pattern`.
pub fn render_back(card: &CustomCard, pattern: &str) -> Vec<String> {
    let (width, height) = card.dimensions();
    let cells: Vec<char> = pattern.chars().collect();
    let mut grid = Grid::new(width, height, ' ');
    if !cells.is_empty() {
        for row in 0..height {
            for col in 0..width {
                grid.put(row, col, cells[(row + col) % cells.len()]);
            }
        }
    }
    grid.into_lines()
}
