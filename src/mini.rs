//! Compact cards for dense hands: `mini` is 3x3, `micro` is 2x2.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::{Rank, Suit};
use crate::error::CardError;
use crate::grid::Grid;

const BACK_TOP: char = '☼';
const BACK_BOTTOM: char = '☕';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MiniProfile {
    #[default]
    Mini,
    Micro,
}

impl MiniProfile {
    pub fn name(self) -> &'static str {
        match self {
            MiniProfile::Mini => "mini",
            MiniProfile::Micro => "micro",
        }
    }

    /// `(columns, rows)` of the block.
    pub fn size(self) -> (usize, usize) {
        match self {
            MiniProfile::Mini => (3, 3),
            MiniProfile::Micro => (2, 2),
        }
    }
}

impl fmt::Display for MiniProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MiniProfile {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mini" => Ok(MiniProfile::Mini),
            "micro" => Ok(MiniProfile::Micro),
            _ => Err(CardError::UnknownProfile(s.to_string())),
        }
    }
}

/// Render a compact card. Face-down cards show the sun and cup marks.
///
/// Mini indents by one column and leaves the first row blank; a two-char
/// rank like `10` fills the indent instead of pushing past the edge.
pub fn render_mini(rank: Rank, suit: Suit, profile: MiniProfile, face_up: bool) -> Vec<String> {
    let (cols, rows) = profile.size();
    let mut grid = Grid::new(cols, rows, ' ');
    let (top, bottom) = if face_up {
        (rank.label().to_string(), suit.glyph().to_string())
    } else {
        (BACK_TOP.to_string(), BACK_BOTTOM.to_string())
    };

    match profile {
        MiniProfile::Mini => {
            let indent = if face_up && rank.label().len() > 1 { 0 } else { 1 };
            grid.write(1, indent, &top);
            grid.write(2, 1, &bottom);
        }
        MiniProfile::Micro => {
            grid.write(0, 0, &top);
            grid.write(1, 0, &bottom);
        }
    }
    grid.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mini_face_up() {
        assert_eq!(
            render_mini(Rank::Ace, Suit::Hearts, MiniProfile::Mini, true),
            vec!["   ", " A ", " ♥ "]
        );
        assert_eq!(
            render_mini(Rank::Ten, Suit::Clubs, MiniProfile::Mini, true),
            vec!["   ", "10 ", " ♣ "]
        );
    }

    #[test]
    fn micro_face_up() {
        assert_eq!(
            render_mini(Rank::King, Suit::Spades, MiniProfile::Micro, true),
            vec!["K ", "♠ "]
        );
        assert_eq!(
            render_mini(Rank::Ten, Suit::Diamonds, MiniProfile::Micro, true),
            vec!["10", "♦ "]
        );
    }

    #[test]
    fn face_down_hides_identity() {
        assert_eq!(
            render_mini(Rank::Ten, Suit::Hearts, MiniProfile::Mini, false),
            vec!["   ", " ☼ ", " ☕ "]
        );
        assert_eq!(
            render_mini(Rank::Ten, Suit::Hearts, MiniProfile::Micro, false),
            vec!["☼ ", "☕ "]
        );
    }

    #[test]
    fn joker_label_is_clipped_to_the_block() {
        let lines = render_mini(Rank::Joker, Suit::Hearts, MiniProfile::Mini, true);
        assert_eq!(lines[1], "JOK");
    }

    #[test]
    fn profile_parses() {
        assert_eq!("Micro".parse::<MiniProfile>(), Ok(MiniProfile::Micro));
        assert_eq!(
            "tiny".parse::<MiniProfile>(),
            Err(CardError::UnknownProfile("tiny".to_string()))
        );
    }
}
