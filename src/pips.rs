//! Pip coordinates for numeral cards.
//!
//! Tables are written out per rank; symmetric layouts list both halves
//! rather than mirroring at runtime. Rows index the interior band, columns
//! name one of the variant's three pip columns.

use crate::card::Rank;
use crate::variant::{PipColumns, Variant};

/// Named pip column, resolved against a [`PipColumns`] at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipColumn {
    Left,
    Center,
    Right,
}

impl PipColumn {
    fn resolve(self, columns: &PipColumns) -> usize {
        match self {
            PipColumn::Left => columns.left,
            PipColumn::Center => columns.center,
            PipColumn::Right => columns.right,
        }
    }
}

type Layout = &'static [(usize, PipColumn)];

use PipColumn::{Center as C, Left as L, Right as R};

static ASCII_LAYOUTS: [Layout; 9] = [
    // 2
    &[(2, C), (6, C)],
    // 3
    &[(2, C), (4, C), (6, C)],
    // 4
    &[(2, L), (2, R), (6, L), (6, R)],
    // 5
    &[(2, L), (2, R), (4, C), (6, L), (6, R)],
    // 6
    &[(2, L), (2, R), (4, L), (4, R), (6, L), (6, R)],
    // 7
    &[(2, L), (2, R), (4, L), (4, R), (5, C), (6, L), (6, R)],
    // 8
    &[(2, L), (2, R), (3, C), (4, L), (4, R), (5, C), (6, L), (6, R)],
    // 9
    &[(2, L), (2, C), (2, R), (4, L), (4, C), (4, R), (6, L), (6, C), (6, R)],
    // 10
    &[
        (2, L),
        (2, C),
        (2, R),
        (3, C),
        (4, L),
        (4, R),
        (5, C),
        (6, L),
        (6, C),
        (6, R),
    ],
];

static SIMPLE_LAYOUTS: [Layout; 9] = [
    // 2
    &[(0, C), (4, C)],
    // 3
    &[(0, C), (2, C), (4, C)],
    // 4
    &[(0, L), (0, R), (4, L), (4, R)],
    // 5
    &[(0, L), (0, R), (2, C), (4, L), (4, R)],
    // 6
    &[(0, L), (0, R), (2, L), (2, R), (4, L), (4, R)],
    // 7
    &[(0, L), (0, R), (2, L), (2, R), (3, C), (4, L), (4, R)],
    // 8
    &[(0, L), (0, R), (1, C), (2, L), (2, R), (3, C), (4, L), (4, R)],
    // 9
    &[(0, L), (0, C), (0, R), (2, L), (2, C), (2, R), (4, L), (4, C), (4, R)],
    // 10
    &[
        (0, L),
        (0, C),
        (0, R),
        (1, C),
        (2, L),
        (2, R),
        (3, C),
        (4, L),
        (4, C),
        (4, R),
    ],
];

fn table(variant: Variant, rank: Rank) -> Option<Layout> {
    let index = rank.pip_count()?.checked_sub(2)?;
    match variant {
        Variant::Ascii => ASCII_LAYOUTS.get(index).copied(),
        Variant::Simple => SIMPLE_LAYOUTS.get(index).copied(),
        Variant::Minimal => None,
    }
}

/// `(row, column)` interior coordinates of each pip, in table order.
///
/// Empty for court cards, aces, jokers and the minimal variant.
pub fn pip_positions(variant: Variant, rank: Rank, columns: &PipColumns) -> Vec<(usize, usize)> {
    table(variant, rank)
        .map(|layout| {
            layout
                .iter()
                .map(|&(row, column)| (row, column.resolve(columns)))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(variant: Variant) -> PipColumns {
        variant
            .default_config()
            .pip_columns
            .expect("variant has pip columns")
    }

    #[test]
    fn numeral_layouts_hold_one_pip_per_rank_point() {
        for variant in [Variant::Ascii, Variant::Simple] {
            for rank in Rank::STANDARD {
                let positions = pip_positions(variant, rank, &columns(variant));
                assert_eq!(positions.len(), rank.pip_count().unwrap_or(0));
                for (i, pos) in positions.iter().enumerate() {
                    assert!(!positions[i + 1..].contains(pos), "{variant} {rank} repeats {pos:?}");
                }
            }
        }
    }

    #[test]
    fn default_layouts_fit_interior() {
        for variant in [Variant::Ascii, Variant::Simple] {
            let config = variant.default_config();
            for rank in Rank::STANDARD {
                for (row, col) in pip_positions(variant, rank, &columns(variant)) {
                    assert!(row < config.interior_height());
                    assert!(col < config.interior_width());
                }
            }
        }
    }

    #[test]
    fn eight_is_vertically_symmetric() {
        let positions = pip_positions(Variant::Ascii, Rank::Eight, &columns(Variant::Ascii));
        for &(row, col) in &positions {
            assert!(positions.contains(&(8 - row, col)));
        }
    }

    #[test]
    fn special_ranks_and_minimal_have_no_pips() {
        let cols = columns(Variant::Simple);
        assert!(pip_positions(Variant::Simple, Rank::King, &cols).is_empty());
        assert!(pip_positions(Variant::Ascii, Rank::Joker, &cols).is_empty());
        assert!(pip_positions(Variant::Minimal, Rank::Five, &cols).is_empty());
    }

    #[test]
    fn columns_resolve_against_config() {
        let cols = PipColumns {
            left: 1,
            center: 3,
            right: 5,
        };
        assert_eq!(
            pip_positions(Variant::Simple, Rank::Four, &cols),
            vec![(0, 1), (0, 5), (4, 1), (4, 5)]
        );
    }
}
