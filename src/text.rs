//! Primitive string alignment used by every layout path.
//!
//! All widths are counted in `char`s. Every aligner reserves
//! [`RESERVED_MARGIN`] columns out of the width it is given, so a call with
//! the card width yields a run that fits between the two margin columns.
//! Nothing here truncates: text longer than the budget is returned unpadded.

/// Columns held back by [`center`], [`left`] and [`right`] for the card margin.
pub const RESERVED_MARGIN: usize = 2;

/// A run of `count` spaces.
pub fn spaces(count: usize) -> String {
    fill(count, ' ')
}

/// A run of `count` copies of `ch`.
pub fn fill(count: usize, ch: char) -> String {
    std::iter::repeat_n(ch, count).collect()
}

/// Number of display cells in `text` under the one-char-per-cell model.
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn budget(text: &str, width: usize) -> usize {
    width
        .saturating_sub(RESERVED_MARGIN)
        .saturating_sub(width_of(text))
}

/// Center `text`, putting the odd column of padding on the right.
pub fn center(text: &str, width: usize) -> String {
    center_with(text, width, ' ')
}

/// [`center`] with an explicit fill character.
pub fn center_with(text: &str, width: usize, fill_char: char) -> String {
    let pad = budget(text, width);
    let before = pad / 2;
    let after = pad - before;
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(&fill(before, fill_char));
    out.push_str(text);
    out.push_str(&fill(after, fill_char));
    out
}

/// Left-align `text`, padding on the right.
pub fn left(text: &str, width: usize) -> String {
    left_with(text, width, ' ')
}

/// [`left`] with an explicit fill character.
pub fn left_with(text: &str, width: usize, fill_char: char) -> String {
    let mut out = text.to_string();
    out.push_str(&fill(budget(text, width), fill_char));
    out
}

/// Right-align `text`, padding on the left.
pub fn right(text: &str, width: usize) -> String {
    right_with(text, width, ' ')
}

/// [`right`] with an explicit fill character.
pub fn right_with(text: &str, width: usize, fill_char: char) -> String {
    let mut out = fill(budget(text, width), fill_char);
    out.push_str(text);
    out
}

/// Horizontal placement of a line inside its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Dispatch to [`left`], [`center`] or [`right`].
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => left(text, width),
        Alignment::Center => center(text, width),
        Alignment::Right => right(text, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_handles_zero() {
        assert_eq!(spaces(0), "");
        assert_eq!(spaces(3), "   ");
    }

    #[test]
    fn center_reserves_margin_and_leans_right() {
        assert_eq!(center("ab", 7), " ab  ");
        assert_eq!(center("abc", 7), " abc ");
        assert_eq!(width_of(&center("x", 15)), 13);
    }

    #[test]
    fn center_is_idempotent_for_short_text() {
        for text in ["", "a", "(♥)", "\\^/"] {
            let once = center(text, 11);
            assert_eq!(center(&once, 11), once);
        }
    }

    #[test]
    fn overflowing_text_is_not_truncated() {
        assert_eq!(center("abcdefgh", 6), "abcdefgh");
        assert_eq!(left("abcdefgh", 6), "abcdefgh");
        assert_eq!(right("abcdefgh", 6), "abcdefgh");
    }

    #[test]
    fn fill_char_counts_glyphs_not_bytes() {
        assert_eq!(center_with("─────", 9, '─'), "───────");
        assert_eq!(left("K♥", 6), "K♥  ");
        assert_eq!(right("♥K", 6), "  ♥K");
    }
}
