//! Section-based art composition.
//!
//! An art definition is an ordered list of sections. A frame section wraps
//! its lines in a three-part border template whose middle row carries a
//! `{content}` marker; a body section is plain centered lines. Every output
//! line is re-centered to the overall width at the end so frame and body
//! sections line up even when their interior widths differ.

use crate::text::{self, RESERVED_MARGIN};

use super::substitute;

const CONTENT_MARKER: &str = "{content}";

/// Top, middle and bottom rows of a frame. `middle` splits on `{content}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTemplate<'a> {
    pub top: &'a str,
    pub middle: &'a str,
    pub bottom: &'a str,
}

/// Horizontal inset of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
}

impl Padding {
    pub const fn uniform(n: usize) -> Self {
        Self { left: n, right: n }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind<'a> {
    Frame(FrameTemplate<'a>),
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind<'a>,
    pub content: &'a [&'a str],
    pub padding: Padding,
}

/// Render every section and normalize all lines to `width`.
///
/// Lines come out `width - 2` columns wide unless some content overflows.
pub fn render_sections(
    sections: &[Section<'_>],
    width: usize,
    glyph: char,
    replacements: &[(&str, &str)],
) -> Vec<String> {
    sections
        .iter()
        .flat_map(|section| render_section(section, width, glyph, replacements))
        .map(|line| text::center(&line, width))
        .collect()
}

fn render_section(
    section: &Section<'_>,
    width: usize,
    glyph: char,
    replacements: &[(&str, &str)],
) -> Vec<String> {
    let content: Vec<String> = section
        .content
        .iter()
        .map(|line| substitute(line, glyph, replacements))
        .collect();

    match section.kind {
        SectionKind::Frame(frame) => {
            let inset = section.padding.left + section.padding.right;
            let frame_width = width.saturating_sub(RESERVED_MARGIN + inset);
            let middle_width = text::width_of(frame.middle);
            let top = fit_border(&substitute(frame.top, glyph, replacements), middle_width);
            let bottom = fit_border(&substitute(frame.bottom, glyph, replacements), middle_width);
            framed(&content, frame_width, &top, frame.middle, &bottom)
        }
        SectionKind::Body => {
            let body_width = width.saturating_sub(section.padding.left * 2);
            content
                .iter()
                .map(|line| text::center(line, body_width))
                .collect()
        }
    }
}

/// Keep a border's corners and stretch its interior run, using the run's
/// own first glyph as fill, to line up with the middle template.
fn fit_border(border: &str, middle_width: usize) -> String {
    let chars: Vec<char> = border.chars().collect();
    let [first, inner @ .., last] = chars.as_slice() else {
        return border.to_string();
    };
    let run: String = inner.iter().collect();
    let fill = inner.first().copied().unwrap_or(' ');
    let mut out = String::with_capacity(border.len() * 2);
    out.push(*first);
    out.push_str(&text::center_with(
        &run,
        middle_width.saturating_sub(RESERVED_MARGIN),
        fill,
    ));
    out.push(*last);
    out
}

fn framed(content: &[String], width: usize, top: &str, middle: &str, bottom: &str) -> Vec<String> {
    let (left, right) = match middle.split_once(CONTENT_MARKER) {
        Some((l, r)) => (non_empty(l), non_empty(r)),
        None => (non_empty(middle), " "),
    };
    let inner_width = width.saturating_sub(text::width_of(left) + text::width_of(right));

    let mut lines = Vec::with_capacity(content.len() + 2);
    lines.push(text::center(top, width));
    for line in content {
        let boxed = format!("{left}{}{right}", text::center(line, inner_width));
        lines.push(text::center(&boxed, width));
    }
    lines.push(text::center(bottom, width));
    lines
}

fn non_empty(side: &str) -> &str {
    if side.is_empty() { " " } else { side }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: FrameTemplate<'static> = FrameTemplate {
        top: "┌─────┐",
        middle: "│{content}│",
        bottom: "└─────┘",
    };

    #[test]
    fn border_stretches_to_middle_template() {
        assert_eq!(fit_border("┌─────┐", 11), "┌───────┐");
        assert_eq!(fit_border("╔═════╗", 11), "╔═══════╗");
        assert_eq!(fit_border("x", 11), "x");
    }

    #[test]
    fn frame_section_boxes_each_line() {
        let section = Section {
            kind: SectionKind::Frame(BASIC),
            content: &["{core}"],
            padding: Padding::uniform(1),
        };
        let lines = render_sections(&[section], 15, '♣', &[("core", "[+]")]);
        assert_eq!(
            lines,
            vec![
                "  ┌───────┐  ".to_string(),
                "  │  [+]  │  ".to_string(),
                "  └───────┘  ".to_string(),
            ]
        );
    }

    #[test]
    fn body_section_centers_inside_padding() {
        let section = Section {
            kind: SectionKind::Body,
            content: &["│{suit}│"],
            padding: Padding::uniform(2),
        };
        let lines = render_sections(&[section], 15, '♠', &[]);
        assert_eq!(lines, vec!["     │♠│     ".to_string()]);
    }

    #[test]
    fn missing_marker_uses_whole_middle_as_left_edge() {
        let frame = FrameTemplate {
            top: "+---+",
            middle: "|",
            bottom: "+---+",
        };
        let lines = framed(&["x".to_string()], 9, "+---+", frame.middle, "+---+");
        assert_eq!(lines[1], "|  x   ");
    }

    #[test]
    fn all_lines_share_one_width() {
        let sections = [
            Section {
                kind: SectionKind::Frame(BASIC),
                content: &["{eyes}"],
                padding: Padding::uniform(1),
            },
            Section {
                kind: SectionKind::Body,
                content: &["", "{data}", ""],
                padding: Padding::uniform(2),
            },
        ];
        let lines = render_sections(&sections, 15, '♥', &[("eyes", "[0_0]"), ("data", "▀1010▀")]);
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|line| text::width_of(line) == 13));
    }
}
