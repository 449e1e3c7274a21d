//! Special-card art for aces and court cards.
//!
//! Line-template themes look up a list of raw lines per rank, substitute
//! `{token}` placeholders and center each line. The robot theme is built
//! from framed sections instead (see [`sections`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::card::{Rank, Suit};
use crate::error::CardError;
use crate::text;
use crate::variant::Variant;

pub mod robot;
pub mod sections;
pub mod themes;

pub use sections::{FrameTemplate, Padding, Section, SectionKind, render_sections};
pub use themes::{Replacements, Template, replacements};

/// Token always bound to the suit glyph.
pub const SUIT_TOKEN: &str = "suit";

/// Art style for the ascii variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Original,
    Geometric,
    Animal,
    Robot,
    Pixel,
    Medieval,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Original,
        Theme::Geometric,
        Theme::Animal,
        Theme::Robot,
        Theme::Pixel,
        Theme::Medieval,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Original => "original",
            Theme::Geometric => "geometric",
            Theme::Animal => "animal",
            Theme::Robot => "robot",
            Theme::Pixel => "pixel",
            Theme::Medieval => "medieval",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Theme::Original => "Stick-figure court cards and a diamond of pips for the ace.",
            Theme::Geometric => "Box-drawn shapes; each suit has its own outline/filled symbol.",
            Theme::Animal => "Big cats, birds, forest animals and dragons by suit.",
            Theme::Robot => "Framed robot heads composed from border sections.",
            Theme::Pixel => "Block-element pixel art.",
            Theme::Medieval => "Castle and heraldry motifs in double-line box drawing.",
        }
    }

    /// Whether this theme renders through framed sections.
    pub fn is_sectioned(self) -> bool {
        matches!(self, Theme::Robot)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownTheme(s.to_string()))
    }
}

/// Replace every `{token}` in `line` in a single pass.
///
/// `{suit}` becomes `glyph`; other tokens are looked up in `replacements`.
/// Unknown tokens stay in the output verbatim, and substituted values are
/// never rescanned.
pub fn substitute(line: &str, glyph: char, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if !after[..end].contains('{') => {
                let name = &after[..end];
                if name == SUIT_TOKEN {
                    out.push(glyph);
                } else if let Some((_, value)) = replacements.iter().find(|(key, _)| *key == name)
                {
                    out.push_str(value);
                } else {
                    trace!(token = name, "leaving unresolved token");
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Art lines for a special rank, each aligned to a `width - 2` run.
///
/// Returns an empty list when the variant, theme or rank has no art, which
/// callers render as a blank interior.
pub fn render_special(
    variant: Variant,
    theme: Theme,
    rank: Rank,
    suit: Suit,
    width: usize,
) -> Vec<String> {
    let glyph = suit.glyph();
    match variant {
        Variant::Ascii if theme.is_sectioned() => match robot::sections(rank) {
            Some(list) => render_sections(list, width, glyph, replacements(theme, suit)),
            None => {
                debug!(%theme, %rank, "no sectioned art for rank");
                Vec::new()
            }
        },
        Variant::Ascii => match themes::theme_art(theme).get(rank) {
            Some(template) => render_template(
                template,
                glyph,
                replacements(theme, suit),
                text::Alignment::Center,
                width,
            ),
            None => {
                debug!(%theme, %rank, "no template art for rank");
                Vec::new()
            }
        },
        Variant::Simple => {
            let alignment = if rank == Rank::Ace {
                text::Alignment::Center
            } else {
                text::Alignment::Right
            };
            themes::SIMPLE
                .get(rank)
                .map(|template| render_template(template, glyph, &[], alignment, width))
                .unwrap_or_default()
        }
        Variant::Minimal => Vec::new(),
    }
}

/// Substitute and align each line of a raw template.
pub fn render_template(
    template: &[&str],
    glyph: char,
    replacements: &[(&str, &str)],
    alignment: text::Alignment,
    width: usize,
) -> Vec<String> {
    template
        .iter()
        .map(|line| text::align(&substitute(line, glyph, replacements), width, alignment))
        .collect()
}
