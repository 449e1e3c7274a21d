//! Robot theme: court cards and ace built from framed sections.

use crate::card::Rank;

use super::sections::{FrameTemplate, Padding, Section, SectionKind};

const BASIC: FrameTemplate<'static> = FrameTemplate {
    top: "┌─────┐",
    middle: "│{content}│",
    bottom: "└─────┘",
};

const ADVANCED: FrameTemplate<'static> = FrameTemplate {
    top: "╔═════╗",
    middle: "║{content}║",
    bottom: "╚═════╝",
};

const ROUNDED: FrameTemplate<'static> = FrameTemplate {
    top: "╭─────╮",
    middle: "│{content}│",
    bottom: "╰─────╯",
};

const fn frame(template: FrameTemplate<'static>, content: &'static [&'static str]) -> Section<'static> {
    Section {
        kind: SectionKind::Frame(template),
        content,
        padding: Padding::uniform(1),
    }
}

const fn body(content: &'static [&'static str], padding: usize) -> Section<'static> {
    Section {
        kind: SectionKind::Body,
        content,
        padding: Padding::uniform(padding),
    }
}

static ACE: [Section<'static>; 3] = [
    frame(BASIC, &["{suit}"]),
    body(&["", "{data}", ""], 2),
    frame(BASIC, &["{core}"]),
];

static KING: [Section<'static>; 3] = [
    frame(ADVANCED, &["{eyes}"]),
    body(&["╠{circuit}╣", "║{suit}║", "╠{data}╣"], 1),
    frame(ADVANCED, &["{core}"]),
];

static QUEEN: [Section<'static>; 3] = [
    frame(ROUNDED, &["{eyes}"]),
    body(&["├{circuit}┤", "│{suit}│", "├{data}┤"], 0),
    frame(ROUNDED, &["{core}"]),
];

static JACK: [Section<'static>; 3] = [
    frame(BASIC, &["{eyes}"]),
    body(&["├{circuit}┤", "│{suit}│", "├{data}┤"], 2),
    frame(BASIC, &["{core}"]),
];

/// Section list for `rank`, if the robot theme draws it.
pub fn sections(rank: Rank) -> Option<&'static [Section<'static>]> {
    match rank {
        Rank::Ace => Some(&ACE),
        Rank::King => Some(&KING),
        Rank::Queen => Some(&QUEEN),
        Rank::Jack => Some(&JACK),
        _ => None,
    }
}
