//! Built-in art templates and per-suit replacement fragments.

use crate::card::{Rank, Suit};

use super::Theme;

/// Raw template lines for one rank.
pub type Template = &'static [&'static str];

/// `(token, value)` pairs substituted into a theme's templates.
pub type Replacements = &'static [(&'static str, &'static str)];

/// Per-rank templates for one theme. `None` entries fall through to a blank interior.
pub struct ThemeArt {
    pub ace: Option<Template>,
    pub jack: Option<Template>,
    pub queen: Option<Template>,
    pub king: Option<Template>,
}

impl ThemeArt {
    pub fn get(&self, rank: Rank) -> Option<Template> {
        match rank {
            Rank::Ace => self.ace,
            Rank::Jack => self.jack,
            Rank::Queen => self.queen,
            Rank::King => self.king,
            _ => None,
        }
    }
}

static ORIGINAL: ThemeArt = ThemeArt {
    ace: Some(&[
        "{suit}",
        "{suit} {suit}",
        "{suit}{suit}{suit}",
        "{suit} {suit}",
        "{suit}",
    ]),
    jack: Some(&["(^ ^)", "({suit})", "/|\\", "/ \\"]),
    queen: Some(&["(o o)", "({suit})", "\\|/", " | "]),
    king: Some(&["\\^/", "({suit})", "/|\\", "/ \\"]),
};

static ANIMAL: ThemeArt = ThemeArt {
    ace: Some(&["  {suit}  ", " {eyes} ", "{mouth}", " \\|/ ", "  V  "]),
    jack: Some(&[" ({eyes}) ", " ┌{fur}┐ ", " │{suit}│ ", " └{paw}┘ "]),
    queen: Some(&[" /{eyes}\\ ", "╭{fur}╮", "│{suit}│", "╰{paw}╯"]),
    king: Some(&[" ^{eyes}^ ", " ┌{fur}┐ ", " │{suit}│ ", " └{paw}┘ "]),
};

static GEOMETRIC: ThemeArt = ThemeArt {
    ace: Some(&["  ╱╲  ", " ╱ {suit}╲ ", "╱────╲", "‾‾‾‾"]),
    jack: Some(&["┌{outline}┐", "│{filled}│", "├{outline}┤", "└{filled}┘"]),
    queen: Some(&["╭{outline}╮", "│{filled}│", "├{outline}┤", "╰{filled}╯"]),
    king: Some(&["┌─{outline}─┐", "│{filled}│", "├{outline}┤", "└{filled}┘"]),
};

static PIXEL: ThemeArt = ThemeArt {
    ace: Some(&["▀▄▀▄▀", "▄{suit}▄", "▀▄▀▄▀", "▄▀▄▀▄"]),
    jack: Some(&["▄▀{crown}▀▄", "█{face}█", "▀{suit}▀", "█{base}█"]),
    queen: Some(&["▀▄{crown}▄▀", "█{face}█", "▄{suit}▄", "▀{base}▀"]),
    king: Some(&["▄▀{crown}▀▄", "█{face}█", "▀{suit}▀", "█{base}█"]),
};

static MEDIEVAL: ThemeArt = ThemeArt {
    ace: Some(&["╔═╤═╗", "║{deco}║", "║{suit}║", "║{deco}║", "╚═╧═╝"]),
    jack: Some(&["╔╤═╤╗", "║{crown}║", "║{suit}║", "║{class}║", "╚{base}╝"]),
    queen: Some(&["╔╤═╤╗", "╠═╪═╣", "║{suit}║", "║{class}║", "╚{base}╝"]),
    king: Some(&["╔═╦═╗", "║{crown}║", "║{suit}║", "║{class}║", "╚{base}╝"]),
};

// Robot art is section-based; see `robot.rs`.
static ROBOT: ThemeArt = ThemeArt {
    ace: None,
    jack: None,
    queen: None,
    king: None,
};

/// Simple-variant art: the ace is centered, court cards hug the right edge.
pub static SIMPLE: ThemeArt = ThemeArt {
    ace: Some(&["", "", "{suit}", "", ""]),
    jack: Some(&["ww", "{)", "{suit}   %", "%", "__%%["]),
    queen: Some(&["ww", "{(", "{suit}  %%", "%%%", "_%%%O"]),
    king: Some(&["WW", "{)", "{suit}  %%", "%%%", "_%%%>"]),
};

pub fn theme_art(theme: Theme) -> &'static ThemeArt {
    match theme {
        Theme::Original => &ORIGINAL,
        Theme::Geometric => &GEOMETRIC,
        Theme::Animal => &ANIMAL,
        Theme::Robot => &ROBOT,
        Theme::Pixel => &PIXEL,
        Theme::Medieval => &MEDIEVAL,
    }
}

macro_rules! by_suit {
    ($suit:expr; $hearts:expr, $diamonds:expr, $clubs:expr, $spades:expr $(,)?) => {
        match $suit {
            Suit::Hearts => $hearts,
            Suit::Diamonds => $diamonds,
            Suit::Clubs => $clubs,
            Suit::Spades => $spades,
        }
    };
}

/// Replacement fragments a theme uses for `suit`. Empty for themes that
/// only substitute the suit glyph.
pub fn replacements(theme: Theme, suit: Suit) -> Replacements {
    match theme {
        Theme::Original => &[],
        Theme::Geometric => by_suit!(suit;
            &[("outline", "◇"), ("filled", "◆")],
            &[("outline", "○"), ("filled", "●")],
            &[("outline", "□"), ("filled", "■")],
            &[("outline", "▲"), ("filled", "▼")],
        ),
        Theme::Animal => by_suit!(suit;
            &[("eyes", "owo"), ("mouth", "(=w=)"), ("fur", "=^-^="), ("paw", "(uwu)")],
            &[("eyes", ">v<"), ("mouth", "(>v<)"), ("fur", "~^v^~"), ("paw", "{>v<}")],
            &[("eyes", "ÒwÓ"), ("mouth", "(^w^)"), ("fur", "~òwó~"), ("paw", "[owo]")],
            &[("eyes", "◇w◇"), ("mouth", "{◇w◇}"), ("fur", "=◇w◇="), ("paw", "<◇w◇>")],
        ),
        Theme::Robot => by_suit!(suit;
            &[("eyes", "[0_0]"), ("data", "▀1010▀"), ("circuit", "╠═╣"), ("core", "=|=")],
            &[("eyes", "[<|>]"), ("data", "▀0101▀"), ("circuit", "╠<>╣"), ("core", "<+>")],
            &[("eyes", "[+_+]"), ("data", "▀1100▀"), ("circuit", "╠[]╣"), ("core", "[+]")],
            &[("eyes", "[^_^]"), ("data", "▀0011▀"), ("circuit", "╠/\\╣"), ("core", "/|\\")],
        ),
        Theme::Pixel => by_suit!(suit;
            &[("crown", "♥"), ("face", "▀▄▀"), ("base", "▄▀▄")],
            &[("crown", "♦"), ("face", "▄▀▄"), ("base", "▀▄▀")],
            &[("crown", "♣"), ("face", "▀█▀"), ("base", "█▀█")],
            &[("crown", "♠"), ("face", "█▄█"), ("base", "▀█▀")],
        ),
        Theme::Medieval => by_suit!(suit;
            &[("class", ">=<"), ("crown", "\\^/"), ("deco", ">=<"), ("base", "/=\\")],
            &[("class", "*^*"), ("crown", "/|\\"), ("deco", "*~*"), ("base", "\\|/")],
            &[("class", "(+)"), ("crown", "{o}"), ("deco", "(~)"), ("base", "{-}")],
            &[("class", "/-\\"), ("crown", "[^]"), ("deco", "/|\\"), ("base", "\\-/")],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<&str> {
        line.split('{')
            .skip(1)
            .filter_map(|chunk| chunk.split_once('}').map(|(name, _)| name))
            .collect()
    }

    #[test]
    fn every_template_token_has_a_replacement() {
        for theme in Theme::ALL {
            for rank in [Rank::Ace, Rank::Jack, Rank::Queen, Rank::King] {
                let Some(template) = theme_art(theme).get(rank) else {
                    continue;
                };
                for suit in Suit::ALL {
                    let table = replacements(theme, suit);
                    for line in template {
                        for token in tokens(line) {
                            assert!(
                                token == "suit" || table.iter().any(|(name, _)| *name == token),
                                "{theme} {rank} {suit}: missing '{token}'"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn only_robot_lacks_line_templates() {
        for theme in Theme::ALL {
            let has_king = theme_art(theme).get(Rank::King).is_some();
            assert_eq!(has_king, theme != Theme::Robot, "{theme}");
        }
    }

    #[test]
    fn numerals_have_no_art() {
        assert!(ORIGINAL.get(Rank::Seven).is_none());
        assert!(SIMPLE.get(Rank::Joker).is_none());
    }
}
