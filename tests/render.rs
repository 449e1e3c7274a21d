use cardart::{
    CardContentBuilder, DEFAULT_BACK_PATTERN, Rank, RenderConfig, Suit, Theme, Variant,
    VariantConfig, build_card, text,
};
use pretty_assertions::assert_eq;

const FRAMED: [Variant; 2] = [Variant::Ascii, Variant::Simple];

fn glyphs(lines: &[String], glyph: char) -> usize {
    lines
        .iter()
        .flat_map(|line| line.chars())
        .filter(|&c| c == glyph)
        .count()
}

fn all_ranks() -> impl Iterator<Item = Rank> {
    Rank::STANDARD.into_iter().chain([Rank::Joker])
}

fn assert_block(lines: &[String], config: &VariantConfig, label: &str) {
    assert_eq!(lines.len(), config.height, "{label}: height");
    for (idx, line) in lines.iter().enumerate() {
        assert_eq!(text::width_of(line), config.width, "{label}: line {idx} {line:?}");
    }
}

#[test]
fn every_combination_keeps_its_dimensions() {
    for variant in FRAMED {
        for config in [
            variant.default_config(),
            variant.default_config().with_size(15, 12),
            variant.default_config().with_size(9, 7),
        ] {
            for theme in Theme::ALL {
                let builder = CardContentBuilder::new(variant)
                    .with_config(config)
                    .with_theme(theme);
                for rank in all_ranks() {
                    for suit in Suit::ALL {
                        let label = format!("{variant} {theme} {rank}{} {config:?}", suit.glyph());
                        assert_block(&builder.lines(rank, suit), &config, &label);
                    }
                }
            }
        }
    }
}

#[test]
fn face_up_cards_show_their_suit() {
    for variant in Variant::ALL {
        for theme in Theme::ALL {
            let builder = CardContentBuilder::new(variant).with_theme(theme);
            for rank in Rank::STANDARD {
                for suit in Suit::ALL {
                    let lines = builder.lines(rank, suit);
                    assert!(
                        glyphs(&lines, suit.glyph()) > 0,
                        "{variant} {theme} {rank} {suit}"
                    );
                }
            }
        }
    }
}

#[test]
fn card_backs_hide_the_suit() {
    let config = RenderConfig::default();
    for variant in Variant::ALL {
        let builder = config.builder(variant);
        let face = builder.lines(Rank::Seven, Suit::Hearts);
        let back = builder.back_lines(DEFAULT_BACK_PATTERN);
        assert_eq!(back.len(), face.len(), "{variant}");
        for suit in Suit::ALL {
            assert_eq!(glyphs(&back, suit.glyph()), 0, "{variant} {suit}");
        }
        assert!(glyphs(&back, '░') > 0);
    }
}

#[test]
fn pip_count_matches_rank() {
    for variant in FRAMED {
        let builder = CardContentBuilder::new(variant);
        let height = variant.default_config().height;
        for rank in Rank::STANDARD {
            let Some(expected) = rank.pip_count() else {
                continue;
            };
            for suit in Suit::ALL {
                let lines = builder.lines(rank, suit);
                let interior = &lines[1..height - 1];
                assert_eq!(glyphs(interior, suit.glyph()), expected, "{variant} {rank} {suit}");
            }
        }
    }
}

#[test]
fn simple_six_of_clubs() {
    let config = Variant::Simple.default_config();
    let card = build_card(Rank::Six, Suit::Clubs, Variant::Simple, &config, Theme::Original);
    let lines: Vec<String> = card.lines().map(str::to_string).collect();
    assert_block(&lines, &config, "6♣");
    assert!(lines[0].starts_with('6'));
    assert!(lines[8].ends_with('6'));
    assert_eq!(glyphs(&lines, '♣'), 6);
}

#[test]
fn minimal_ace_of_spades() {
    let config = Variant::Minimal.default_config();
    let card = build_card(Rank::Ace, Suit::Spades, Variant::Minimal, &config, Theme::Original);
    assert_eq!(card, "    \n A♠ ");
}

#[test]
fn ascii_king_of_hearts() {
    let config = Variant::Ascii.default_config().with_size(15, 12);
    let card = build_card(Rank::King, Suit::Hearts, Variant::Ascii, &config, Theme::Original);
    let lines: Vec<&str> = card.lines().collect();
    assert_eq!(lines.len(), 12);
    let art: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(art, vec!["K♥", "\\^/", "(♥)", "/|\\", "/ \\", "♥K"]);

    // Same number of blank rows above and below the art.
    let first = lines.iter().position(|l| l.contains("\\^/")).unwrap_or(0);
    let last = lines.iter().position(|l| l.contains("/ \\")).unwrap_or(0);
    assert_eq!(first - 1, lines.len() - 2 - last);
}

#[test]
fn original_ace_has_no_leftover_tokens() {
    for variant in FRAMED {
        let config = variant.default_config();
        let card = build_card(Rank::Ace, Suit::Clubs, variant, &config, Theme::Original);
        assert!(!card.contains('{') && !card.contains('}'), "{variant}:\n{card}");
    }
}

#[test]
fn robot_jack_is_drawn_in_the_band() {
    let builder = CardContentBuilder::new(Variant::Ascii).with_theme(Theme::Robot);
    let lines = builder.lines(Rank::Jack, Suit::Clubs);
    assert_eq!(lines[0], "J♣             ");
    assert_eq!(lines[2], "   ┌───────┐   ");
    assert_eq!(lines[3], "   │ [+_+] │   ");
    assert_eq!(lines[6], "      │♣│      ");
    assert_eq!(lines[12], "             ♣J");
}

#[test]
fn padding_narrows_the_art() {
    let config = VariantConfig {
        padding_x: 2,
        ..Variant::Ascii.default_config()
    };
    let lines = CardContentBuilder::new(Variant::Ascii)
        .with_config(config)
        .lines(Rank::Queen, Suit::Diamonds);
    assert_block(&lines, &config, "padded Q♦");
    let art_row = lines.iter().position(|l| l.contains("(o o)")).unwrap_or(0);
    assert_eq!(lines[art_row], "     (o o)     ");
}
