//! Single-glyph output (`cardart unicode ...`).

use anyhow::{Result, anyhow};
use cardart::{CARD_BACK, Rank, Suit, card_glyph};
use clap::Args;

use crate::cli::utils::write_output;

/// Args for `cardart unicode`.
#[derive(Args, Debug)]
pub struct UnicodeArgs {
    /// Rank, including JOKER. Omit with `--all`.
    pub rank: Option<Rank>,
    /// Suit. Omit with `--all`.
    pub suit: Option<Suit>,
    /// Show the card back.
    #[arg(long)]
    pub face_down: bool,
    /// Print every standard card, one suit per line.
    #[arg(long, conflicts_with_all = ["rank", "suit"])]
    pub all: bool,
}

/// Execute `cardart unicode`.
pub fn handle(args: UnicodeArgs) -> Result<()> {
    if args.all {
        let lines: Vec<String> = Suit::ALL
            .iter()
            .map(|&suit| {
                Rank::STANDARD
                    .iter()
                    .map(|&rank| card_glyph(suit, rank).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        return write_output(None, &lines);
    }

    let (Some(rank), Some(suit)) = (args.rank, args.suit) else {
        return Err(anyhow!("a rank and a suit are required unless --all is given"));
    };
    let glyph = if args.face_down {
        CARD_BACK
    } else {
        card_glyph(suit, rank)
    };
    write_output(None, &[glyph.to_string()])
}
