//! Deck and hand commands (`cardart deck ...`).

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use cardart::{RenderConfig, Variant, Zone, ZoneKind, paired_deck, side_by_side};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::cli::common::{ThemeArg, VariantArg};
use crate::cli::utils::write_output;

/// Arguments for `cardart deck`.
#[derive(Args, Debug)]
pub struct DeckArgs {
    /// Layout profile for the dealt cards.
    #[arg(long, default_value_t = VariantArg::Simple, value_enum)]
    pub variant: VariantArg,
    /// Art theme, overriding the config file.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    /// Seed for a reproducible shuffle.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Shuffle the deck before dealing.
    #[arg(long)]
    pub shuffle: bool,
    /// Cut the deck at this index before dealing.
    #[arg(long)]
    pub cut: Option<usize>,
    /// Cards dealt to each hand.
    #[arg(long, default_value_t = 5)]
    pub deal: usize,
    /// Number of hands.
    #[arg(long, default_value_t = 1)]
    pub hands: usize,
    /// Build a deck of adjacent same-rank pairs instead of suit order.
    #[arg(long)]
    pub paired: bool,
    /// Deal every card face down.
    #[arg(long)]
    pub face_down: bool,
    /// Emit the hands as JSON instead of rendering them.
    #[arg(long)]
    pub json: bool,
    /// Columns between cards in a rendered hand.
    #[arg(long, default_value_t = 1)]
    pub gap: usize,
    /// Output file (`-` for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Execute `cardart deck`.
pub fn handle(args: DeckArgs, mut config: RenderConfig) -> Result<()> {
    if args.hands == 0 {
        return Err(anyhow!("--hands must be at least 1"));
    }
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut deck = if args.paired {
        // Paired decks shuffle whole pairs, so the card-level shuffle is skipped.
        Zone::with_cards(ZoneKind::Deck, paired_deck(&mut rng, args.shuffle))
    } else {
        let mut deck = Zone::standard_deck();
        if args.shuffle {
            deck.shuffle(&mut rng);
        }
        deck
    };
    if let Some(index) = args.cut {
        deck.cut(index);
    }

    let mut hands = vec![Zone::new(ZoneKind::Hand); args.hands];
    let dealt = deck.deal(args.deal, &mut hands);
    info!(dealt, remaining = deck.len(), hands = args.hands, "dealt hands");

    if args.json {
        let json = serde_json::to_string_pretty(&hands).context("failed to serialize hands")?;
        return write_output(args.output.as_deref(), &[json]);
    }

    let variant = Variant::from(args.variant);
    let builder = config.builder(variant);
    let mut lines = Vec::new();
    for (idx, hand) in hands.iter().enumerate() {
        debug!(hand = idx + 1, cards = hand.len(), "rendering hand");
        lines.push(format!("Hand {} ({} cards):", idx + 1, hand.len()));
        let blocks: Vec<Vec<String>> = hand
            .cards
            .iter()
            .map(|card| builder.render(card, !args.face_down, &config.back_pattern))
            .collect();
        lines.extend(side_by_side(&blocks, args.gap));
    }
    lines.push(format!("{} cards left in the deck", deck.len()));
    write_output(args.output.as_deref(), &lines)
}
