//! Full-size card rendering (`cardart render ...`).

use std::path::PathBuf;

use anyhow::Result;
use cardart::{Rank, RenderConfig, Suit, Variant};
use clap::Args;
use tracing::info;

use crate::cli::common::{ThemeArg, VariantArg};
use crate::cli::utils::write_output;

/// Args for `cardart render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Rank: 2-10, J, Q, K or A.
    pub rank: Rank,
    /// Suit: a name, its initial or the glyph.
    pub suit: Suit,
    /// Layout profile.
    #[arg(long, default_value_t = VariantArg::Simple, value_enum)]
    pub variant: VariantArg,
    /// Art theme, overriding the config file.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    /// Show the back instead of the face.
    #[arg(long)]
    pub face_down: bool,
    /// Override the card width.
    #[arg(long)]
    pub width: Option<usize>,
    /// Override the card height.
    #[arg(long)]
    pub height: Option<usize>,
    /// Override the horizontal art padding.
    #[arg(long)]
    pub padding_x: Option<usize>,
    /// Output file (`-` for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Execute `cardart render`.
pub fn handle(args: RenderArgs, mut config: RenderConfig) -> Result<()> {
    let variant = Variant::from(args.variant);
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }
    let geometry = config.for_variant_mut(variant);
    if let Some(width) = args.width {
        geometry.width = width;
    }
    if let Some(height) = args.height {
        geometry.height = height;
    }
    if let Some(padding_x) = args.padding_x {
        geometry.padding_x = padding_x;
    }

    let builder = config.builder(variant);
    info!(%variant, theme = %config.theme, rank = %args.rank, suit = %args.suit, "rendering card");
    let lines = if args.face_down {
        builder.back_lines(&config.back_pattern)
    } else {
        builder.lines(args.rank, args.suit)
    };
    write_output(args.output.as_deref(), &lines)
}
