//! Custom card rendering (`cardart custom ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use cardart::{CardContentBuilder, CornerSymbol, CustomCard, RenderConfig, Variant};
use clap::Args;

use crate::cli::common::SizeArg;
use crate::cli::utils::{parse_corner_symbol, read_file, write_output};

/// Args for `cardart custom`.
#[derive(Args, Debug)]
pub struct CustomArgs {
    /// Load the card from a JSON file; other flags override its fields.
    #[arg(long)]
    pub from: Option<PathBuf>,
    /// Title painted over the first row.
    #[arg(long)]
    pub title: Option<String>,
    /// Description, word-wrapped from the third row.
    #[arg(long)]
    pub description: Option<String>,
    /// Text file whose lines are painted as art.
    #[arg(long)]
    pub art_file: Option<PathBuf>,
    /// Size preset.
    #[arg(long, value_enum)]
    pub size: Option<SizeArg>,
    /// Explicit width, overriding the size preset.
    #[arg(long)]
    pub width: Option<usize>,
    /// Explicit height, overriding the size preset.
    #[arg(long)]
    pub height: Option<usize>,
    /// Corner marks such as `top-left=★`; repeatable.
    #[arg(long = "symbol", value_parser = parse_corner_symbol)]
    pub symbols: Vec<CornerSymbol>,
    /// Show the back instead of the face.
    #[arg(long)]
    pub face_down: bool,
    /// Output file (`-` for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Execute `cardart custom`.
pub fn handle(args: CustomArgs, config: RenderConfig) -> Result<()> {
    let mut card = match &args.from {
        Some(path) => serde_json::from_str::<CustomCard>(&read_file(path)?)
            .with_context(|| format!("failed to parse custom card {}", path.display()))?,
        None => CustomCard::default(),
    };
    if let Some(title) = args.title {
        card.title = Some(title);
    }
    if let Some(description) = args.description {
        card.description = Some(description);
    }
    if let Some(path) = &args.art_file {
        card.art = read_file(path)?.lines().map(str::to_string).collect();
    }
    if let Some(size) = args.size {
        card.size = size.into();
    }
    if args.width.is_some() {
        card.width = args.width;
    }
    if args.height.is_some() {
        card.height = args.height;
    }
    card.symbols.extend(args.symbols);

    let lines = CardContentBuilder::new(Variant::default()).render(
        &cardart::Card::Custom(card),
        !args.face_down,
        &config.back_pattern,
    );
    write_output(args.output.as_deref(), &lines)
}
