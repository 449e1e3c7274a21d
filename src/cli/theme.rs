//! Theme discovery commands (`cardart theme ...`).

use anyhow::Result;
use cardart::{Rank, RenderConfig, Suit, Theme, Variant, side_by_side};
use clap::{Args, Subcommand};

use crate::cli::common::ThemeArg;
use crate::cli::utils::write_output;

/// Theme subcommands.
#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// List all built-in themes.
    List,
    /// Show the ace and court cards of one theme.
    Show(ThemeShowArgs),
}

/// Arguments for `cardart theme show`.
#[derive(Args, Debug)]
pub struct ThemeShowArgs {
    /// Theme to display.
    #[arg(value_enum)]
    pub name: ThemeArg,
    /// Suit to draw the cards in.
    #[arg(long, default_value = "spades")]
    pub suit: Suit,
}

/// Execute a theme command.
pub fn handle(command: ThemeCommand, config: RenderConfig) -> Result<()> {
    match command {
        ThemeCommand::List => list(),
        ThemeCommand::Show(args) => show(args, config),
    }
}

fn list() -> Result<()> {
    println!("Available themes:");
    for theme in Theme::ALL {
        println!("  - {}: {}", theme, theme.description());
    }
    Ok(())
}

fn show(args: ThemeShowArgs, mut config: RenderConfig) -> Result<()> {
    config.theme = args.name.into();
    let builder = config.builder(Variant::Ascii);
    let cards: Vec<Vec<String>> = [Rank::Ace, Rank::Jack, Rank::Queen, Rank::King]
        .into_iter()
        .map(|rank| builder.lines(rank, args.suit))
        .collect();
    println!("Theme: {} ({})", config.theme, args.suit);
    write_output(None, &side_by_side(&cards, 2))
}
