//! Command-line interface wiring for the `cardart` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules, one per command family.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod config;
pub mod custom;
pub mod deck;
pub mod mini;
pub mod render;
pub mod theme;
pub mod unicode;
pub mod utils;

/// Parsed CLI entrypoint for the `cardart` binary.
#[derive(Parser, Debug)]
#[command(name = "cardart", version, about = "Render playing cards as terminal text")]
pub struct Cli {
    /// JSON render config (geometry per variant, theme, back pattern).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one card with a full-size layout.
    Render(render::RenderArgs),
    /// Render one compact mini or micro card.
    Mini(mini::MiniArgs),
    /// Print the single Unicode glyph for a card.
    Unicode(unicode::UnicodeArgs),
    /// Build, shuffle and deal a deck, then show the hands.
    Deck(deck::DeckArgs),
    /// Inspect the built-in art themes.
    #[command(subcommand)]
    Theme(theme::ThemeCommand),
    /// Render a free-form custom card.
    Custom(custom::CustomArgs),
    /// Create or inspect the JSON render config.
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let config = utils::load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Render(args) => render::handle(args, config),
        Command::Mini(args) => mini::handle(args),
        Command::Unicode(args) => unicode::handle(args),
        Command::Deck(args) => deck::handle(args, config),
        Command::Theme(cmd) => theme::handle(cmd, config),
        Command::Custom(args) => custom::handle(args, config),
        Command::Config(cmd) => config::handle(cmd, config),
    }
}
