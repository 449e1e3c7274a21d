//! Render config commands (`cardart config ...`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cardart::RenderConfig;
use clap::{Args, Subcommand};
use tracing::info;

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write the built-in settings to a JSON file for editing.
    Init(ConfigInitArgs),
    /// Print the effective settings, including any `--config` file.
    Show,
}

/// Arguments for `cardart config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Destination file.
    pub path: PathBuf,
    /// Replace the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Execute a config command.
pub fn handle(command: ConfigCommand, config: RenderConfig) -> Result<()> {
    match command {
        ConfigCommand::Init(args) => {
            init(&args.path, args.force)?;
            println!("Wrote default config to {}", args.path.display());
            Ok(())
        }
        ConfigCommand::Show => {
            let json =
                serde_json::to_string_pretty(&config).context("failed to serialize config")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    info!(path = %path.display(), "writing default render config");
    RenderConfig::default().save(path)
}
