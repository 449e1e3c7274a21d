//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cardart::{Corner, CornerSymbol, RenderConfig};
use tracing::debug;

/// Load the render config, or the built-in defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading render config");
            RenderConfig::load(path)
        }
        None => Ok(RenderConfig::default()),
    }
}

/// Persist lines either to a file or stdout when the path is absent or `-`.
pub fn write_output(path: Option<&Path>, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    match path {
        Some(path) if path.as_os_str() != "-" => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        _ => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("failed to write to stdout")?;
            Ok(())
        }
    }
}

/// Read a text file, attaching path context to any error.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Clap-friendly corner symbol parser for strings like `top-left=★`.
pub fn parse_corner_symbol(input: &str) -> Result<CornerSymbol, String> {
    let (corner, symbol) = input
        .split_once('=')
        .ok_or_else(|| "corner symbol must be CORNER=CHAR".to_string())?;
    let position = match corner.trim() {
        "top-left" | "tl" => Corner::TopLeft,
        "top-right" | "tr" => Corner::TopRight,
        "bottom-left" | "bl" => Corner::BottomLeft,
        "bottom-right" | "br" => Corner::BottomRight,
        other => return Err(format!("unknown corner '{other}'")),
    };
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(CornerSymbol { symbol, position }),
        _ => Err("corner symbol must be a single character".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corner_symbols() {
        assert_eq!(
            parse_corner_symbol("tr=◆"),
            Ok(CornerSymbol {
                symbol: '◆',
                position: Corner::TopRight
            })
        );
        assert!(parse_corner_symbol("middle=x").is_err());
        assert!(parse_corner_symbol("top-left=xy").is_err());
        assert!(parse_corner_symbol("top-left").is_err());
    }
}
