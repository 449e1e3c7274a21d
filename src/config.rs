//! Render settings loaded from a JSON file.
//!
//! Every field is optional in the file; missing ones take the built-in
//! profile geometry, the original theme and the default back pattern. A
//! variant object only overrides the keys it names, so `{"width": 17}`
//! keeps that variant's height and pip columns. `"pip": null` turns pips off.

use std::fs::OpenOptions;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::art::Theme;
use crate::builder::{CardContentBuilder, DEFAULT_BACK_PATTERN};
use crate::variant::{PipColumns, Variant, VariantConfig};

/// A variant object as written in the file, before defaults are filled in.
#[derive(Debug, Default, Deserialize)]
struct VariantOverride {
    width: Option<usize>,
    height: Option<usize>,
    padding_x: Option<usize>,
    // Outer `None` is an absent key, `Some(None)` an explicit null.
    #[serde(default, rename = "pip", deserialize_with = "present")]
    pip_columns: Option<Option<PipColumns>>,
}

impl VariantOverride {
    fn apply(self, base: VariantConfig) -> VariantConfig {
        VariantConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            padding_x: self.padding_x.unwrap_or(base.padding_x),
            pip_columns: self.pip_columns.unwrap_or(base.pip_columns),
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn merged<'de, D>(deserializer: D, variant: Variant) -> Result<VariantConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(VariantOverride::deserialize(deserializer)?.apply(variant.default_config()))
}

fn ascii_default() -> VariantConfig {
    Variant::Ascii.default_config()
}

fn simple_default() -> VariantConfig {
    Variant::Simple.default_config()
}

fn minimal_default() -> VariantConfig {
    Variant::Minimal.default_config()
}

fn ascii_merged<'de, D: Deserializer<'de>>(deserializer: D) -> Result<VariantConfig, D::Error> {
    merged(deserializer, Variant::Ascii)
}

fn simple_merged<'de, D: Deserializer<'de>>(deserializer: D) -> Result<VariantConfig, D::Error> {
    merged(deserializer, Variant::Simple)
}

fn minimal_merged<'de, D: Deserializer<'de>>(deserializer: D) -> Result<VariantConfig, D::Error> {
    merged(deserializer, Variant::Minimal)
}

fn back_pattern_default() -> String {
    DEFAULT_BACK_PATTERN.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "ascii_default", deserialize_with = "ascii_merged")]
    pub ascii: VariantConfig,
    #[serde(default = "simple_default", deserialize_with = "simple_merged")]
    pub simple: VariantConfig,
    #[serde(default = "minimal_default", deserialize_with = "minimal_merged")]
    pub minimal: VariantConfig,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "back_pattern_default")]
    pub back_pattern: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ascii: ascii_default(),
            simple: simple_default(),
            minimal: minimal_default(),
            theme: Theme::default(),
            back_pattern: back_pattern_default(),
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("failed to serialize config")?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn for_variant(&self, variant: Variant) -> &VariantConfig {
        match variant {
            Variant::Ascii => &self.ascii,
            Variant::Simple => &self.simple,
            Variant::Minimal => &self.minimal,
        }
    }

    pub fn for_variant_mut(&mut self, variant: Variant) -> &mut VariantConfig {
        match variant {
            Variant::Ascii => &mut self.ascii,
            Variant::Simple => &mut self.simple,
            Variant::Minimal => &mut self.minimal,
        }
    }

    /// A builder carrying this config's geometry and theme for `variant`.
    pub fn builder(&self, variant: Variant) -> CardContentBuilder {
        CardContentBuilder::new(variant)
            .with_config(*self.for_variant(variant))
            .with_theme(self.theme)
    }
}
