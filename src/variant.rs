//! Layout profiles and their geometry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Named layout profile for a full-size card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Ascii,
    #[default]
    Simple,
    Minimal,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Ascii, Variant::Simple, Variant::Minimal];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Ascii => "ascii",
            Variant::Simple => "simple",
            Variant::Minimal => "minimal",
        }
    }

    /// Built-in geometry for this profile.
    pub fn default_config(self) -> VariantConfig {
        match self {
            Variant::Ascii => VariantConfig {
                width: 15,
                height: 13,
                padding_x: 0,
                pip_columns: Some(PipColumns {
                    left: 2,
                    center: 6,
                    right: 10,
                }),
            },
            Variant::Simple => VariantConfig {
                width: 11,
                height: 9,
                padding_x: 0,
                pip_columns: Some(PipColumns {
                    left: 2,
                    center: 4,
                    right: 6,
                }),
            },
            Variant::Minimal => VariantConfig {
                width: 6,
                height: 5,
                padding_x: 0,
                pip_columns: None,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownVariant(s.to_string()))
    }
}

/// Interior column offsets of the three pip columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipColumns {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

/// Geometry of a card: outer size, horizontal padding and pip columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub padding_x: usize,
    #[serde(default, rename = "pip")]
    pub pip_columns: Option<PipColumns>,
}

impl VariantConfig {
    /// Columns available to pips and art between the two margin columns.
    pub fn interior_width(&self) -> usize {
        self.width.saturating_sub(crate::text::RESERVED_MARGIN)
    }

    /// Rows available to pips and art between the index lines and their
    /// border-adjacent margin lines.
    pub fn interior_height(&self) -> usize {
        self.height.saturating_sub(4)
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
