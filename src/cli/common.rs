//! Shared clap helper types for CLI commands.

use cardart::{CardSize, MiniProfile, Theme, Variant};
use clap::ValueEnum;

/// Layout profiles accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum VariantArg {
    Ascii,
    Simple,
    Minimal,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Variant {
        match value {
            VariantArg::Ascii => Variant::Ascii,
            VariantArg::Simple => Variant::Simple,
            VariantArg::Minimal => Variant::Minimal,
        }
    }
}

/// Art themes for the ascii variant.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ThemeArg {
    Original,
    Geometric,
    Animal,
    Robot,
    Pixel,
    Medieval,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Theme {
        match value {
            ThemeArg::Original => Theme::Original,
            ThemeArg::Geometric => Theme::Geometric,
            ThemeArg::Animal => Theme::Animal,
            ThemeArg::Robot => Theme::Robot,
            ThemeArg::Pixel => Theme::Pixel,
            ThemeArg::Medieval => Theme::Medieval,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ProfileArg {
    Mini,
    Micro,
}

impl From<ProfileArg> for MiniProfile {
    fn from(value: ProfileArg) -> MiniProfile {
        match value {
            ProfileArg::Mini => MiniProfile::Mini,
            ProfileArg::Micro => MiniProfile::Micro,
        }
    }
}

/// Custom card size presets.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for CardSize {
    fn from(value: SizeArg) -> CardSize {
        match value {
            SizeArg::Small => CardSize::Small,
            SizeArg::Medium => CardSize::Medium,
            SizeArg::Large => CardSize::Large,
        }
    }
}
