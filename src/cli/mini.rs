//! Compact card rendering (`cardart mini ...`).

use anyhow::Result;
use cardart::{Rank, Suit, render_mini};
use clap::Args;

use crate::cli::common::ProfileArg;
use crate::cli::utils::write_output;

/// Args for `cardart mini`.
#[derive(Args, Debug)]
pub struct MiniArgs {
    pub rank: Rank,
    pub suit: Suit,
    /// Compact profile: mini (3x3) or micro (2x2).
    #[arg(long, default_value_t = ProfileArg::Mini, value_enum)]
    pub profile: ProfileArg,
    /// Show the back instead of the face.
    #[arg(long)]
    pub face_down: bool,
}

/// Execute `cardart mini`.
pub fn handle(args: MiniArgs) -> Result<()> {
    let lines = render_mini(args.rank, args.suit, args.profile.into(), !args.face_down);
    write_output(None, &lines)
}
