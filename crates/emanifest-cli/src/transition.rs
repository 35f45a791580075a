//! # Transition Subcommand
//!
//! Checks whether a manifest may move to a requested status, printing the
//! denial reason when it may not.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Args;

use emanifest_core::ManifestStatus;
use emanifest_state::check_transition;

use crate::load_manifest;

/// Arguments for the transition subcommand.
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Path to the manifest JSON file.
    pub file: PathBuf,

    /// The status to transition to (e.g. "InTransit").
    #[arg(long)]
    pub to: String,
}

/// Run the transition check; returns whether the transition is legal.
pub fn run(args: &TransitionArgs) -> anyhow::Result<bool> {
    let draft = load_manifest(&args.file)?;
    let to = ManifestStatus::from_str(&args.to).context("unknown target status")?;
    let from = draft.effective_status();

    tracing::info!(file = %args.file.display(), %from, %to, "checking transition");

    match check_transition(from, to, &draft) {
        Ok(()) => {
            println!("allowed: {from} -> {to}");
            Ok(true)
        }
        Err(denied) => {
            println!("{denied}");
            Ok(false)
        }
    }
}
