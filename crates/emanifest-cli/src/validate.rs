//! # Validate Subcommand
//!
//! Runs the full field validation pass over a draft manifest file and
//! prints every failure, one per line.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use emanifest_rules::{validate, ValidationResult};

use crate::{load_manifest, reference_date};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the manifest JSON file.
    pub file: PathBuf,

    /// Reference date for temporal rules (defaults to today).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Run validation; returns whether the draft was valid.
pub fn run(args: &ValidateArgs) -> anyhow::Result<bool> {
    let draft = load_manifest(&args.file)?;
    let today = reference_date(args.date);

    tracing::info!(file = %args.file.display(), %today, "validating manifest");

    match validate(&draft, today) {
        ValidationResult::Valid => {
            println!("valid");
            Ok(true)
        }
        result => {
            println!(
                "{} validation failure(s):\n{result}",
                result.failures().len()
            );
            Ok(false)
        }
    }
}
