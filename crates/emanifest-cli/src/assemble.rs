//! # Assemble Subcommand
//!
//! Runs the full submission contract over a draft manifest file. On
//! success the assembled document is printed as JSON; on rejection the
//! failure list goes to stderr.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;

use emanifest_assembly::{assemble, AssemblyError};
use emanifest_core::ManifestStatus;

use crate::{load_manifest, reference_date};

/// Arguments for the assemble subcommand.
#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Path to the manifest JSON file.
    pub file: PathBuf,

    /// Reference date for temporal rules (defaults to today).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Status to transition to as part of assembly (e.g. "Scheduled").
    #[arg(long)]
    pub status: Option<String>,
}

/// Run assembly; returns whether a submittable document was produced.
pub fn run(args: &AssembleArgs) -> anyhow::Result<bool> {
    let draft = load_manifest(&args.file)?;
    let today = reference_date(args.date);
    let requested_status = args
        .status
        .as_deref()
        .map(ManifestStatus::from_str)
        .transpose()
        .context("unknown requested status")?;

    tracing::info!(file = %args.file.display(), ?requested_status, "assembling manifest");

    match assemble(&draft, today, requested_status) {
        Ok(submittable) => {
            println!("{}", serde_json::to_string_pretty(&submittable)?);
            Ok(true)
        }
        Err(AssemblyError::Invalid(result)) => {
            eprintln!(
                "manifest rejected with {} failure(s):\n{result}",
                result.failures().len()
            );
            Ok(false)
        }
        // Structural violations mean the input document was malformed at
        // the integration level; surface them as hard errors.
        Err(err @ AssemblyError::Structural(_)) => Err(err.into()),
    }
}
