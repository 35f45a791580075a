//! # emanifest-cli — e-Manifest Command-Line Interface
//!
//! Operator tooling over the document core: read a manifest JSON file,
//! validate it, assemble it for submission, or check a lifecycle
//! transition.
//!
//! ## Subcommands
//!
//! - `validate` — run the full field validation pass over a draft
//! - `assemble` — produce a submittable document or the failure list
//! - `transition` — check a requested status change against the table
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates — no rules here.
//! - File and JSON errors pass through with context; validation failures
//!   are reported, not wrapped, and drive the exit code.

pub mod assemble;
pub mod transition;
pub mod validate;

use std::path::Path;

use anyhow::Context;
use emanifest_model::Manifest;

/// Load a draft manifest from a JSON file.
pub fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read manifest file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid manifest JSON in {}", path.display()))
}

/// The reference date for temporal rules: an explicit `--date` override,
/// or the process-local calendar date. The core itself never reads a
/// clock; the CLI boundary is where "today" gets decided.
pub fn reference_date(override_date: Option<chrono::NaiveDate>) -> chrono::NaiveDate {
    override_date.unwrap_or_else(|| chrono::Utc::now().date_naive())
}
