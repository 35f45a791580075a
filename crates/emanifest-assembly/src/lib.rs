//! # emanifest-assembly — The Submission Seam
//!
//! The single entry point through which external collaborators (UI,
//! persistence, print/document generation) must pass a manifest. No
//! partial or unvalidated document crosses this boundary:
//! [`SubmittableManifest`] can only be produced by [`assemble`], and only
//! from a draft that survives the structural checks, the full field
//! validation pass, and — when a status change is requested — the
//! lifecycle transition table.
//!
//! ## Error Split
//!
//! Field failures and transition denials are expected, frequent outcomes:
//! they come back as an accumulated, field-scoped list the user can act
//! on ([`AssemblyError::Invalid`]). Structural invariant violations —
//! a flag flipped without its record — indicate the *caller* assembled a
//! malformed draft; they are hard failures ([`AssemblyError::Structural`])
//! because no further validation of such a document can be trusted.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use emanifest_core::ManifestStatus;
use emanifest_model::Manifest;
use emanifest_rules::{validate, ValidationFailure, ValidationResult};
use emanifest_state::check_transition;

// ─── Errors ──────────────────────────────────────────────────────────

/// Why a draft could not be assembled.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Recoverable: the accumulated field failures (including a denied
    /// status transition, reported against the `status` field path).
    #[error("manifest failed validation with {count} failure(s)", count = .0.failures().len())]
    Invalid(ValidationResult),

    /// Hard failure: a presence-coupling invariant is broken at the
    /// entity-model level. The surrounding application built a malformed
    /// draft; this is not user-correctable through field edits.
    #[error("structural invariant violated: {0}")]
    Structural(String),
}

// ─── Submittable Manifest ────────────────────────────────────────────

/// A manifest that has passed full assembly.
///
/// The inner document is reachable only read-only (or by consuming the
/// wrapper); there is no way to construct one around an unvalidated
/// draft, and deliberately no `Deserialize` — a document arriving off the
/// wire is a draft until it passes [`assemble`] again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmittableManifest(Manifest);

impl SubmittableManifest {
    /// Read access to the validated document.
    pub fn manifest(&self) -> &Manifest {
        &self.0
    }

    /// Consume the wrapper, yielding the document for the persistence or
    /// print collaborator.
    pub fn into_inner(self) -> Manifest {
        self.0
    }
}

// ─── Assembly ────────────────────────────────────────────────────────

/// Assemble a draft into a submittable manifest.
///
/// Runs, in order: structural invariant checks, the full field validation
/// pass, submittable completeness (at least one waste line), and — when
/// `requested_status` is given — the transition table from the draft's
/// effective status. The returned document has the requested status
/// applied and its derived carry-over flag refreshed.
///
/// `today` is the reference date for the temporal rules.
///
/// # Errors
///
/// [`AssemblyError::Structural`] for caller-level invariant breaks,
/// [`AssemblyError::Invalid`] with the accumulated failure list for
/// everything user-correctable.
pub fn assemble(
    draft: &Manifest,
    today: NaiveDate,
    requested_status: Option<ManifestStatus>,
) -> Result<SubmittableManifest, AssemblyError> {
    check_structure(draft)?;

    let mut failures = validate(draft, today).into_failures();

    if draft.wastes.is_empty() {
        failures.push(ValidationFailure::new(
            "wastes",
            "at least one waste line is required",
        ));
    }

    if let Some(to) = requested_status {
        let from = draft.effective_status();
        if let Err(denied) = check_transition(from, to, draft) {
            failures.push(ValidationFailure::new("status", denied.to_string()));
        }
    }

    if !failures.is_empty() {
        tracing::debug!(
            failures = failures.len(),
            status = %draft.effective_status(),
            "manifest assembly rejected"
        );
        return Err(AssemblyError::Invalid(ValidationResult::from_failures(
            failures,
        )));
    }

    let mut document = draft.clone();
    if let Some(to) = requested_status {
        document.status = Some(to);
    }
    document.refresh_carry_over_flag();

    tracing::debug!(status = %document.effective_status(), "manifest assembled");
    Ok(SubmittableManifest(document))
}

/// The presence-coupling invariants, enforced as hard failures.
///
/// `validate` reports the same breaks as recoverable field failures for
/// interactive editing; a caller reaching the submission seam with one
/// is integration-broken, so assembly refuses outright.
fn check_structure(draft: &Manifest) -> Result<(), AssemblyError> {
    if draft.rejection != draft.rejection_info.is_some() {
        return Err(AssemblyError::Structural(
            "rejection flag and rejectionInfo are decoupled".to_string(),
        ));
    }
    if draft.import != draft.import_info.is_some() {
        return Err(AssemblyError::Structural(
            "import flag and importInfo are decoupled".to_string(),
        ));
    }
    if draft.locked != draft.lock_reason.is_some() {
        return Err(AssemblyError::Structural(
            "locked flag and lockReason are decoupled".to_string(),
        ));
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────
