//! # Transition Table & Guards
//!
//! The closed set of legal status transitions and the document-level
//! guard each one enforces. Anything not in the table is denied —
//! including every skip (`Pending → Signed` is not an edge, so it is
//! never legal, regardless of the document).

use thiserror::Error;

use emanifest_core::{LockReason, ManifestStatus};
use emanifest_model::Manifest;

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors produced by the lifecycle machine.
///
/// These are expected, recoverable outcomes for the caller (choose a
/// different action, wait for the unlocking process) — the machine never
/// mutates the document, so nothing needs rolling back.
#[derive(Error, Debug)]
pub enum StateError {
    /// The requested transition is not legal from the current status.
    #[error("transition denied: {from} -> {to}: {reason}")]
    TransitionDenied {
        /// Current status.
        from: ManifestStatus,
        /// Requested status.
        to: ManifestStatus,
        /// Why the transition was refused.
        reason: String,
    },

    /// An edit was attempted on a locked manifest.
    #[error("manifest is locked ({process}): edits are limited to that process")]
    Locked {
        /// The external process holding the lock.
        process: LockReason,
    },

    /// An edit was attempted on a locked manifest whose lock reason is
    /// missing — a coupling violation upstream; refuse rather than guess.
    #[error("manifest is locked with no lock reason recorded")]
    LockedWithoutReason,

    /// A signed manifest was edited outside the permitted fields.
    #[error("manifest is signed: only status, correction requests, and lock fields may change")]
    ImmutableAfterSignature,
}

// ─── Transition Checks ───────────────────────────────────────────────

/// Whether `from → to` is legal for this document.
pub fn can_transition(from: ManifestStatus, to: ManifestStatus, draft: &Manifest) -> bool {
    check_transition(from, to, draft).is_ok()
}

/// Check a requested transition, returning the denial reason on failure.
pub fn check_transition(
    from: ManifestStatus,
    to: ManifestStatus,
    draft: &Manifest,
) -> Result<(), StateError> {
    use ManifestStatus::*;

    // The failure branch is reachable from anywhere: the authority may
    // invalidate a tracking number at any point.
    if to == MtnValidationFailed {
        return Ok(());
    }

    match (from, to) {
        (NotAssigned, Pending) => guard(
            draft.manifest_tracking_number.is_some(),
            from,
            to,
            "no tracking number has been assigned",
        ),
        (Pending, Scheduled) => match missing_parties(draft) {
            None => Ok(()),
            Some(missing) => guard(false, from, to, &format!("missing {missing}")),
        },
        (Scheduled, InTransit) => guard(
            draft.transporters.iter().any(|t| t.has_signature()),
            from,
            to,
            "no transporter signature has been recorded",
        ),
        (InTransit, ReadyForSignature) => guard(
            draft.received_date.is_some(),
            from,
            to,
            "the designated facility has not received the shipment",
        ),
        (ReadyForSignature, Signed) => guard(
            draft.is_certified(),
            from,
            to,
            "certifiedBy and certifiedDate must both be set",
        ),
        (Signed, UnderCorrection) => guard(
            !draft.correction_requests.is_empty(),
            from,
            to,
            "no correction request is open",
        ),
        (UnderCorrection, Corrected) => guard(
            !draft.correction_requests.is_empty()
                && draft.correction_requests.iter().all(|r| r.resolved),
            from,
            to,
            "open correction requests remain",
        ),
        // Re-entry from the failure branch requires a reassigned number.
        (MtnValidationFailed, Pending) => guard(
            draft.manifest_tracking_number.is_some(),
            from,
            to,
            "the tracking number has not been reassigned",
        ),
        _ => Err(StateError::TransitionDenied {
            from,
            to,
            reason: "no such transition".to_string(),
        }),
    }
}

fn guard(
    condition: bool,
    from: ManifestStatus,
    to: ManifestStatus,
    reason: &str,
) -> Result<(), StateError> {
    if condition {
        Ok(())
    } else {
        Err(StateError::TransitionDenied {
            from,
            to,
            reason: reason.to_string(),
        })
    }
}

/// Names the parties a schedulable document lacks, or `None` when all are
/// present. Field-level completeness of the parties is the rules crate's
/// concern; the assembly seam runs those before consulting this table.
fn missing_parties(draft: &Manifest) -> Option<String> {
    let mut missing = Vec::new();
    if draft.generator.is_none() {
        missing.push("a generator");
    }
    if draft.designated_facility.is_none() {
        missing.push("a designated facility");
    }
    if draft.transporters.is_empty() {
        missing.push("a transporter");
    }
    if draft.wastes.is_empty() {
        missing.push("a waste line");
    }
    if missing.is_empty() {
        None
    } else {
        Some(missing.join(", "))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
