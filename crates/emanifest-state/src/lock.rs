//! # Lock Enforcement & Post-Signature Immutability
//!
//! Two document-wide edit gates that sit in front of every field
//! mutation:
//!
//! - a locked manifest is editable only by the external process named in
//!   its lock reason — anything else gets a structured `Locked` error,
//!   never a silent apply;
//! - a signed manifest permits changes only to its status, its correction
//!   requests, and its lock fields.

use emanifest_core::LockReason;
use emanifest_model::Manifest;

use crate::machine::StateError;

/// Check that `process` may edit this manifest.
///
/// `None` is an ordinary caller (the editing user); `Some` identifies one
/// of the external processes a lock can name.
///
/// # Errors
///
/// Returns `StateError::Locked` when the manifest is locked by a
/// different process, or `StateError::LockedWithoutReason` when the lock
/// flag is set with no reason recorded (a coupling violation upstream —
/// refused rather than guessed at).
pub fn ensure_editable(manifest: &Manifest, process: Option<LockReason>) -> Result<(), StateError> {
    if !manifest.locked {
        return Ok(());
    }
    match manifest.lock_reason {
        Some(holder) if process == Some(holder) => Ok(()),
        Some(holder) => Err(StateError::Locked { process: holder }),
        None => Err(StateError::LockedWithoutReason),
    }
}

/// Check an edit against post-signature immutability.
///
/// Once a manifest reaches `Signed` (or the correction statuses after
/// it), `certified_by`/`certified_date` — and everything else on the
/// document — are frozen except the status, the correction requests, and
/// the lock fields. The check compares `after` to `before` with the
/// permitted fields masked out; any other difference is refused.
///
/// Pre-signature documents are unrestricted here.
pub fn check_signed_edit(before: &Manifest, after: &Manifest) -> Result<(), StateError> {
    if !before.effective_status().is_post_signature() {
        return Ok(());
    }

    let mut masked = after.clone();
    masked.status = before.status;
    masked.correction_requests = before.correction_requests.clone();
    masked.locked = before.locked;
    masked.lock_reason = before.lock_reason;

    if &masked == before {
        Ok(())
    } else {
        Err(StateError::ImmutableAfterSignature)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
