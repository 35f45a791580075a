//! # Manifest Status — Single Source of Truth
//!
//! Defines the `ManifestStatus` enum with all nine lifecycle statuses and
//! the `LockReason` enum naming the external processes that may edit a
//! locked manifest. These are the ONE definition used across the stack;
//! every `match` must be exhaustive, so adding a status forces every
//! consumer to handle it at compile time.
//!
//! The status drives which validation rules are active and which fields
//! are mutable. Transition legality between statuses lives in
//! `emanifest-state`; this module only names the values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

// ─── Manifest Status ─────────────────────────────────────────────────

/// The lifecycle status of a manifest.
///
/// Serialized in the PascalCase form the external collaborators exchange
/// (`"NotAssigned"`, `"InTransit"`, ...), which the enum variant names
/// match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManifestStatus {
    /// Draft without an assigned tracking number.
    NotAssigned,
    /// Tracking number assigned; awaiting scheduling.
    Pending,
    /// All parties present and validated; shipment scheduled.
    Scheduled,
    /// Custody has passed to a transporter.
    InTransit,
    /// Received by the designated facility; awaiting certification.
    ReadyForSignature,
    /// Certified by the designated facility.
    Signed,
    /// Post-signature corrections resolved.
    Corrected,
    /// A correction request is open against the signed manifest.
    UnderCorrection,
    /// Tracking-number format or uniqueness check failed.
    MtnValidationFailed,
}

impl ManifestStatus {
    /// All nine statuses in lifecycle order.
    pub const ALL: [ManifestStatus; 9] = [
        Self::NotAssigned,
        Self::Pending,
        Self::Scheduled,
        Self::InTransit,
        Self::ReadyForSignature,
        Self::Signed,
        Self::Corrected,
        Self::UnderCorrection,
        Self::MtnValidationFailed,
    ];

    /// The wire name of this status (e.g. `"ReadyForSignature"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAssigned => "NotAssigned",
            Self::Pending => "Pending",
            Self::Scheduled => "Scheduled",
            Self::InTransit => "InTransit",
            Self::ReadyForSignature => "ReadyForSignature",
            Self::Signed => "Signed",
            Self::Corrected => "Corrected",
            Self::UnderCorrection => "UnderCorrection",
            Self::MtnValidationFailed => "MtnValidationFailed",
        }
    }

    /// Whether the manifest has been certified.
    ///
    /// From `Signed` onward, `certified_by`/`certified_date` are immutable
    /// and only the status, correction requests, and lock fields may change.
    pub fn is_post_signature(&self) -> bool {
        matches!(self, Self::Signed | Self::UnderCorrection | Self::Corrected)
    }
}

impl std::fmt::Display for ManifestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManifestStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

// ─── Lock Reason ─────────────────────────────────────────────────────

/// The external process holding a lock on a manifest.
///
/// A locked manifest rejects every field mutation except by the process
/// named here; the lock is released by that process, never by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockReason {
    /// An asynchronous signing ceremony is in flight.
    AsyncSign,
    /// The authority is changing the billing party.
    EpaChangeBiller,
    /// The authority is applying a correction.
    EpaCorrection,
}

impl LockReason {
    /// The wire name of this lock reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsyncSign => "AsyncSign",
            Self::EpaChangeBiller => "EpaChangeBiller",
            Self::EpaCorrection => "EpaCorrection",
        }
    }
}

impl std::fmt::Display for LockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockReason {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AsyncSign" => Ok(Self::AsyncSign),
            "EpaChangeBiller" => Ok(Self::EpaChangeBiller),
            "EpaCorrection" => Ok(Self::EpaCorrection),
            other => Err(CoreError::UnknownLockReason(other.to_string())),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names_round_trip() {
        for status in ManifestStatus::ALL {
            let parsed: ManifestStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_serde_uses_wire_name() {
        let json = serde_json::to_string(&ManifestStatus::ReadyForSignature).unwrap();
        assert_eq!(json, "\"ReadyForSignature\"");
        let back: ManifestStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ManifestStatus::ReadyForSignature);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = "Shipped".parse::<ManifestStatus>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownStatus(_)));
    }

    #[test]
    fn test_post_signature_statuses() {
        assert!(ManifestStatus::Signed.is_post_signature());
        assert!(ManifestStatus::UnderCorrection.is_post_signature());
        assert!(ManifestStatus::Corrected.is_post_signature());
        assert!(!ManifestStatus::Pending.is_post_signature());
        assert!(!ManifestStatus::ReadyForSignature.is_post_signature());
    }

    #[test]
    fn test_lock_reason_round_trip() {
        for reason in [
            LockReason::AsyncSign,
            LockReason::EpaChangeBiller,
            LockReason::EpaCorrection,
        ] {
            let parsed: LockReason = reason.as_str().parse().unwrap();
            assert_eq!(parsed, reason);
        }
    }

    #[test]
    fn test_unknown_lock_reason_rejected() {
        assert!("Maintenance".parse::<LockReason>().is_err());
    }
}
