//! # Correction Records
//!
//! Post-signature amendment of a manifest happens through correction
//! requests: opening one moves the manifest `Signed → UnderCorrection`,
//! resolving all of them permits `UnderCorrection → Corrected`. The
//! transition legality lives in `emanifest-state`; these are the records.

use serde::{Deserialize, Serialize};

use emanifest_core::{CorrectionRequestId, EpaSiteId, Timestamp};

/// A request to amend a signed manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRequest {
    /// Client-side identifier.
    pub id: CorrectionRequestId,
    /// Site that initiated the request, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator_site_id: Option<EpaSiteId>,
    /// Why the correction was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// When the request was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<Timestamp>,
    /// Whether the request has been resolved.
    #[serde(default)]
    pub resolved: bool,
    /// When the request was resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
}

impl CorrectionRequest {
    /// Open a new, unresolved correction request.
    pub fn open(reason: impl Into<String>, requested_at: Timestamp) -> Self {
        Self {
            id: CorrectionRequestId::new(),
            initiator_site_id: None,
            reason: Some(reason.into()),
            requested_at: Some(requested_at),
            resolved: false,
            resolved_at: None,
        }
    }

    /// Mark the request resolved.
    pub fn resolve(&mut self, at: Timestamp) {
        self.resolved = true;
        self.resolved_at = Some(at);
    }
}

/// Version metadata for a manifest that has been through correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionInfo {
    /// Correction version number, starting at 1 for the first amendment.
    pub version_number: u32,
    /// Whether this correction version is the active one.
    pub active: bool,
    /// The site that filed the correction, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epa_site_id: Option<EpaSiteId>,
}
