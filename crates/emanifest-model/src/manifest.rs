//! # The Manifest
//!
//! The root entity: the regulated document tracking one hazardous-waste
//! shipment from a generating site, through one or more transporters, to
//! a designated receiving facility.
//!
//! A manifest is created as an editable draft with no status and no
//! tracking number; the tracking number is assigned exclusively by the
//! external authority, and the status advances only along the transition
//! table in `emanifest-state`. Almost every field is optional or
//! defaultable here — the submission contract in `emanifest-assembly` is
//! what guarantees completeness.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use emanifest_core::{LockReason, ManifestStatus, ManifestTrackingNumber, Timestamp};

use crate::correction::{CorrectionInfo, CorrectionRequest};
use crate::handler::Handler;
use crate::import::ImportInfo;
use crate::rejection::RejectionInfo;
use crate::signer::Signer;
use crate::waste::WasteLine;

// ─── Submission Metadata ─────────────────────────────────────────────

/// How a manifest is submitted to the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionType {
    FullElectronic,
    DataImage5Copy,
    Hybrid,
    Image,
}

/// How a manifest was created. `Mail` is a legacy option from when mailed
/// paper manifests were accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OriginType {
    Web,
    Service,
    Mail,
}

// ─── Document Metadata ───────────────────────────────────────────────

/// Mime type of an attached manifest document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentMimeType {
    #[serde(rename = "APPLICATION_PDF")]
    ApplicationPdf,
    #[serde(rename = "TEXT_HTML")]
    TextHtml,
}

/// Metadata for a manifest file (PDF, HTML). The file body lives with the
/// external document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub name: String,
    pub size: u64,
    pub mime_type: DocumentMimeType,
}

// ─── Additional Info ─────────────────────────────────────────────────

/// A free-text comment attached by a handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestComment {
    pub label: Option<String>,
    pub description: Option<String>,
    pub handler_id: Option<String>,
}

/// Additional handling information, including references to the manifests
/// this shipment carries waste forward from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInfo {
    /// Tracking numbers of the original manifests for carry-over waste.
    pub original_manifest_tracking_numbers: Vec<String>,
    /// Handler comments.
    pub comments: Vec<ManifestComment>,
}

// ─── Manifest ────────────────────────────────────────────────────────

/// The hazardous-waste manifest.
///
/// Ordering of `transporters` (custody order) and `wastes` (line-item
/// numbering) is semantic and preserved. The flag/record pairs
/// (`rejection`/`rejection_info`, `import`/`import_info`,
/// `locked`/`lock_reason`) are coupled biconditionally by the validation
/// rules; `contains_previous_reject_or_residue` is derived, never set by
/// callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Manifest {
    pub created_date: Option<Timestamp>,
    pub updated_date: Option<Timestamp>,
    /// Assigned by the external authority; never minted here.
    pub manifest_tracking_number: Option<ManifestTrackingNumber>,
    /// Lifecycle status; `None` on a client-side draft.
    pub status: Option<ManifestStatus>,
    pub submission_type: Option<SubmissionType>,
    pub origin_type: Option<OriginType>,
    pub shipped_date: Option<Timestamp>,
    /// Planned ship date; must not be before "today" at validation time.
    pub potential_ship_date: Option<NaiveDate>,
    /// When the designated facility received the shipment.
    pub received_date: Option<Timestamp>,
    /// Set together with `certified_by`, immutable once set.
    pub certified_date: Option<Timestamp>,
    pub certified_by: Option<Signer>,
    /// The site that generated the waste. Exactly one on a submittable document.
    pub generator: Option<Handler>,
    /// Custody chain, in order.
    pub transporters: Vec<Handler>,
    /// The receiving facility. Exactly one on a submittable document.
    pub designated_facility: Option<Handler>,
    pub broker: Option<Handler>,
    /// Waste streams, in printed line order.
    pub wastes: Vec<WasteLine>,
    /// The facility rejected the shipment.
    pub rejection: bool,
    pub rejection_info: Option<RejectionInfo>,
    /// Listed and actual waste differ.
    pub discrepancy: bool,
    /// The shipment carries residue forward to a new manifest.
    pub residue: bool,
    /// Tracking numbers of the follow-on manifests for residue waste.
    pub residue_new_manifest_tracking_numbers: Vec<String>,
    /// The shipment was imported from a foreign country.
    pub import: bool,
    pub import_info: Option<ImportInfo>,
    pub correction_requests: Vec<CorrectionRequest>,
    pub correction_info: Option<CorrectionInfo>,
    pub additional_info: Option<AdditionalInfo>,
    /// Derived: any waste line or carry-over reference indicates waste
    /// from a prior rejection or residue.
    pub contains_previous_reject_or_residue: bool,
    pub printed_document: Option<DocumentMetadata>,
    pub form_document: Option<DocumentMetadata>,
    /// Editing is blocked while locked, except by the process named in
    /// `lock_reason`.
    pub locked: bool,
    pub lock_reason: Option<LockReason>,
}

impl Manifest {
    /// A new, empty draft with no status.
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective lifecycle status: drafts with no status are treated
    /// as `NotAssigned`.
    pub fn effective_status(&self) -> ManifestStatus {
        self.status.unwrap_or(ManifestStatus::NotAssigned)
    }

    /// Whether any waste line or carry-over reference indicates waste from
    /// a prior rejection or residue.
    pub fn carries_previous_reject_or_residue(&self) -> bool {
        let line_residue = self.wastes.iter().any(WasteLine::is_residue_carry_over);
        let carry_over_refs = self
            .additional_info
            .as_ref()
            .is_some_and(|info| !info.original_manifest_tracking_numbers.is_empty());
        line_residue || carry_over_refs
    }

    /// Recompute the derived `contains_previous_reject_or_residue` flag.
    pub fn refresh_carry_over_flag(&mut self) {
        self.contains_previous_reject_or_residue = self.carries_previous_reject_or_residue();
    }

    /// Whether certification is recorded (both certifier fields set).
    pub fn is_certified(&self) -> bool {
        self.certified_date.is_some() && self.certified_by.is_some()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waste::DiscrepancyResidueInfo;
    use emanifest_core::ManifestStatus;

    #[test]
    fn test_new_draft_has_no_status() {
        let m = Manifest::new();
        assert!(m.status.is_none());
        assert_eq!(m.effective_status(), ManifestStatus::NotAssigned);
        assert!(m.transporters.is_empty());
        assert!(!m.locked);
    }

    #[test]
    fn test_carry_over_from_waste_line() {
        let mut m = Manifest::new();
        m.wastes.push(WasteLine {
            discrepancy_residue_info: Some(DiscrepancyResidueInfo {
                residue: true,
                ..DiscrepancyResidueInfo::default()
            }),
            ..WasteLine::default()
        });
        m.refresh_carry_over_flag();
        assert!(m.contains_previous_reject_or_residue);
    }

    #[test]
    fn test_carry_over_from_original_tracking_numbers() {
        let mut m = Manifest::new();
        m.additional_info = Some(AdditionalInfo {
            original_manifest_tracking_numbers: vec!["123456789ELC".to_string()],
            comments: Vec::new(),
        });
        m.refresh_carry_over_flag();
        assert!(m.contains_previous_reject_or_residue);
    }

    #[test]
    fn test_no_carry_over_on_plain_draft() {
        let mut m = Manifest::new();
        m.wastes.push(WasteLine::default());
        m.refresh_carry_over_flag();
        assert!(!m.contains_previous_reject_or_residue);
    }

    #[test]
    fn test_is_certified_requires_both_fields() {
        let mut m = Manifest::new();
        assert!(!m.is_certified());
        m.certified_date = Some(Timestamp::now());
        assert!(!m.is_certified());
        m.certified_by = Some(Signer::named("Pat", "Jones"));
        assert!(m.is_certified());
    }

    #[test]
    fn test_manifest_serde_wire_keys() {
        let mut m = Manifest::new();
        m.manifest_tracking_number = Some(ManifestTrackingNumber::parse("123456789ELC").unwrap());
        m.status = Some(ManifestStatus::Pending);
        m.potential_ship_date = NaiveDate::from_ymd_opt(2026, 8, 7);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["manifestTrackingNumber"], "123456789ELC");
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["potentialShipDate"], "2026-08-07");
        assert_eq!(json["containsPreviousRejectOrResidue"], false);
    }

    #[test]
    fn test_manifest_partial_json_parses() {
        let m: Manifest = serde_json::from_str(r#"{"rejection": true}"#).unwrap();
        assert!(m.rejection);
        assert!(m.status.is_none());
        assert!(m.wastes.is_empty());
    }
}
