//! # Rejection Records
//!
//! When the designated facility rejects a shipment (fully or in part),
//! the manifest's `rejection` flag is set and this record captures the
//! details. Presence of the record is coupled biconditionally to the flag
//! by the validation rules.

use serde::{Deserialize, Serialize};

use crate::handler::Handler;

/// Whether the facility rejected the full shipment or part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionType {
    FullReject,
    PartialReject,
}

/// Details of a facility rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionInfo {
    /// Full or partial rejection.
    pub rejection_type: RejectionType,
    /// Whether a transporter was still on site when the waste was rejected.
    #[serde(default)]
    pub transporter_on_site: bool,
    /// The alternate facility the rejected waste is forwarded to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_designated_facility: Option<Handler>,
    /// Free-text rejection comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_comments: Option<String>,
}
