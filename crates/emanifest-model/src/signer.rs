//! # Signer Types
//!
//! A signer is the identity snapshot captured at the moment a party signs
//! or certifies a manifest. The snapshot is stored on the document itself
//! so the printed record survives later changes to the directory entry;
//! once `certified_date` is set the snapshot is immutable (enforced by the
//! post-signature rules in `emanifest-state`).

use serde::{Deserialize, Serialize};

use emanifest_core::Timestamp;

/// Identity snapshot of a certifier or signer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signer {
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
}

impl Signer {
    /// A signer from first and last name.
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }
}

/// A recorded electronic signature on a handler.
///
/// Signature capture itself is an external collaborator; the core only
/// stores the resulting record. The lifecycle machine reads these to
/// decide whether custody has passed to a transporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicSignature {
    /// Who signed, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer: Option<Signer>,
    /// When the signature was recorded.
    pub signed_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_signer() {
        let s = Signer::named("Pat", "Jones");
        assert_eq!(s.first_name.as_deref(), Some("Pat"));
        assert_eq!(s.last_name.as_deref(), Some("Jones"));
        assert!(s.email.is_none());
    }

    #[test]
    fn test_signature_serde_round_trip() {
        let sig = ElectronicSignature {
            signer: Some(Signer::named("Pat", "Jones")),
            signed_at: Timestamp::parse("2026-08-06T12:00:00Z").unwrap(),
        };
        let json = serde_json::to_string(&sig).unwrap();
        let back: ElectronicSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }
}
