//! # Handler Types
//!
//! A handler is a party in the shipment chain — generator, transporter,
//! designated facility, or broker. All roles share one shape; the role is
//! given by the handler's position on the manifest (the `generator` slot,
//! the ordered `transporters` sequence, ...), and [`HandlerRole`] names it
//! where the validation rules need role-conditional requirements.
//!
//! ## Provenance
//!
//! A handler record is either looked up from the external site directory
//! by EPA ID ([`HandlerSource::Registry`]) or entered by hand
//! ([`HandlerSource::Manual`]). Registry transporters carry authoritative
//! addresses upstream, so only manually entered ones must pass the
//! address-completeness rule.

use serde::{Deserialize, Serialize};

use emanifest_core::EpaSiteId;

use crate::address::Address;
use crate::signer::ElectronicSignature;

// ─── Role & Provenance ───────────────────────────────────────────────

/// The role a handler plays on a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerRole {
    /// The site that generated the hazardous waste.
    Generator,
    /// A carrier in the custody chain.
    Transporter,
    /// The receiving treatment/storage/disposal facility.
    DesignatedFacility,
    /// An optional brokering party.
    Broker,
}

impl HandlerRole {
    /// The field-path segment for this role on the manifest document
    /// (`"generator"`, `"transporters"`, ...).
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Transporter => "transporters",
            Self::DesignatedFacility => "designatedFacility",
            Self::Broker => "broker",
        }
    }
}

impl std::fmt::Display for HandlerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Where a handler record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerSource {
    /// Looked up from the external site directory by EPA ID.
    Registry,
    /// Entered manually on the draft.
    #[default]
    Manual,
}

// ─── Handler ─────────────────────────────────────────────────────────

/// A party in the shipment chain.
///
/// Draft-friendly: identifier and name are optional until validation.
/// The mailing address is governed by the synchronization policy in
/// `emanifest-rules` — while [`separate_mailing_address`] is `false` it
/// mirrors the site address and must not be edited directly.
///
/// [`separate_mailing_address`]: Handler::separate_mailing_address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Handler {
    /// The handler's regulatory identifier.
    pub epa_site_id: Option<EpaSiteId>,
    /// Display name.
    pub name: Option<String>,
    /// Physical site address.
    pub site_address: Address,
    /// Mailing address; mirrors the site address unless the handler has
    /// opted into a distinct one.
    pub mailing_address: Address,
    /// Whether the handler maintains a mailing address distinct from the
    /// site address (the "separate mailing address" checkbox).
    pub separate_mailing_address: bool,
    /// Whether this record was looked up or entered by hand.
    pub source: HandlerSource,
    /// Electronic signatures recorded against this handler.
    pub electronic_signatures: Vec<ElectronicSignature>,
}

impl Handler {
    /// A manually entered handler with nothing populated.
    pub fn manual() -> Self {
        Self::default()
    }

    /// A handler prefilled from the external site directory.
    ///
    /// The mailing address starts as a mirror of the site address, per the
    /// synchronization policy's default.
    pub fn from_registry(epa_site_id: EpaSiteId, name: impl Into<String>, site_address: Address) -> Self {
        Self {
            epa_site_id: Some(epa_site_id),
            name: Some(name.into()),
            mailing_address: site_address.clone(),
            site_address,
            source: HandlerSource::Registry,
            ..Self::default()
        }
    }

    /// Whether any electronic signature has been recorded.
    pub fn has_signature(&self) -> bool {
        !self.electronic_signatures.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Locality;

    fn richmond() -> Address {
        Address {
            address1: Some("1 Main St".to_string()),
            city: Some("Richmond".to_string()),
            state: Some(Locality::from_code("VA")),
            zip: Some("23220".to_string()),
            ..Address::default()
        }
    }

    #[test]
    fn test_registry_handler_mirrors_mailing_address() {
        let h = Handler::from_registry(
            EpaSiteId::parse("VATEST00001").unwrap(),
            "Acme Co",
            richmond(),
        );
        assert_eq!(h.mailing_address, h.site_address);
        assert_eq!(h.source, HandlerSource::Registry);
        assert!(!h.separate_mailing_address);
    }

    #[test]
    fn test_manual_handler_starts_empty() {
        let h = Handler::manual();
        assert!(h.epa_site_id.is_none());
        assert!(h.site_address.is_empty());
        assert_eq!(h.source, HandlerSource::Manual);
    }

    #[test]
    fn test_role_field_names() {
        assert_eq!(HandlerRole::Generator.field_name(), "generator");
        assert_eq!(HandlerRole::DesignatedFacility.field_name(), "designatedFacility");
    }

    #[test]
    fn test_handler_serde_camel_case() {
        let h = Handler::from_registry(
            EpaSiteId::parse("VATEST00001").unwrap(),
            "Acme Co",
            richmond(),
        );
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["epaSiteId"], "VATEST00001");
        assert_eq!(json["siteAddress"]["city"], "Richmond");
        assert_eq!(json["mailingAddress"]["zip"], "23220");
    }
}
