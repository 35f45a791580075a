//! # Address Types
//!
//! A handler address with all sub-fields optional at the type level.
//! The submission minimum (`address1`, `city`, `state`, `zip`) is enforced
//! by the address-completeness rule in `emanifest-rules`, not here.

use serde::{Deserialize, Serialize};

/// A locality code with an optional display name (state or country).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locality {
    /// The locality code (e.g. `"VA"`, `"US"`).
    pub code: String,
    /// Human-readable name, when the directory supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Locality {
    /// A locality from its bare code.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
        }
    }
}

/// A site or mailing address.
///
/// Every sub-field is optional so drafts can hold partially typed input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street_number: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<Locality>,
    pub zip: Option<String>,
    pub country: Option<Locality>,
}

impl Address {
    /// An address with no populated sub-fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no sub-field is populated.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
