//! # Regulatory Identity Newtypes
//!
//! Newtype wrappers for the identifiers that appear on a hazardous-waste
//! manifest. These prevent accidental identifier confusion — you cannot
//! pass an `EpaSiteId` where a `ManifestTrackingNumber` is expected — and
//! they enforce the legal formats at construction.
//!
//! The tracking number is assigned exclusively by the external authority;
//! this crate can parse and carry one, but nothing in the workspace mints
//! them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

// ─── Manifest Tracking Number ────────────────────────────────────────

/// A unique alphanumeric identifier assigned to each manifest by the
/// external authority: nine digits followed by a three-letter uppercase
/// suffix (`[0-9]{9}[A-Z]{3}`).
///
/// Immutable once assigned. Constructed only through [`parse`], which
/// rejects any input that does not match the format exactly — including
/// deserialization, which routes through the same check.
///
/// [`parse`]: ManifestTrackingNumber::parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ManifestTrackingNumber(String);

impl TryFrom<String> for ManifestTrackingNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ManifestTrackingNumber> for String {
    fn from(mtn: ManifestTrackingNumber) -> Self {
        mtn.0
    }
}

impl ManifestTrackingNumber {
    /// Parse a tracking number, enforcing the `[0-9]{9}[A-Z]{3}` format.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTrackingNumber` if the input is not
    /// exactly nine ASCII digits followed by three ASCII uppercase letters.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        if !value.is_ascii() {
            return Err(CoreError::InvalidTrackingNumber {
                value: value.to_string(),
                reason: "must be ASCII".to_string(),
            });
        }
        if value.len() != 12 {
            return Err(CoreError::InvalidTrackingNumber {
                value: value.to_string(),
                reason: format!("expected 12 characters, got {}", value.len()),
            });
        }
        let (digits, suffix) = value.split_at(9);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::InvalidTrackingNumber {
                value: value.to_string(),
                reason: "first 9 characters must be digits".to_string(),
            });
        }
        if !suffix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CoreError::InvalidTrackingNumber {
                value: value.to_string(),
                reason: "last 3 characters must be uppercase letters".to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Whether a string matches the tracking-number format.
    ///
    /// Used by the residue rule, which checks raw carry-over entries
    /// without constructing the newtype.
    pub fn is_valid_format(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// The tracking number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ManifestTrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── EPA Site Id ─────────────────────────────────────────────────────

/// A handler's regulatory identifier (e.g. `VATEST00001`).
///
/// The registry defines the authoritative format per locality; this type
/// enforces the shared minimum — non-empty, ASCII alphanumeric, at most
/// twelve characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EpaSiteId(String);

impl TryFrom<String> for EpaSiteId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EpaSiteId> for String {
    fn from(id: EpaSiteId) -> Self {
        id.0
    }
}

impl EpaSiteId {
    /// Maximum length of a site identifier.
    pub const MAX_LEN: usize = 12;

    /// Parse a site identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSiteId` if the input is empty, longer
    /// than [`MAX_LEN`](Self::MAX_LEN), or contains characters outside
    /// ASCII alphanumerics.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        if value.is_empty() {
            return Err(CoreError::InvalidSiteId {
                value: value.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if value.len() > Self::MAX_LEN {
            return Err(CoreError::InvalidSiteId {
                value: value.to_string(),
                reason: format!("longer than {} characters", Self::MAX_LEN),
            });
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidSiteId {
                value: value.to_string(),
                reason: "must be ASCII alphanumeric".to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EpaSiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Correction Request Id ───────────────────────────────────────────

/// Client-side identifier for a correction request.
///
/// Correction requests exist before the external authority sees them, so
/// they carry a locally generated UUID rather than an assigned number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectionRequestId(Uuid);

impl CorrectionRequestId {
    /// Generate a new random correction-request identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CorrectionRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrectionRequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "correction:{}", self.0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
