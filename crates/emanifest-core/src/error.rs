//! # Error Types — Core Error Taxonomy
//!
//! Defines the errors produced by the foundational types. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Field-level validation outcomes and transition denials are NOT errors at
//! this layer — they are returned as values by `emanifest-rules` and
//! `emanifest-state`. `CoreError` covers only malformed primitive inputs:
//! a tracking number with the wrong shape, a timestamp with a non-UTC
//! offset, an unknown status string from the wire.

use thiserror::Error;

/// Errors produced while constructing the core primitive types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A manifest tracking number did not match `[0-9]{9}[A-Z]{3}`.
    #[error("invalid manifest tracking number {value:?}: {reason}")]
    InvalidTrackingNumber {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// An EPA site identifier was empty or contained illegal characters.
    #[error("invalid EPA site id {value:?}: {reason}")]
    InvalidSiteId {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A timestamp string was malformed or not UTC.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A status string from the wire is not one of the nine known statuses.
    #[error("unknown manifest status: {0:?}")]
    UnknownStatus(String),

    /// A lock reason string from the wire is not a known unlocking process.
    #[error("unknown lock reason: {0:?}")]
    UnknownLockReason(String),
}
