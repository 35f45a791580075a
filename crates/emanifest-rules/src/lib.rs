//! # emanifest-rules — Field Validation & Address Synchronization
//!
//! Pure predicates over a draft manifest. Rules are functions of the whole
//! document, not of single fields in isolation, because many constraints
//! are cross-field (a rejection record requires the rejection flag, a
//! residue tracking number requires the residue flag).
//!
//! ## Accumulation, Never Short-Circuit
//!
//! A single [`validate`] call surfaces every violation in one pass so the
//! caller can present them together. The rejected alternative — fix one,
//! resubmit, discover the next — is exactly what this layer exists to
//! avoid.
//!
//! ## Determinism
//!
//! The reference date ("today") is an explicit parameter, so the rules are
//! reproducible in tests and never read a clock. Validating the same draft
//! twice yields the identical failure list.

pub mod address_sync;
pub mod result;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use address_sync::{apply_site_address, set_separate_mailing_address, sync_mailing_address};
pub use result::{ValidationFailure, ValidationResult};
pub use validate::validate;
