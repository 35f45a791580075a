//! # emanifest-state — Manifest Lifecycle State Machine
//!
//! The manifest's status values live in `emanifest-core`; this crate
//! defines which transitions between them are legal and what each edge
//! requires of the document.
//!
//! ## Transition Table
//!
//! ```text
//! NotAssigned ──▶ Pending ──▶ Scheduled ──▶ InTransit ──▶ ReadyForSignature
//!                    ▲                                            │
//!                    │                                            ▼
//!                    │                                          Signed
//!                    │                                            │
//!                    │                                            ▼
//!          MtnValidationFailed ◀── (any)              UnderCorrection ──▶ Corrected
//! ```
//!
//! Every edge carries a guard over the document's fields — a tracking
//! number for `NotAssigned → Pending`, a transporter signature for
//! `Scheduled → InTransit`, and so on. The machine is advisory: it
//! validates whether a requested transition is legal, it does not execute
//! side effects (signature capture, registry submission) — those belong
//! to external collaborators.
//!
//! ## Locking & Post-Signature Immutability
//!
//! A locked manifest rejects every edit except by the process named in
//! its lock reason ([`ensure_editable`]). Once signed, only the status,
//! the correction requests, and the lock fields may change
//! ([`check_signed_edit`]).

pub mod lock;
pub mod machine;

// Re-export primary types for ergonomic imports.
pub use lock::{check_signed_edit, ensure_editable};
pub use machine::{can_transition, check_transition, StateError};
