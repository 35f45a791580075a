//! # emanifest-model — The e-Manifest Entity Model
//!
//! Pure data contracts for the hazardous-waste manifest and its nested
//! entities. No behavior beyond construction helpers and the derived
//! carry-over flag; the validation rules (`emanifest-rules`) and the
//! lifecycle machine (`emanifest-state`) operate on these types.
//!
//! ## Draft-Friendliness
//!
//! Every type here must support partial instances so editing can proceed
//! incrementally: a user adds a generator before choosing a facility, types
//! half an address before the other half. Fields that the submission
//! contract requires are still `Option` (or defaultable) at the type level;
//! presence is enforced by a full validation pass, not by construction.
//!
//! ## Wire Shape
//!
//! All types serialize with the camelCase keys the external collaborators
//! exchange (`manifestTrackingNumber`, `siteAddress`, ...). Array order is
//! semantic — transporters are custody order, waste lines are line-item
//! order — and is preserved verbatim by `Vec`.

pub mod address;
pub mod correction;
pub mod handler;
pub mod import;
pub mod manifest;
pub mod rejection;
pub mod signer;
pub mod waste;

// Re-export primary types for ergonomic imports.
pub use address::{Address, Locality};
pub use correction::{CorrectionInfo, CorrectionRequest};
pub use handler::{Handler, HandlerRole, HandlerSource};
pub use import::{ImportInfo, PortOfEntry};
pub use manifest::{
    AdditionalInfo, DocumentMetadata, DocumentMimeType, Manifest, ManifestComment, OriginType,
    SubmissionType,
};
pub use rejection::{RejectionInfo, RejectionType};
pub use signer::{ElectronicSignature, Signer};
pub use waste::{DiscrepancyResidueInfo, Quantity, QuantityUnit, WasteCode, WasteCodeKind, WasteLine};
