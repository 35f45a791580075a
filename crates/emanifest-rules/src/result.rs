//! # Validation Results
//!
//! A validation pass either succeeds or yields a non-empty, ordered list
//! of field-scoped failures. Failures are values, not errors — the caller
//! presents them and the user corrects the draft.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-scoped validation failure.
///
/// `field` is a dotted path into the document's wire shape, with bracket
/// indexing for sequences: `generator.siteAddress.city`,
/// `transporters[1].epaSiteId`, `residueNewManifestTrackingNumbers[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Path to the violating field.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationFailure {
    /// A failure scoped to `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.field, self.message)
    }
}

/// Outcome of a full validation pass.
///
/// `Invalid` always carries at least one failure; [`from_failures`]
/// maintains that invariant by mapping an empty list to `Valid`.
///
/// [`from_failures`]: ValidationResult::from_failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// Every rule passed.
    Valid,
    /// One or more rules failed, in rule order.
    Invalid(Vec<ValidationFailure>),
}

impl ValidationResult {
    /// Build a result from an accumulated failure list.
    pub fn from_failures(failures: Vec<ValidationFailure>) -> Self {
        if failures.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(failures)
        }
    }

    /// Whether the pass succeeded.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failures, empty when valid.
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            Self::Valid => &[],
            Self::Invalid(failures) => failures,
        }
    }

    /// Consume the result, returning the failure list.
    pub fn into_failures(self) -> Vec<ValidationFailure> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(failures) => failures,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(failures) => {
                for (i, failure) in failures.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{failure}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_failures_is_valid() {
        let result = ValidationResult::from_failures(Vec::new());
        assert!(result.is_valid());
        assert!(result.failures().is_empty());
    }

    #[test]
    fn test_nonempty_failures_is_invalid() {
        let result = ValidationResult::from_failures(vec![ValidationFailure::new(
            "generator",
            "a generator is required",
        )]);
        assert!(!result.is_valid());
        assert_eq!(result.failures().len(), 1);
    }

    #[test]
    fn test_failure_display() {
        let failure = ValidationFailure::new("potentialShipDate", "cannot be in the past");
        assert_eq!(failure.to_string(), "  potentialShipDate: cannot be in the past");
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = ValidationResult::from_failures(vec![ValidationFailure::new(
            "rejection",
            "rejectionInfo is required when rejection is true",
        )]);
        let json = serde_json::to_string(&result).unwrap();
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_result_display_lists_all_failures() {
        let result = ValidationResult::from_failures(vec![
            ValidationFailure::new("generator", "a generator is required"),
            ValidationFailure::new("designatedFacility", "a designated facility is required"),
        ]);
        let display = result.to_string();
        assert!(display.contains("generator"));
        assert!(display.contains("designatedFacility"));
        assert_eq!(display.lines().count(), 2);
    }
}
