//! # Waste Line Types
//!
//! One waste line describes a single waste stream on the manifest. Line
//! numbers on the printed document derive from position in the manifest's
//! `wastes` sequence, so ordering is semantic and preserved.
//!
//! Waste codes come from a fixed external vocabulary maintained by the
//! regulator, split into federal and per-locality (state) code sets. The
//! vocabulary lookup is an external collaborator; this module only carries
//! the codes a draft references.

use serde::{Deserialize, Serialize};

// ─── Waste Codes ─────────────────────────────────────────────────────

/// Which vocabulary a waste code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WasteCodeKind {
    /// Federal hazardous-waste code (e.g. `D001`).
    Federal,
    /// State/locality waste code.
    State,
}

/// A waste code from the external vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteCode {
    /// The code itself (e.g. `"D001"`).
    pub code: String,
    /// Vocabulary description (e.g. `"IGNITABLE WASTE"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Which vocabulary the code belongs to.
    pub kind: WasteCodeKind,
}

impl WasteCode {
    /// A federal code.
    pub fn federal(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
            kind: WasteCodeKind::Federal,
        }
    }

    /// A state code.
    pub fn state(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
            kind: WasteCodeKind::State,
        }
    }
}

// ─── Quantity ────────────────────────────────────────────────────────

/// Unit of measure for a waste quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityUnit {
    Gallons,
    Kilograms,
    Liters,
    MetricTons,
    CubicMeters,
    Pounds,
    Tons,
    CubicYards,
}

/// Quantity of a waste stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    /// Measured amount.
    pub value: f64,
    /// Unit of measure.
    pub unit: QuantityUnit,
    /// Number of containers, when counted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containers: Option<u32>,
}

// ─── Discrepancy / Residue ───────────────────────────────────────────

/// Per-line discrepancy and residue markers, recorded by the receiving
/// facility when what arrived differs from what the line describes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscrepancyResidueInfo {
    /// The line is residue carried forward from a prior shipment.
    pub residue: bool,
    /// Quantity discrepancy observed.
    pub waste_quantity: bool,
    /// Waste-type discrepancy observed.
    pub waste_type: bool,
    /// Free-text comments on the discrepancy.
    pub comments: Option<String>,
}

// ─── Waste Line ──────────────────────────────────────────────────────

/// One waste stream entry on a manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WasteLine {
    /// Regulated under DOT transport rules.
    pub dot_hazardous: bool,
    /// Federally regulated hazardous waste.
    pub epa_waste: bool,
    /// Codes from the external vocabulary, federal and state mixed.
    pub waste_codes: Vec<WasteCode>,
    /// Printed description of the waste stream.
    pub description: Option<String>,
    /// Measured quantity.
    pub quantity: Option<Quantity>,
    /// Discrepancy/residue markers set by the receiving facility.
    pub discrepancy_residue_info: Option<DiscrepancyResidueInfo>,
}

impl WasteLine {
    /// Whether this line carries residue from a prior shipment.
    pub fn is_residue_carry_over(&self) -> bool {
        self.discrepancy_residue_info
            .as_ref()
            .is_some_and(|info| info.residue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waste_code_constructors() {
        let d001 = WasteCode::federal("D001");
        assert_eq!(d001.kind, WasteCodeKind::Federal);
        let s123 = WasteCode::state("123");
        assert_eq!(s123.kind, WasteCodeKind::State);
    }

    #[test]
    fn test_default_line_is_not_carry_over() {
        assert!(!WasteLine::default().is_residue_carry_over());
    }

    #[test]
    fn test_residue_marker_detected() {
        let line = WasteLine {
            discrepancy_residue_info: Some(DiscrepancyResidueInfo {
                residue: true,
                ..DiscrepancyResidueInfo::default()
            }),
            ..WasteLine::default()
        };
        assert!(line.is_residue_carry_over());
    }

    #[test]
    fn test_waste_line_serde_round_trip() {
        let line = WasteLine {
            dot_hazardous: true,
            epa_waste: true,
            waste_codes: vec![WasteCode::federal("D002")],
            description: Some("Corrosive rinse water".to_string()),
            quantity: Some(Quantity {
                value: 55.0,
                unit: QuantityUnit::Gallons,
                containers: Some(1),
            }),
            discrepancy_residue_info: None,
        };
        let json = serde_json::to_string(&line).unwrap();
        let back: WasteLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
