//! Design-rule-check settings: a plain versioned value object.
//!
//! Persisted as a keyed node tree where every parameter is one named child
//! holding a single literal (nanometer distance, boolean, or a token from a
//! closed vocabulary). Documents written before a parameter existed fall
//! back to its fixed default on load.

use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which drilled slot shapes a rule check accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowedSlots {
    None,
    SingleSegmentStraight,
    MultiSegmentStraight,
    Any,
}

/// Rule-check parameters. All distances are unsigned nanometers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleCheckSettings {
    pub min_copper_copper_clearance: u64,
    pub min_copper_board_clearance: u64,
    pub min_copper_npth_clearance: u64,
    pub min_drill_drill_clearance: u64,
    pub min_drill_board_clearance: u64,
    pub min_silkscreen_stopmask_clearance: u64,
    pub min_copper_width: u64,
    pub min_annular_ring: u64,
    pub min_npth_drill_diameter: u64,
    pub min_pth_drill_diameter: u64,
    pub min_npth_slot_width: u64,
    pub min_pth_slot_width: u64,
    pub min_silkscreen_width: u64,
    pub min_silkscreen_text_height: u64,
    pub min_outline_tool_diameter: u64,
    pub blind_vias_allowed: bool,
    pub buried_vias_allowed: bool,
    pub allowed_npth_slots: AllowedSlots,
    pub allowed_pth_slots: AllowedSlots,
}

impl Default for RuleCheckSettings {
    fn default() -> Self {
        Self {
            min_copper_copper_clearance: 200_000,         // 200um
            min_copper_board_clearance: 300_000,          // 300um
            min_copper_npth_clearance: 250_000,           // 250um
            min_drill_drill_clearance: 350_000,           // 350um
            min_drill_board_clearance: 500_000,           // 500um
            min_silkscreen_stopmask_clearance: 127_000,   // 127um
            min_copper_width: 200_000,                    // 200um
            min_annular_ring: 200_000,                    // 200um
            min_npth_drill_diameter: 300_000,             // 300um
            min_pth_drill_diameter: 300_000,              // 300um
            min_npth_slot_width: 1_000_000,               // 1mm
            min_pth_slot_width: 700_000,                  // 0.7mm
            min_silkscreen_width: 150_000,                // 150um
            min_silkscreen_text_height: 800_000,          // 0.8mm
            min_outline_tool_diameter: 2_000_000,         // 2mm
            blind_vias_allowed: false,
            buried_vias_allowed: false,
            allowed_npth_slots: AllowedSlots::SingleSegmentStraight,
            allowed_pth_slots: AllowedSlots::SingleSegmentStraight,
        }
    }
}

impl RuleCheckSettings {
    /// Serialize to the keyed node tree.
    pub fn to_node(&self) -> Value {
        // serialization of a closed value object cannot fail
        serde_json::to_value(self).expect("rule check settings serialize")
    }

    /// Load from a keyed node tree. Unknown enumerated tokens and malformed
    /// literals are hard errors; missing children take their defaults.
    pub fn from_node(node: &Value) -> Result<Self, EditorError> {
        serde_json::from_value(node.clone())
            .map_err(|e| EditorError::Format(format!("rule check settings: {e}")))
    }
}
