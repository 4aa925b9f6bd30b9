//! Formula variants for frame-and-panel layouts
//!
//! The cutlist table, the layout diagram and the project piece breakdown all
//! derive pieces from the same envelope arithmetic but differ in where they
//! round and which frame member bounds the panel vertically. Each of those
//! is a named preset of [`FormulaOptions`].

use cabinetr_core::round_up_to_sixteenth;
use serde::{Deserialize, Serialize};

/// Frame member whose stock width is subtracted from the panel height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameMember {
    #[default]
    Stile,
    Rail,
}

/// Knobs of the layout calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormulaOptions {
    /// Round the overlay-inclusive envelope and the unit height up to 1/16"
    pub round_envelope: bool,
    /// Round rail and panel dimensions up to 1/16"
    pub round_pieces: bool,
    /// Add the tongue length on both ends of rails and panels
    pub include_tongue_groove: bool,
    pub panel_height_member: FrameMember,
}

impl Default for FormulaOptions {
    fn default() -> Self {
        Self::canonical()
    }
}

impl FormulaOptions {
    /// The cutlist table formula.
    pub const fn canonical() -> Self {
        Self {
            round_envelope: true,
            round_pieces: true,
            include_tongue_groove: true,
            panel_height_member: FrameMember::Stile,
        }
    }

    /// The layout diagram formula: rounded envelope, raw pieces, rail-bounded
    /// panel.
    pub const fn diagram() -> Self {
        Self {
            round_envelope: true,
            round_pieces: false,
            include_tongue_groove: true,
            panel_height_member: FrameMember::Rail,
        }
    }

    /// The project piece breakdown formula: no rounding anywhere.
    pub const fn project_pieces() -> Self {
        Self {
            round_envelope: false,
            round_pieces: false,
            include_tongue_groove: true,
            panel_height_member: FrameMember::Rail,
        }
    }

    pub const fn without_tongue_groove(mut self) -> Self {
        self.include_tongue_groove = false;
        self
    }

    pub const fn with_panel_height_member(mut self, member: FrameMember) -> Self {
        self.panel_height_member = member;
        self
    }

    pub(crate) fn envelope(&self, value: f64) -> f64 {
        if self.round_envelope {
            round_up_to_sixteenth(value)
        } else {
            value
        }
    }

    pub(crate) fn piece(&self, value: f64) -> f64 {
        if self.round_pieces {
            round_up_to_sixteenth(value)
        } else {
            value
        }
    }

    /// Length the tongues add to an inner dimension, both ends together.
    pub(crate) fn tongue_allowance(&self, depth: f64) -> f64 {
        if self.include_tongue_groove {
            2.0 * depth
        } else {
            0.0
        }
    }
}
