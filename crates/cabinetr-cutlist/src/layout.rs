//! Derived frame layout of one opening
//!
//! Turns an opening plus the shared frame stock into the overlay-inclusive
//! envelope and the member dimensions of each door or drawer front. The
//! cutlist emits pieces from this layout; diagram renderers read the same
//! numbers.

use crate::formula::{FormulaOptions, FrameMember};
use crate::types::{CabinetOpening, GlobalSettings};
use serde::Serialize;
use tracing::{debug, warn};

/// Member dimensions of one door or drawer front, repeated `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitFrame {
    /// Stile length, which is also the unit's finished height
    pub stile_length: f64,
    pub rail_length: f64,
    pub panel_length: f64,
    pub panel_width: f64,
    /// Number of identical units this frame describes
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningLayout {
    pub total_width: f64,
    pub total_height: f64,
    /// Sum of the gaps between neighbouring units
    pub total_gap: f64,
    /// Finished width of each unit
    pub unit_width: f64,
    /// One entry for an even split, one per drawer for a custom split
    pub units: Vec<UnitFrame>,
    /// Raw drawer heights, top to bottom, when a custom split was applied
    pub panel_heights: Option<Vec<f64>>,
}

impl OpeningLayout {
    /// True when the layout follows a custom drawer split.
    pub fn is_custom_split(&self) -> bool {
        self.panel_heights.is_some()
    }
}

/// Compute the layout of `opening` under `options`.
///
/// Never fails. Quantity 0 or non-finite input yields NaN or infinite
/// dimensions that callers can detect.
pub fn compute_layout(
    opening: &CabinetOpening,
    settings: &GlobalSettings,
    options: &FormulaOptions,
) -> OpeningLayout {
    let quantity = f64::from(opening.quantity);
    let total_height = options.envelope(opening.height + opening.overlay.vertical());
    let total_width = options.envelope(opening.width + opening.overlay.horizontal());
    let total_gap = (quantity - 1.0) * settings.gap_size;

    let unit_width = if opening.is_door {
        (total_width - total_gap) / quantity
    } else {
        total_width
    };

    let frame = |unit_height: f64, count: u32| {
        unit_frame(unit_height, unit_width, count, settings, options)
    };

    let (units, panel_heights) = if opening.is_door {
        (vec![frame(total_height, opening.quantity)], None)
    } else {
        let available = total_height - total_gap;
        match opening.custom_ratios() {
            Some(ratios) => {
                let heights: Vec<f64> = ratios.iter().map(|r| available * r / 100.0).collect();
                let units = heights
                    .iter()
                    .map(|h| frame(options.envelope(*h), 1))
                    .collect();
                (units, Some(heights))
            }
            None => {
                if opening.wants_custom_split() {
                    warn!(
                        "Drawer ratios for '{}' are not usable \
                         (sum {:.2}% over {} of {} fronts), using even split",
                        opening.name,
                        opening.ratio_total(),
                        opening.drawer_ratios.len(),
                        opening.quantity
                    );
                }
                let unit_height = options.envelope(available / quantity);
                (vec![frame(unit_height, opening.quantity)], None)
            }
        }
    };

    debug!(
        "Layout '{}': envelope {:.3} x {:.3}, {} unit frame(s)",
        opening.name,
        total_width,
        total_height,
        units.len()
    );

    OpeningLayout {
        total_width,
        total_height,
        total_gap,
        unit_width,
        units,
        panel_heights,
    }
}

fn unit_frame(
    unit_height: f64,
    unit_width: f64,
    count: u32,
    settings: &GlobalSettings,
    options: &FormulaOptions,
) -> UnitFrame {
    let tongues = options.tongue_allowance(settings.tongue_groove_depth);
    let vertical_member = match options.panel_height_member {
        FrameMember::Stile => settings.stile_width,
        FrameMember::Rail => settings.rail_width,
    };

    let rail_length = options.piece(unit_width - 2.0 * settings.stile_width + tongues);
    let panel_length = options.piece(unit_height - 2.0 * vertical_member + tongues);

    UnitFrame {
        stile_length: unit_height,
        rail_length,
        panel_length,
        panel_width: rail_length,
        count,
    }
}
