//! Piece breakdown for saved configurations
//!
//! Lists stiles, rails and the center panel with shop notes, using raw
//! (unrounded) dimensions and rail-bounded panels.

use crate::formula::FormulaOptions;
use crate::layout::compute_layout;
use crate::params::{CabinetParams, DEFAULT_THICKNESS};
use serde::{Deserialize, Serialize};

pub const STILE_LABEL: &str = "Stile (Vertical)";
pub const RAIL_LABEL: &str = "Rail (Horizontal)";
pub const PANEL_LABEL: &str = "Center Panel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceDimensions {
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub quantity: u32,
    pub notes: String,
}

impl PieceDimensions {
    fn new(name: &str, width: f64, length: f64, quantity: u32, notes: String) -> Self {
        Self {
            name: name.to_string(),
            width,
            length,
            quantity,
            notes,
        }
    }
}

/// Stile, rail and panel rows for `params`.
///
/// An even split gives three rows covering every unit. A usable custom
/// drawer split gives three rows per drawer, top to bottom.
pub fn calculate_piece_dimensions(params: &CabinetParams) -> Vec<PieceDimensions> {
    let opening = params.to_opening("");
    let settings = params.to_settings(DEFAULT_THICKNESS);
    let layout = compute_layout(&opening, &settings, &FormulaOptions::project_pieces());

    if layout.is_custom_split() {
        return layout
            .units
            .iter()
            .enumerate()
            .flat_map(|(i, unit)| {
                let note = format!("Drawer {} (top→bottom)", i + 1);
                [
                    PieceDimensions::new(
                        STILE_LABEL,
                        params.stile_width,
                        unit.stile_length,
                        2,
                        note.clone(),
                    ),
                    PieceDimensions::new(
                        RAIL_LABEL,
                        params.rail_width,
                        unit.rail_length,
                        2,
                        note.clone(),
                    ),
                    PieceDimensions::new(PANEL_LABEL, unit.panel_width, unit.panel_length, 1, note),
                ]
            })
            .collect();
    }

    let mut pieces = Vec::with_capacity(3);
    for unit in &layout.units {
        let pairs = unit.count.saturating_mul(2);
        pieces.push(PieceDimensions::new(
            STILE_LABEL,
            params.stile_width,
            unit.stile_length,
            pairs,
            "Full height of panel".to_string(),
        ));
        pieces.push(PieceDimensions::new(
            RAIL_LABEL,
            params.rail_width,
            unit.rail_length,
            pairs,
            format!("Width between stiles + {}\" for tongues", params.router_depth * 2.0),
        ));
        pieces.push(PieceDimensions::new(
            PANEL_LABEL,
            unit.panel_width,
            unit.panel_length,
            unit.count,
            format!("Fits in grooves with {}\" depth", params.router_depth),
        ));
    }
    pieces
}
