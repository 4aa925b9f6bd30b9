//! Cutlist calculation
//!
//! Emits rail, stile and panel pieces for every opening and merges pieces
//! that would be cut identically.

use crate::formula::FormulaOptions;
use crate::layout::{compute_layout, OpeningLayout, UnitFrame};
use crate::types::{CabinetOpening, CutlistItem, GlobalSettings, PieceKind};
use cabinetr_core::format_inches;
use std::collections::HashMap;
use tracing::debug;

/// Calculates cutlists for a fixed set of frame stock settings.
#[derive(Debug, Clone, Default)]
pub struct CutlistCalculator {
    settings: GlobalSettings,
    options: FormulaOptions,
}

impl CutlistCalculator {
    pub fn new(settings: GlobalSettings) -> Self {
        Self::with_options(settings, FormulaOptions::canonical())
    }

    pub fn with_options(settings: GlobalSettings, options: FormulaOptions) -> Self {
        Self { settings, options }
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn options(&self) -> &FormulaOptions {
        &self.options
    }

    pub fn layout(&self, opening: &CabinetOpening) -> OpeningLayout {
        compute_layout(opening, &self.settings, &self.options)
    }

    /// Pieces for one opening before merging, in rail, stile, panel order per
    /// unit frame.
    pub fn pieces_for(&self, opening: &CabinetOpening) -> Vec<CutlistItem> {
        let layout = self.layout(opening);
        layout
            .units
            .iter()
            .flat_map(|unit| self.unit_pieces(&opening.name, unit))
            .collect()
    }

    /// Full cutlist for `openings`, merged and in first-seen order.
    pub fn calculate(&self, openings: &[CabinetOpening]) -> Vec<CutlistItem> {
        let raw: Vec<CutlistItem> = openings.iter().flat_map(|o| self.pieces_for(o)).collect();
        let raw_count = raw.len();
        let merged = aggregate_pieces(raw);
        debug!(
            "Calculated cutlist for {} opening(s): {} piece line(s), {} after merging",
            openings.len(),
            raw_count,
            merged.len()
        );
        merged
    }

    fn unit_pieces(&self, name: &str, unit: &UnitFrame) -> [CutlistItem; 3] {
        let s = &self.settings;
        let item = |piece: PieceKind, length: f64, width: f64, quantity: u32| CutlistItem {
            piece,
            name: format!("{}_{}", name, piece.group_suffix()),
            length,
            width,
            thickness: s.thickness,
            quantity,
        };
        let pairs = unit.count.saturating_mul(2);

        [
            item(PieceKind::Rail, unit.rail_length, s.rail_width, pairs),
            item(PieceKind::Stile, unit.stile_length, s.stile_width, pairs),
            item(PieceKind::Panel, unit.panel_length, unit.panel_width, unit.count),
        ]
    }
}

/// Calculate the cutlist with the canonical formula.
pub fn calculate_cutlist(
    openings: &[CabinetOpening],
    settings: &GlobalSettings,
) -> Vec<CutlistItem> {
    CutlistCalculator::new(*settings).calculate(openings)
}

/// Merge pieces that share name, length and width to three decimals, and
/// thickness. Quantities are summed; the first occurrence keeps its place.
pub fn aggregate_pieces<I>(pieces: I) -> Vec<CutlistItem>
where
    I: IntoIterator<Item = CutlistItem>,
{
    let mut merged: Vec<CutlistItem> = Vec::new();
    let mut index: HashMap<(String, String, String, u64), usize> = HashMap::new();

    for piece in pieces {
        let key = (
            piece.name.clone(),
            format_inches(piece.length),
            format_inches(piece.width),
            piece.thickness.to_bits(),
        );
        match index.get(&key) {
            Some(&i) => merged[i].quantity += piece.quantity,
            None => {
                index.insert(key, merged.len());
                merged.push(piece);
            }
        }
    }

    merged
}
