//! CSV rendering of cutlists and piece breakdowns

use crate::calculator::CutlistCalculator;
use crate::error::{CutlistError, CutlistResult};
use crate::pieces::PieceDimensions;
use crate::types::{CabinetOpening, CutlistItem};
use cabinetr_core::format_inches;

pub const CUTLIST_CSV_HEADER: &str =
    "Name,Piece,Length (inches),Width (inches),Thickness (inches),Quantity";

pub const PIECES_CSV_HEADER: &str = "Piece Type,Width (inches),Length (inches),Quantity,Notes";

pub const DEFAULT_CUTLIST_FILENAME: &str = "cabinet_cutlist.csv";

/// Render the cutlist table. Plain cells are written bare; a name containing a
/// comma, quote or line break is quoted.
pub fn cutlist_to_csv(items: &[CutlistItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CUTLIST_CSV_HEADER.to_string());
    for item in items {
        lines.push(
            [
                csv_field(&item.name),
                item.piece.to_string(),
                format_inches(item.length),
                format_inches(item.width),
                format_inches(item.thickness),
                item.quantity.to_string(),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

/// Calculate and render the cutlist for `openings`, refusing drawer sets whose
/// custom split cannot be applied.
pub fn checked_cutlist_csv(
    openings: &[CabinetOpening],
    calculator: &CutlistCalculator,
) -> CutlistResult<String> {
    if let Some(opening) = openings.iter().find(|o| !o.ratios_ready()) {
        return Err(CutlistError::InvalidRatios {
            name: opening.name.clone(),
            sum: opening.ratio_total(),
        });
    }
    Ok(cutlist_to_csv(&calculator.calculate(openings)))
}

/// Piece rows with every cell quoted, without a header.
pub fn pieces_to_csv_rows(pieces: &[PieceDimensions]) -> Vec<String> {
    pieces
        .iter()
        .map(|piece| {
            [
                piece.name.clone(),
                format_inches(piece.width),
                format_inches(piece.length),
                piece.quantity.to_string(),
                piece.notes.clone(),
            ]
            .iter()
            .map(|cell| quote_cell(cell))
            .collect::<Vec<_>>()
            .join(",")
        })
        .collect()
}

/// Header plus quoted piece rows.
pub fn pieces_to_csv(pieces: &[PieceDimensions]) -> String {
    let mut lines = vec![PIECES_CSV_HEADER.to_string()];
    lines.extend(pieces_to_csv_rows(pieces));
    lines.join("\n")
}

/// Wrap in double quotes, doubling any quote inside.
pub fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn csv_field(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        quote_cell(cell)
    } else {
        cell.to_string()
    }
}
