//! Multi-project cutlist CSV
//!
//! One section per project configuration (or per project without any): a
//! quoted title block, the piece header and the quoted piece rows.

use crate::error::ProjectResult;
use crate::model::Cabinet;
use cabinetr_cutlist::{
    calculate_piece_dimensions, pieces_to_csv_rows, quote_cell, PIECES_CSV_HEADER,
};
use chrono::NaiveDate;
use tracing::debug;

/// Cutlist of every section of every project.
///
/// Refused with the first unusable custom drawer split found, so a partial
/// report is never written.
pub fn all_cabinets_csv(cabinets: &[Cabinet]) -> ProjectResult<String> {
    for cabinet in cabinets {
        cabinet.check_ratios()?;
    }

    let mut out = String::new();
    let mut first = true;
    for cabinet in cabinets {
        for (title, params) in cabinet.sections() {
            if !first {
                out.push('\n');
            }
            first = false;

            for line in [
                format!("=== {} ===", title),
                format!("Type: {}", params.kind_label()),
                format!(
                    "Opening: {}\" x {}\"",
                    params.opening_width, params.opening_height
                ),
                format!("Quantity: {}", params.quantity),
            ] {
                out.push_str(&quote_cell(&line));
                out.push('\n');
            }
            out.push('\n');
            out.push_str(PIECES_CSV_HEADER);
            out.push('\n');
            for row in pieces_to_csv_rows(&calculate_piece_dimensions(params)) {
                out.push_str(&row);
                out.push('\n');
            }
        }
    }

    debug!("Rendered project CSV for {} project(s)", cabinets.len());
    Ok(out)
}

/// Cutlist of a single project's sections.
pub fn cabinet_csv(cabinet: &Cabinet) -> ProjectResult<String> {
    all_cabinets_csv(std::slice::from_ref(cabinet))
}

pub fn all_cutlists_file_name(date: NaiveDate) -> String {
    format!("all-cutlists_{}.csv", date)
}
