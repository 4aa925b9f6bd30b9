//! # Cabinetr Cutlist
//!
//! Dimensional calculation for frame-and-panel cabinet doors and drawer
//! fronts. Given cabinet openings and the frame stock, it derives every rail,
//! stile and center panel to cut.
//!
//! ## Modules
//!
//! - **Types**: openings, overlays, frame stock settings and cutlist items
//! - **Formula**: rounding and panel-height variants of the layout arithmetic
//! - **Layout**: overlay envelope and per-unit member dimensions
//! - **Calculator**: piece emission and merging of identical pieces
//! - **Ratios**: custom drawer split parsing, validation and normalisation
//! - **Session / Update**: an editable opening list with automatic naming
//! - **Params / Pieces**: saved project configurations and their piece breakdown
//! - **CSV**: cutlist and piece breakdown rendering
//!
//! ## Example
//!
//! ```
//! use cabinetr_cutlist::{calculate_cutlist, CabinetOpening, GlobalSettings, Overlay};
//!
//! let door = CabinetOpening::door("DOOR1", 20.0, 30.0)
//!     .with_overlay(Overlay::uniform(0.5))
//!     .with_quantity(2);
//! let cutlist = calculate_cutlist(&[door], &GlobalSettings::default());
//! assert_eq!(cutlist.len(), 3);
//! ```

pub mod calculator;
pub mod csv;
pub mod error;
pub mod formula;
pub mod layout;
pub mod params;
pub mod pieces;
pub mod ratios;
pub mod session;
pub mod types;
pub mod update;

pub use calculator::{aggregate_pieces, calculate_cutlist, CutlistCalculator};
pub use csv::{
    checked_cutlist_csv, cutlist_to_csv, pieces_to_csv, pieces_to_csv_rows, quote_cell,
    CUTLIST_CSV_HEADER, DEFAULT_CUTLIST_FILENAME, PIECES_CSV_HEADER,
};
pub use error::{CutlistError, CutlistResult, ParameterError, ParameterResult};
pub use formula::{FormulaOptions, FrameMember};
pub use layout::{compute_layout, OpeningLayout, UnitFrame};
pub use params::{CabinetParams, OpeningKind, DEFAULT_THICKNESS};
pub use pieces::{calculate_piece_dimensions, PieceDimensions};
pub use ratios::{
    even_ratios, normalize_ratios, parse_ratio, parse_ratio_inputs, ratio_sum, validate_ratios,
    DEFAULT_RATIO_TOLERANCE,
};
pub use session::{AutoNamer, OpeningSession};
pub use types::{CabinetOpening, CutlistItem, DrawerSplitMode, GlobalSettings, Overlay, PieceKind};
pub use update::{OpeningUpdate, OverlaySide, SettingsUpdate};

/// Cutlist crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
