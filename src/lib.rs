//! # Cabinetr
//!
//! Cutlist calculator for frame-and-panel cabinet doors and drawer fronts.
//! Given the cabinet openings, overlays and frame stock it derives every
//! rail, stile and center panel to cut, and keeps named projects that can be
//! exported, imported and rendered as CSV.
//!
//! ## Architecture
//!
//! Cabinetr is organized as a workspace with multiple crates:
//!
//! 1. **cabinetr-core** - Error type, 1/16" rounding, inch formatting
//! 2. **cabinetr-cutlist** - Layout arithmetic, piece emission, aggregation, CSV
//! 3. **cabinetr-projects** - Project model, JSON store, import/export
//! 4. **cabinetr-settings** - Configuration files and platform directories
//! 5. **cabinetr** - Command line front end that ties the crates together

pub mod cli;

pub use cabinetr_core::{format_inches, round_up_to_sixteenth, Error, Result};

pub use cabinetr_cutlist::{
    calculate_cutlist, calculate_piece_dimensions, cutlist_to_csv, CabinetOpening, CabinetParams,
    CutlistCalculator, CutlistError, CutlistItem, FormulaOptions, FrameMember, GlobalSettings,
    OpeningSession, Overlay, PieceKind,
};

pub use cabinetr_projects::{Cabinet, CabinetConfiguration, ProjectError, ProjectStore};

pub use cabinetr_settings::{default_config_path, Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log lines go to stderr so command output on stdout stays clean. The
/// `RUST_LOG` environment variable overrides the default level, which is
/// `info` when `verbose` is set and `warn` otherwise.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
