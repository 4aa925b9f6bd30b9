//! # Cabinetr Core
//!
//! Shared building blocks for the Cabinetr workspace: the unified error type
//! and inch unit handling (1/16" rounding, shop fractions).

pub mod error;
pub mod units;

pub use error::{Error, LengthError, Result};
pub use units::{
    format_fraction, format_inches, is_sixteenth_multiple, parse_length, round_up_to_sixteenth,
    SIXTEENTHS_PER_INCH,
};
