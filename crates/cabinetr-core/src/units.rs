//! Inch unit utilities
//!
//! All shop dimensions are carried as decimal inches (`f64`). This module
//! snaps them to the 1/16" grid the saw and router work to, and converts
//! between decimal inches and the whole-plus-fraction notation woodworkers
//! type and read (`8 3/16`).

use crate::error::LengthError;

/// Denominator of the shop grid.
pub const SIXTEENTHS_PER_INCH: f64 = 16.0;

/// Distance (in sixteenths) under which a value counts as already on the grid.
const GRID_SNAP_TOLERANCE: f64 = 1e-9 * SIXTEENTHS_PER_INCH;

/// Round up to the next multiple of 1/16".
///
/// Returns the smallest multiple of 1/16 that is `>= value`. Values that sit
/// on the grid apart from floating-point noise are returned on the grid
/// instead of being bumped a full sixteenth. NaN and infinities pass through.
pub fn round_up_to_sixteenth(value: f64) -> f64 {
    let scaled = value * SIXTEENTHS_PER_INCH;
    let nearest = scaled.round();
    if (scaled - nearest).abs() <= GRID_SNAP_TOLERANCE {
        nearest / SIXTEENTHS_PER_INCH
    } else {
        scaled.ceil() / SIXTEENTHS_PER_INCH
    }
}

/// True when `value` lies on the 1/16" grid.
pub fn is_sixteenth_multiple(value: f64) -> bool {
    let scaled = value * SIXTEENTHS_PER_INCH;
    (scaled - scaled.round()).abs() <= GRID_SNAP_TOLERANCE
}

/// Format a length as decimal inches with three places, the precision used
/// by cutlist tables and CSV files.
///
/// Halves round away from zero, so odd sixteenths read `10.063` rather than
/// the `10.062` that `{:.3}` alone would print.
pub fn format_inches(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    format!("{:.3}", (value * 1000.0).round() / 1000.0)
}

/// Format a length as a reduced shop fraction to the nearest 1/16".
///
/// `8.1875` becomes `8 3/16`, `0.5` becomes `1/2`, `25.0` becomes `25`.
pub fn format_fraction(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sixteenths = (value.abs() * SIXTEENTHS_PER_INCH).round() as u64;
    let sign = if value < 0.0 && sixteenths > 0 { "-" } else { "" };
    let whole = sixteenths / 16;
    let mut numerator = sixteenths % 16;
    let mut denominator = 16;
    while numerator > 0 && numerator % 2 == 0 {
        numerator /= 2;
        denominator /= 2;
    }

    match (whole, numerator) {
        (w, 0) => format!("{sign}{w}"),
        (0, n) => format!("{sign}{n}/{denominator}"),
        (w, n) => format!("{sign}{w} {n}/{denominator}"),
    }
}

/// Parse a length in inches.
///
/// Accepts decimals (`12.5`), fractions (`5/8`), whole-plus-fraction
/// (`1 1/2`), a leading minus sign and a trailing inch mark (`"`).
/// Empty input parses as zero.
pub fn parse_length(input: &str) -> Result<f64, LengthError> {
    let input = input.trim().trim_end_matches('"').trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let mut total_inches = 0.0;
    for part in body.split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err(LengthError::InvalidFraction {
                    part: part.to_string(),
                });
            }
            let numerator = parse_number(frac_parts[0])?;
            let denominator = parse_number(frac_parts[1])?;
            if denominator == 0.0 {
                return Err(LengthError::DivisionByZero {
                    part: part.to_string(),
                });
            }
            total_inches += numerator / denominator;
        } else {
            total_inches += parse_number(part)?;
        }
    }

    Ok(if negative { -total_inches } else { total_inches })
}

fn parse_number(part: &str) -> Result<f64, LengthError> {
    part.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LengthError::InvalidNumber {
            part: part.to_string(),
        })
}
