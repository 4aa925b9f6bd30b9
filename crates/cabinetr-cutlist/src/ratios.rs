//! Drawer ratio parsing and validation
//!
//! A custom drawer split is a list of percentages, one per drawer front from
//! top to bottom. Users type them in several notations (`16.67%`, `1/6`,
//! `0.1667`, `16.67`), so parsing is lenient and accepts a numeric prefix the
//! way a form field would.

/// Allowed distance of the ratio sum from 100 before a split is rejected.
pub const DEFAULT_RATIO_TOLERANCE: f64 = 0.5;

/// Parse one ratio entry into a percentage.
///
/// - trailing `%`: the number before it is already a percentage
/// - `a/b`: a fraction of the whole, `None` when `b` is zero
/// - a bare number up to 1 is a fraction, anything larger a percentage
///
/// Returns `None` for empty or unparseable input.
pub fn parse_ratio(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(number) = trimmed.strip_suffix('%') {
        return parse_float_prefix(number);
    }

    if trimmed.contains('/') {
        let mut parts = trimmed.split('/');
        let numerator = parse_float_prefix(parts.next().unwrap_or_default())?;
        let denominator = parse_float_prefix(parts.next().unwrap_or_default())?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator * 100.0);
    }

    let value = parse_float_prefix(trimmed)?;
    Some(if value <= 1.0 { value * 100.0 } else { value })
}

/// Parse every entry, mapping unparseable ones to 0.
///
/// The flag is true when at least one entry failed to parse.
pub fn parse_ratio_inputs<S: AsRef<str>>(inputs: &[S]) -> (Vec<f64>, bool) {
    let mut any_invalid = false;
    let ratios = inputs
        .iter()
        .map(|input| {
            parse_ratio(input.as_ref()).unwrap_or_else(|| {
                any_invalid = true;
                0.0
            })
        })
        .collect();
    (ratios, any_invalid)
}

pub fn ratio_sum(ratios: &[f64]) -> f64 {
    ratios.iter().sum()
}

/// True when the list is non-empty, has no negative entry and sums to 100
/// within `tolerance`.
pub fn validate_ratios(ratios: &[f64], tolerance: f64) -> bool {
    !ratios.is_empty()
        && (ratio_sum(ratios) - 100.0).abs() <= tolerance
        && ratios.iter().all(|r| *r >= 0.0)
}

/// Scale ratios to sum to exactly 100 with two decimals.
///
/// Negatives count as 0. The rounding remainder goes to the last entry.
/// An all-zero list becomes an even split.
pub fn normalize_ratios(ratios: &[f64]) -> Vec<f64> {
    let positive: Vec<f64> = ratios.iter().map(|r| r.max(0.0)).collect();
    let sum = ratio_sum(&positive);
    if sum == 0.0 {
        return even_ratios(positive.len());
    }

    let mut rounded: Vec<f64> = positive
        .iter()
        .map(|r| round_hundredths(r / sum * 100.0))
        .collect();
    let diff = round_hundredths(100.0 - ratio_sum(&rounded));
    if let Some(last) = rounded.last_mut() {
        *last = round_hundredths(*last + diff);
    }
    rounded
}

/// `count` equal shares of 100.
pub fn even_ratios(count: usize) -> Vec<f64> {
    let share = 100.0 / count.max(1) as f64;
    vec![share; count]
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Longest leading number in `input`, ignoring leading whitespace.
///
/// `"12abc"` gives 12, `"abc"` gives `None`.
fn parse_float_prefix(input: &str) -> Option<f64> {
    let input = input.trim_start();
    input
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| input[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
