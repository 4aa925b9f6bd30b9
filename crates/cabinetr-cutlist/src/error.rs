//! Error types for the cutlist crate.
//!
//! The calculator itself never fails: bad numbers flow through as NaN or
//! negative lengths so the caller can flag them. These errors cover the
//! explicit checks around it: input validation, session edits, and CSV export
//! of drawer sets whose custom ratios do not add up.

use thiserror::Error;

/// Errors that can occur around cutlist operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CutlistError {
    /// A custom drawer split is not usable for export.
    #[error("Invalid drawer ratios for '{name}': sum is {sum:.2}%, expected 100%")]
    InvalidRatios { name: String, sum: f64 },

    /// An opening index is out of range.
    #[error("Opening not found at index {0}")]
    OpeningNotFound(usize),

    /// An input validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to opening and frame-stock validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A value that must be strictly positive is not.
    #[error("'{name}' must be greater than zero (got {value})")]
    NotPositive { name: String, value: f64 },

    /// A value that must be zero or more is negative.
    #[error("'{name}' must not be negative (got {value})")]
    Negative { name: String, value: f64 },

    /// A value is NaN or infinite.
    #[error("'{name}' is not a finite number")]
    NotFinite { name: String },

    /// An opening has a quantity of zero.
    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    /// The frame stock leaves no room for the panel.
    #[error("Frame stock leaves no material for '{piece}' ({value:.3}\")")]
    NoMaterial { piece: String, value: f64 },
}

/// Result type alias for cutlist operations.
pub type CutlistResult<T> = Result<T, CutlistError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

pub(crate) fn check_positive(name: &str, value: f64) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite {
            name: name.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ParameterError::NotPositive {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

pub(crate) fn check_non_negative(name: &str, value: f64) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite {
            name: name.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ParameterError::Negative {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}
