//! Error handling for Cabinetr
//!
//! Provides the shared error types used below the calculator layer:
//! - Length errors (parsing shop measurements such as `1 1/2`)
//! - Generic I/O and message errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised while parsing a length typed by the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LengthError {
    /// A whole-number or decimal part did not parse
    #[error("Invalid number '{part}'")]
    InvalidNumber {
        /// The offending text.
        part: String,
    },

    /// A fraction had more or fewer than two parts
    #[error("Invalid fraction format '{part}'")]
    InvalidFraction {
        /// The offending text.
        part: String,
    },

    /// A fraction had a zero denominator
    #[error("Division by zero in '{part}'")]
    DivisionByZero {
        /// The offending text.
        part: String,
    },
}

/// Main error type for Cabinetr core
#[derive(Error, Debug)]
pub enum Error {
    /// Length parsing error
    #[error(transparent)]
    Length(#[from] LengthError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a length parsing error
    pub fn is_length_error(&self) -> bool {
        matches!(self, Error::Length(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
