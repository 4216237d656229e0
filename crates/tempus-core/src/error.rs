//! Error types for the Tempus library.
//!
//! This module defines the error types used throughout Tempus,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Tempus operations.
pub type TempusResult<T> = Result<T, TempusError>;

/// The main error type for Tempus operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TempusError {
    /// Month number outside the 1-12 range.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The offending month number.
        month: u32,
    },

    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Timezone identifier not present in the IANA database.
    #[error("Unknown timezone: {name}")]
    InvalidTimezone {
        /// The unresolvable identifier.
        name: String,
    },

    /// A date-time string could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
}

impl TempusError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown timezone error.
    #[must_use]
    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        Self::InvalidTimezone { name: name.into() }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
