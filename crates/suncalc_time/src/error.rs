//! Error types for calendar parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from UTC calendar parsing or validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input text is not a recognised date/time layout.
    Parse(String),
    /// Fields parsed but do not form a valid calendar instant.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for TimeError {}
