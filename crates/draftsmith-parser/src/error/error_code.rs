//! Error codes for the Draftsmith diagnostic system.
//!
//! - `E0xx` - Markup errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed markup.
    ///
    /// The input is not well-formed XML.
    E001,

    /// Not a draw.io document.
    ///
    /// The input is well-formed XML but its root element is neither
    /// `mxfile` nor `mxGraphModel`.
    E002,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed diagram markup",
            ErrorCode::E002 => "not a draw.io document",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
