//! Identifiers for diagram cells.
//!
//! Every cell in a draw.io drawing carries a string `id` that is unique within
//! the document. [`CellId`] wraps that string so entity and edge references
//! cannot be confused with display text.

use std::{borrow::Borrow, fmt};

/// Identifier of a cell in the source drawing.
///
/// `CellId` implements [`Borrow<str>`], so maps keyed by `CellId` can be
/// queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(String);

impl CellId {
    /// Creates a new identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CellId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CellId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
