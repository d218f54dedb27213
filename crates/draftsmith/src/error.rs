//! Error types for Draftsmith operations.
//!
//! This module provides the main error type [`DraftsmithError`] which wraps
//! the error conditions that can occur while turning a drawing into sources.

use std::{io, path::PathBuf};

use thiserror::Error;

use draftsmith_parser::error::ParseError;

/// The main error type for Draftsmith operations.
///
/// The `Parse` variant keeps the drawing source alongside the structured
/// diagnostics so callers can render labeled snippets.
#[derive(Debug, Error)]
pub enum DraftsmithError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl DraftsmithError {
    /// Create a new `Parse` error with the associated drawing source.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
