//! Error and diagnostic system for the Draftsmith resolver.
//!
//! Resolution is lenient: drawings with dangling references, duplicate names
//! or stray labels still resolve. Only input that cannot be read as draw.io
//! markup at all is reported, as a [`ParseError`] holding one or more
//! [`Diagnostic`]s.
//!
//! # Example
//!
//! ```
//! # use draftsmith_parser::error::{Diagnostic, ErrorCode};
//! # use draftsmith_parser::Span;
//!
//! let diag = Diagnostic::error("malformed diagram markup: unexpected end of stream")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(120..121), "markup breaks here")
//!     .with_help("re-export the drawing as uncompressed XML");
//! ```

mod diagnostic;
mod error_code;
mod parse_error;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
