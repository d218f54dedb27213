//! # Draftsmith Parser
//!
//! Resolver for draw.io drawings. This crate turns the raw cell markup of a
//! drawing into the canonical [`ResolvedModel`](draftsmith_core::model::ResolvedModel):
//!
//! 1. **Ingest** - Classify every `mxCell` as entity, edge, detached label or noise
//! 2. **Classify edges** - Open-headed edges become inheritance, the rest associations
//! 3. **Stitch labels** - Detached labels fill in the text of their owning edge
//!
//! ## Usage
//!
//! ```
//! # use draftsmith_parser::{resolve, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <mxGraphModel><root>
//!           <mxCell id="0"/>
//!           <mxCell id="1" parent="0"/>
//!           <mxCell id="2" value="Car" vertex="1" parent="1"/>
//!         </root></mxGraphModel>
//!     "#;
//!
//!     let model = resolve(source)?;
//!     assert_eq!(model.entity_count(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod cell;
mod label;
mod resolve;
mod span;
mod style;
mod text;

pub use label::{RelationLabel, cardinality_of, parse_label};
pub use resolve::resolve;
pub use span::Span;
pub use text::strip_markup;
