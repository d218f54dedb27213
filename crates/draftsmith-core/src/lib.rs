//! Draftsmith Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Draftsmith
//! resolver and emitter. It includes:
//!
//! - **Identifiers**: Diagram cell identifiers ([`identifier::CellId`])
//! - **Model**: The canonical class model ([`model`] module)
//! - **Naming**: Type and member naming rules ([`naming`] module)

pub mod identifier;
pub mod model;
pub mod naming;
