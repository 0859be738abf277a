//! Umlwright Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Umlwright
//! converter and extractor. It includes:
//!
//! - **Notations**: target notation tags and their opening keywords ([`DiagramNotation`])
//! - **Snippets**: immutable diagram text tagged with its notation ([`DiagramSnippet`])
//! - **Kinds**: the catalog of diagram kinds a user can request ([`DiagramKind`])
//! - **Validation**: the structural smoke test for snippets ([`DiagramValidator`])

pub mod error;
pub mod kind;
pub mod notation;
pub mod validate;

pub use error::NotationError;
pub use kind::DiagramKind;
pub use notation::{
    AUXILIARY_START_KEYWORDS, DiagramNotation, DiagramSnippet, NOTATION_START_KEYWORDS,
    PLACEHOLDER_DIAGRAM,
};
pub use validate::{DiagramValidator, ValidationFailure};
