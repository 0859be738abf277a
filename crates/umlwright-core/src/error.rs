//! Error types for notation lookups.

use thiserror::Error;

/// Errors raised when resolving user-supplied notation names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("Unknown diagram kind: {0}")]
    UnknownKind(String),
}
