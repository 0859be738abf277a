//! Error types for Umlwright operations.
//!
//! Conversion and extraction never fail; they degrade to placeholders. The
//! [`UmlwrightError`] type covers the surfaces around them: reading and
//! writing files, loading configuration, and interpreting caller input.

use std::io;

use thiserror::Error;

use umlwright_core::NotationError;

/// The main error type for Umlwright operations.
#[derive(Debug, Error)]
pub enum UmlwrightError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<NotationError> for UmlwrightError {
    fn from(err: NotationError) -> Self {
        Self::Input(err.to_string())
    }
}

impl From<serde_json::Error> for UmlwrightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(err.to_string())
    }
}
