//! Error adapter for converting UmlwrightError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Every variant gets
//! a stable diagnostic code, and the ones a user can fix get a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use umlwright::{DiagramKind, UmlwrightError};

/// Adapter wrapping a [`UmlwrightError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a UmlwrightError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            UmlwrightError::Io(_) => "umlwright::io",
            UmlwrightError::Config(_) => "umlwright::config",
            UmlwrightError::Input(_) => "umlwright::input",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            UmlwrightError::Io(_) => None,
            UmlwrightError::Config(_) => Some(Box::new(
                "check the configuration file, or run without --config to use defaults",
            ) as Box<dyn fmt::Display>),
            UmlwrightError::Input(_) => {
                let kinds: Vec<&str> = DiagramKind::ALL
                    .iter()
                    .map(|kind| kind.display_name())
                    .collect();
                Some(Box::new(format!("known diagram kinds: {}", kinds.join(", ")))
                    as Box<dyn fmt::Display>)
            }
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`UmlwrightError`] so it can be rendered by miette.
pub fn to_reportable(err: &UmlwrightError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
