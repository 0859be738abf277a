//! Structural smoke test for diagram snippets.
//!
//! [`DiagramValidator`] only checks that a text is long enough and opens with
//! a known notation keyword. It does not parse the diagram body.

use log::trace;
use thiserror::Error;

use crate::notation::DiagramNotation;

/// Default minimum length, in characters, of a trimmed snippet.
pub const DEFAULT_MIN_LENGTH: usize = 10;

/// Why a snippet was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("diagram text is empty")]
    Empty,

    #[error("diagram text has {length} characters, at least {minimum} required")]
    TooShort { length: usize, minimum: usize },

    #[error("diagram text does not start with a known notation keyword")]
    UnknownKeyword,
}

/// Checks that a candidate string is plausibly a diagram in a target notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramValidator {
    min_length: usize,
}

impl Default for DiagramValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl DiagramValidator {
    /// Create a validator that rejects snippets shorter than `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Returns the configured minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Check `text` and report the first failed condition.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] when the trimmed text is empty or too
    /// short, or when it does not open with one of the notation keywords.
    pub fn check(&self, text: &str) -> Result<(), ValidationFailure> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationFailure::Empty);
        }

        let length = trimmed.chars().count();
        if length < self.min_length {
            return Err(ValidationFailure::TooShort {
                length,
                minimum: self.min_length,
            });
        }

        match DiagramNotation::detect(trimmed) {
            Some(notation) => {
                trace!(notation:? = notation; "Snippet passed validation");
                Ok(())
            }
            None => Err(ValidationFailure::UnknownKeyword),
        }
    }

    /// Returns `true` when [`check`](Self::check) passes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use umlwright_core::DiagramValidator;
    /// let validator = DiagramValidator::default();
    /// assert!(!validator.is_valid("hi"));
    /// assert!(validator.is_valid("classDiagram\n class A"));
    /// ```
    pub fn is_valid(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_text() {
        let validator = DiagramValidator::default();
        assert!(!validator.is_valid("hi"));
        assert_eq!(
            validator.check("hi"),
            Err(ValidationFailure::TooShort {
                length: 2,
                minimum: 10
            })
        );
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        let validator = DiagramValidator::default();
        assert_eq!(validator.check(""), Err(ValidationFailure::Empty));
        assert_eq!(validator.check(" \n\t "), Err(ValidationFailure::Empty));
    }

    #[test]
    fn test_accepts_class_diagram() {
        let validator = DiagramValidator::default();
        assert!(validator.is_valid("classDiagram\n class A"));
    }

    #[test]
    fn test_accepts_leading_whitespace() {
        let validator = DiagramValidator::default();
        assert!(validator.is_valid("\n\n   sequenceDiagram\n    A->B: hi"));
    }

    #[test]
    fn test_rejects_unknown_keyword() {
        let validator = DiagramValidator::default();
        assert_eq!(
            validator.check("graph TD\n    A --> B"),
            Err(ValidationFailure::UnknownKeyword)
        );
        assert!(!validator.is_valid("Use Agile because it adapts"));
    }

    #[test]
    fn test_bare_keywords_pass_default_threshold() {
        let validator = DiagramValidator::default();
        for notation in DiagramNotation::ALL {
            assert!(validator.is_valid(notation.keyword()), "{notation}");
        }
    }

    #[test]
    fn test_custom_min_length() {
        let validator = DiagramValidator::new(40);
        assert!(!validator.is_valid("flowchart TD\n    A --> B"));
        assert_eq!(validator.min_length(), 40);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn notation_strategy() -> impl Strategy<Value = DiagramNotation> {
        prop::sample::select(DiagramNotation::ALL.to_vec())
    }

    /// A keyword line followed by any body is always accepted.
    fn check_keyword_prefix_is_valid(
        notation: DiagramNotation,
        body: &str,
    ) -> Result<(), TestCaseError> {
        let text = format!("{}\n{body}", notation.keyword());
        prop_assert!(DiagramValidator::default().is_valid(&text), "{text:?}");
        Ok(())
    }

    /// Anything shorter than the threshold once trimmed is rejected.
    fn check_short_text_is_invalid(text: &str) -> Result<(), TestCaseError> {
        prop_assume!(text.trim().chars().count() < DEFAULT_MIN_LENGTH);
        prop_assert!(!DiagramValidator::default().is_valid(text));
        Ok(())
    }

    proptest! {
        #[test]
        fn keyword_prefix_is_valid(notation in notation_strategy(), body in ".{0,40}") {
            check_keyword_prefix_is_valid(notation, &body)?;
        }

        #[test]
        fn short_text_is_invalid(text in "\\PC{0,9}") {
            check_short_text_is_invalid(&text)?;
        }
    }
}
