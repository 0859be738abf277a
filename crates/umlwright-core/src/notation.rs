//! Target notation tags and the keyword tables shared by every Umlwright crate.
//!
//! A [`DiagramNotation`] identifies one textual diagram dialect by the keyword
//! line that must open a well-formed snippet. [`NOTATION_START_KEYWORDS`] and
//! [`AUXILIARY_START_KEYWORDS`] list the opening keywords recognized when
//! searching free text for the beginning of a diagram.

use std::fmt::{self, Display};

use serde::Serialize;

/// Keywords that open a snippet in one of the target notations.
///
/// Longer keywords are listed before their prefixes (`stateDiagram-v2` before
/// `stateDiagram`) so alternations built from this table prefer the longer form.
pub const NOTATION_START_KEYWORDS: &[&str] = &[
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram-v2",
    "stateDiagram",
];

/// Other diagram-opening keywords. These are also ordinary words, so a search
/// only honors them at the start of a line and after every
/// [`NOTATION_START_KEYWORDS`] entry has failed to match.
pub const AUXILIARY_START_KEYWORDS: &[&str] = &["gantt", "pie", "journey", "gitGraph"];

/// Placeholder diagram used when a snippet turns out to be empty.
pub const PLACEHOLDER_DIAGRAM: &str = "flowchart TD\n    A[No valid diagram code generated]";

/// The target notations a converted or validated snippet can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagramNotation {
    /// `classDiagram`
    ClassDiagram,
    /// `sequenceDiagram`
    SequenceDiagram,
    /// `stateDiagram-v2`
    StateDiagram,
    /// `flowchart TD`
    FlowchartTopDown,
    /// `flowchart LR`
    FlowchartLeftRight,
}

impl DiagramNotation {
    /// All notations, in keyword-table order.
    pub const ALL: [DiagramNotation; 5] = [
        DiagramNotation::ClassDiagram,
        DiagramNotation::SequenceDiagram,
        DiagramNotation::StateDiagram,
        DiagramNotation::FlowchartTopDown,
        DiagramNotation::FlowchartLeftRight,
    ];

    /// The keyword line that opens a snippet in this notation.
    pub fn keyword(self) -> &'static str {
        match self {
            DiagramNotation::ClassDiagram => "classDiagram",
            DiagramNotation::SequenceDiagram => "sequenceDiagram",
            DiagramNotation::StateDiagram => "stateDiagram-v2",
            DiagramNotation::FlowchartTopDown => "flowchart TD",
            DiagramNotation::FlowchartLeftRight => "flowchart LR",
        }
    }

    /// Infer the notation from the leading keyword of `text`.
    ///
    /// Leading whitespace is ignored. Returns `None` when the text does not open
    /// with one of the five notation keywords.
    ///
    /// # Examples
    ///
    /// ```
    /// # use umlwright_core::DiagramNotation;
    /// assert_eq!(
    ///     DiagramNotation::detect("  flowchart LR\n    A --> B"),
    ///     Some(DiagramNotation::FlowchartLeftRight),
    /// );
    /// assert_eq!(DiagramNotation::detect("gantt"), None);
    /// ```
    pub fn detect(text: &str) -> Option<Self> {
        let text = text.trim_start();
        Self::ALL
            .into_iter()
            .find(|notation| text.starts_with(notation.keyword()))
    }
}

impl Display for DiagramNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A self-contained diagram text together with the notation it is written in.
///
/// Snippets are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSnippet {
    text: String,
    notation: DiagramNotation,
}

impl DiagramSnippet {
    /// Create a snippet from already rendered text.
    pub fn new(text: impl Into<String>, notation: DiagramNotation) -> Self {
        Self {
            text: text.into(),
            notation,
        }
    }

    /// The diagram text, starting with the notation keyword.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The notation the text is written in.
    pub fn notation(&self) -> DiagramNotation {
        self.notation
    }

    /// Consume the snippet and return its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Display for DiagramSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
