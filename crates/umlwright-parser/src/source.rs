//! Source-notation handling: body extraction and subtype detection.

use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

use log::debug;
use regex::Regex;

use umlwright_core::DiagramNotation;

static DELIMITED_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)@startuml(.*?)@enduml").expect("valid delimiter pattern"));

/// Marker that identifies text written in the source notation.
pub const SOURCE_START_MARKER: &str = "@startuml";

/// The diagram subtypes recognized in source-notation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Class,
    UseCase,
    Sequence,
    Flowchart,
    Component,
    State,
}

impl SourceKind {
    /// The target notation this subtype is rendered in.
    pub fn target(self) -> DiagramNotation {
        match self {
            SourceKind::Class => DiagramNotation::ClassDiagram,
            SourceKind::UseCase | SourceKind::Flowchart => DiagramNotation::FlowchartTopDown,
            SourceKind::Sequence => DiagramNotation::SequenceDiagram,
            SourceKind::Component => DiagramNotation::FlowchartLeftRight,
            SourceKind::State => DiagramNotation::StateDiagram,
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Class => "class",
            SourceKind::UseCase => "use case",
            SourceKind::Sequence => "sequence",
            SourceKind::Flowchart => "flowchart",
            SourceKind::Component => "component",
            SourceKind::State => "state",
        };
        f.write_str(name)
    }
}

/// Returns `true` when `text` carries the source-notation start marker.
pub fn is_source_notation(text: &str) -> bool {
    text.contains(SOURCE_START_MARKER)
}

/// Return the trimmed text between the first `@startuml`/`@enduml` pair, or
/// the whole trimmed input when no complete pair is present.
pub fn strip_delimiters(source: &str) -> &str {
    DELIMITED_BODY
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map_or(source, |body| body.as_str())
        .trim()
}

/// Classify a diagram body.
///
/// The checks run in a fixed order and the first match wins, since the
/// categories overlap lexically. Keyword checks ignore case.
pub fn detect_kind(body: &str) -> SourceKind {
    let lower = body.to_lowercase();
    let has_arrow = body.contains("-->") || body.contains("->") || body.contains("=>");

    let kind = if lower.contains("class ") {
        SourceKind::Class
    } else if lower.contains("actor ") || lower.contains("usecase ") {
        SourceKind::UseCase
    } else if has_arrow && (lower.contains("participant ") || lower.contains("actor ")) {
        SourceKind::Sequence
    } else if has_arrow {
        SourceKind::Flowchart
    } else if body.contains('[')
        && body.contains(']')
        && (lower.contains("component ") || lower.contains("interface "))
    {
        SourceKind::Component
    } else if lower.contains("state ") {
        SourceKind::State
    } else {
        debug!("No structural cue found, defaulting to flowchart");
        SourceKind::Flowchart
    };

    debug!(kind:? = kind; "Detected source diagram kind");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_delimiters() {
        let source = "intro\n@startuml\nclass A\n@enduml\ntrailer";
        assert_eq!(strip_delimiters(source), "class A");
    }

    #[test]
    fn test_strip_delimiters_without_pair() {
        assert_eq!(strip_delimiters("  A --> B \n"), "A --> B");
        assert_eq!(strip_delimiters("@startuml\nA --> B"), "@startuml\nA --> B");
    }

    #[test]
    fn test_is_source_notation() {
        assert!(is_source_notation("@startuml\nA --> B\n@enduml"));
        assert!(!is_source_notation("flowchart TD\n    A --> B"));
    }

    #[test]
    fn test_detect_class_wins_over_everything() {
        assert_eq!(
            detect_kind("class A\nactor B\nA --> B\nstate C"),
            SourceKind::Class
        );
        assert_eq!(detect_kind("CLASS Foo"), SourceKind::Class);
    }

    #[test]
    fn test_detect_use_case() {
        assert_eq!(detect_kind("actor User\nUser -> Login : uses"), SourceKind::UseCase);
        assert_eq!(detect_kind("usecase \"Log in\" as UC1"), SourceKind::UseCase);
    }

    #[test]
    fn test_detect_sequence() {
        assert_eq!(
            detect_kind("participant A\nparticipant B\nA->B: hello"),
            SourceKind::Sequence
        );
    }

    #[test]
    fn test_detect_flowchart_from_arrows() {
        assert_eq!(detect_kind("Start --> Stop"), SourceKind::Flowchart);
        assert_eq!(detect_kind("A => B"), SourceKind::Flowchart);
        // Arrows take precedence over state declarations
        assert_eq!(detect_kind("state Idle\nIdle --> Busy"), SourceKind::Flowchart);
    }

    #[test]
    fn test_detect_component() {
        assert_eq!(
            detect_kind("component [Web Server] as WS\ninterface [API]"),
            SourceKind::Component
        );
        // Brackets are required
        assert_eq!(detect_kind("component Web"), SourceKind::Flowchart);
    }

    #[test]
    fn test_detect_state() {
        assert_eq!(detect_kind("state Idle\nstate Busy"), SourceKind::State);
    }

    #[test]
    fn test_detect_default() {
        assert_eq!(detect_kind(""), SourceKind::Flowchart);
        assert_eq!(detect_kind("just some words"), SourceKind::Flowchart);
    }

    #[test]
    fn test_targets() {
        assert_eq!(SourceKind::Class.target().keyword(), "classDiagram");
        assert_eq!(SourceKind::UseCase.target().keyword(), "flowchart TD");
        assert_eq!(SourceKind::Sequence.target().keyword(), "sequenceDiagram");
        assert_eq!(SourceKind::Flowchart.target().keyword(), "flowchart TD");
        assert_eq!(SourceKind::Component.target().keyword(), "flowchart LR");
        assert_eq!(SourceKind::State.target().keyword(), "stateDiagram-v2");
    }
}
