//! Umlwright notation converter.
//!
//! Translates a diagram written in a linear PlantUML-style source notation
//! into the equivalent Mermaid-style target notation. Conversion is
//! deliberately best-effort: every subtype is handled by a small set of
//! independent regular-expression passes rather than a grammar, and input the
//! passes do not recognize is skipped.
//!
//! # Pipeline
//!
//! 1. [`strip_delimiters`] removes the `@startuml`/`@enduml` pair.
//! 2. [`detect_kind`] classifies the body with an ordered checklist.
//! 3. [`convert_as`] emits the target text for the chosen [`SourceKind`].
//!
//! The result always opens with the keyword line of the detected notation,
//! so even degenerate input produces a well-formed skeleton.
//!
//! # Example
//!
//! ```
//! use umlwright_core::DiagramNotation;
//!
//! let snippet = umlwright_parser::convert("@startuml\nclass User\n@enduml", None);
//! assert_eq!(snippet.notation(), DiagramNotation::ClassDiagram);
//! assert_eq!(snippet.text(), "classDiagram\n    class User\n");
//! ```

mod convert;
mod records;
mod source;

pub use convert::{parse_entities, scan_relations};
pub use records::{EntityRecord, Member, RelationKind, RelationRecord, Visibility};
pub use source::{SOURCE_START_MARKER, SourceKind, detect_kind, is_source_notation, strip_delimiters};

use log::{debug, info};

use umlwright_core::{DiagramKind, DiagramSnippet};

/// Convert source-notation text into a target-notation snippet.
///
/// `hint` names the diagram kind the caller asked for. It is only used for
/// diagnostics: detection is self-contained, and a hint that disagrees with
/// the detected notation is logged, not enforced.
pub fn convert(source: &str, hint: Option<&str>) -> DiagramSnippet {
    let body = strip_delimiters(source);
    let kind = detect_kind(body);

    if let Some(hint) = hint {
        match hint.parse::<DiagramKind>() {
            Ok(requested) if requested.notation() != kind.target() => {
                debug!(
                    requested:? = requested,
                    detected:? = kind;
                    "Detected diagram kind differs from the requested one"
                );
            }
            Ok(_) => {}
            Err(err) => debug!(hint = hint, err:? = err; "Ignoring unrecognized diagram hint"),
        }
    }

    let snippet = convert_as(body, kind);
    info!(
        kind:? = kind,
        output_len = snippet.text().len();
        "Converted diagram"
    );
    snippet
}

/// Convert a delimiter-free `body` with the emitter for `kind`, skipping detection.
pub fn convert_as(body: &str, kind: SourceKind) -> DiagramSnippet {
    convert::emit(body, kind)
}

#[cfg(test)]
mod tests {
    use umlwright_core::{DiagramNotation, DiagramValidator};

    use super::*;

    #[test]
    fn test_class_scenario() {
        let snippet = convert("class User { +String username +login() }", None);
        let lines: Vec<&str> = snippet.text().lines().map(str::trim).collect();
        assert_eq!(
            lines,
            [
                "classDiagram",
                "class User",
                "User : +String username",
                "User : +login()"
            ]
        );
    }

    #[test]
    fn test_sequence_scenario() {
        let snippet = convert("participant A\nparticipant B\nA->B: hello\nA-->B: hi", None);
        assert_eq!(snippet.notation(), DiagramNotation::SequenceDiagram);
        let lines: Vec<&str> = snippet.text().lines().map(str::trim).collect();
        assert_eq!(
            lines,
            [
                "sequenceDiagram",
                "participant A as A",
                "participant B as B",
                "A->B: hello",
                "A->>B: hi"
            ]
        );
    }

    #[test]
    fn test_class_converter_association() {
        let snippet = convert_as("A -- B", SourceKind::Class);
        assert_eq!(snippet.text(), "classDiagram\n    A -- B\n");
    }

    #[test]
    fn test_class_converter_inheritance_duplicates_association() {
        let snippet = convert_as("A <|-- B", SourceKind::Class);
        let lines: Vec<&str> = snippet.text().lines().skip(1).map(str::trim).collect();
        assert_eq!(lines, ["A -- B", "A <|-- B"]);
    }

    #[test]
    fn test_delimited_use_case() {
        let source = "@startuml\nactor Shopper\nusecase \"Checkout\" as UC1\nShopper -> UC1 : buys\n@enduml";
        let snippet = convert(source, Some("Use Case"));
        assert_eq!(
            snippet.text(),
            "flowchart TD\n    Shopper[👤 Shopper]\n    UC1[(Checkout)]\n    Shopper -->|uses| UC1\n"
        );
    }

    #[test]
    fn test_component_source() {
        let snippet = convert("component [Gateway] as GW\ninterface [Orders]", None);
        assert_eq!(snippet.notation(), DiagramNotation::FlowchartLeftRight);
        assert_eq!(
            snippet.text(),
            "flowchart LR\n    GW[Gateway]\n    Orders[Orders]\n"
        );
    }

    #[test]
    fn test_state_source() {
        let snippet = convert("state Idle\nstate Running", Some("State Machine"));
        assert_eq!(
            snippet.text(),
            "stateDiagram-v2\n    Idle: Idle\n    Running: Running\n"
        );
    }

    #[test]
    fn test_degenerate_input_yields_skeleton() {
        for source in ["", "   ", "@startuml\n@enduml", "no cues at all"] {
            let snippet = convert(source, None);
            assert_eq!(snippet.text(), "flowchart TD\n", "{source:?}");
            assert!(DiagramValidator::default().is_valid(snippet.text()));
        }
    }

    #[test]
    fn test_header_only_inputs_stay_header_only() {
        let cases = [
            (SourceKind::Class, "classDiagram\n"),
            (SourceKind::UseCase, "flowchart TD\n"),
            (SourceKind::Sequence, "sequenceDiagram\n"),
            (SourceKind::Flowchart, "flowchart TD\n"),
            (SourceKind::Component, "flowchart LR\n"),
            (SourceKind::State, "stateDiagram-v2\n"),
        ];
        for (kind, expected) in cases {
            assert_eq!(convert_as("", kind).text(), expected, "{kind}");
        }
    }

    #[test]
    fn test_hint_does_not_change_detection() {
        let with_hint = convert("Start --> Stop", Some("Class"));
        let without_hint = convert("Start --> Stop", None);
        assert_eq!(with_hint, without_hint);

        let unknown = convert("Start --> Stop", Some("not a kind"));
        assert_eq!(unknown, without_hint);
    }
}
