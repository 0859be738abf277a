//! The catalog of diagram kinds a user can request.
//!
//! Each [`DiagramKind`] is bound to the [`DiagramNotation`] the generated
//! diagram is expected to use. Several kinds share a notation: use case and
//! communication diagrams are both drawn as top-down flowcharts.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Serialize;

use crate::{error::NotationError, notation::DiagramNotation};

/// A diagram kind as requested by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagramKind {
    UseCase,
    Class,
    Sequence,
    Component,
    Communication,
    StateMachine,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 6] = [
        DiagramKind::UseCase,
        DiagramKind::Class,
        DiagramKind::Sequence,
        DiagramKind::Component,
        DiagramKind::Communication,
        DiagramKind::StateMachine,
    ];

    /// Human-readable name, as shown in diagram type pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            DiagramKind::UseCase => "Use Case",
            DiagramKind::Class => "Class",
            DiagramKind::Sequence => "Sequence",
            DiagramKind::Component => "Component",
            DiagramKind::Communication => "Communication",
            DiagramKind::StateMachine => "State Machine",
        }
    }

    /// The notation a diagram of this kind is rendered in.
    pub fn notation(self) -> DiagramNotation {
        match self {
            DiagramKind::UseCase | DiagramKind::Communication => DiagramNotation::FlowchartTopDown,
            DiagramKind::Class => DiagramNotation::ClassDiagram,
            DiagramKind::Sequence => DiagramNotation::SequenceDiagram,
            DiagramKind::Component => DiagramNotation::FlowchartLeftRight,
            DiagramKind::StateMachine => DiagramNotation::StateDiagram,
        }
    }
}

/// Lowercase `name` and drop separators so "State Machine", "state-machine"
/// and "STATE_MACHINE" compare equal.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for DiagramKind {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|kind| normalize_name(kind.display_name()) == wanted)
            .ok_or_else(|| NotationError::UnknownKind(s.to_string()))
    }
}

impl Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_mapping() {
        assert_eq!(
            DiagramKind::UseCase.notation(),
            DiagramNotation::FlowchartTopDown
        );
        assert_eq!(
            DiagramKind::Communication.notation(),
            DiagramNotation::FlowchartTopDown
        );
        assert_eq!(
            DiagramKind::Component.notation(),
            DiagramNotation::FlowchartLeftRight
        );
        assert_eq!(
            DiagramKind::StateMachine.notation(),
            DiagramNotation::StateDiagram
        );
    }

    #[test]
    fn test_from_str_accepts_display_names() {
        for kind in DiagramKind::ALL {
            assert_eq!(kind.display_name().parse::<DiagramKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!(
            "state-machine".parse::<DiagramKind>().unwrap(),
            DiagramKind::StateMachine
        );
        assert_eq!(
            "USE_CASE".parse::<DiagramKind>().unwrap(),
            DiagramKind::UseCase
        );
        assert_eq!(" class ".parse::<DiagramKind>().unwrap(), DiagramKind::Class);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Deployment".parse::<DiagramKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown diagram kind: Deployment");
    }
}
