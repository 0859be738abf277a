//! Intermediate records used while converting class diagrams.
//!
//! These live only for the duration of one conversion call.

use std::fmt::{self, Display};

/// Visibility of a class member, taken from a `+` or `-` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
    Unspecified,
}

/// One member line of a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    visibility: Visibility,
    text: String,
}

impl Member {
    /// Tag a raw member segment with its visibility.
    ///
    /// A segment containing `+` is public and one containing `-` is private,
    /// checked in that order. A tagged member keeps only the text after the
    /// first marker, so `String first-name` becomes `-name`. Returns `None`
    /// for a blank segment.
    pub fn parse(segment: &str) -> Option<Self> {
        let segment = segment.trim();
        if segment.is_empty() {
            return None;
        }

        let (visibility, text) = if let Some((_, rest)) = segment.split_once('+') {
            (Visibility::Public, rest.trim())
        } else if let Some((_, rest)) = segment.split_once('-') {
            (Visibility::Private, rest.trim())
        } else {
            (Visibility::Unspecified, segment)
        };

        Some(Self {
            visibility,
            text: text.to_string(),
        })
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visibility {
            Visibility::Public => write!(f, "+{}", self.text),
            Visibility::Private => write!(f, "-{}", self.text),
            Visibility::Unspecified => f.write_str(&self.text),
        }
    }
}

/// A declared class with its members in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    name: String,
    members: Vec<Member>,
}

impl EntityRecord {
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

/// The relation kinds recognized between two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Association,
    Dependency,
    Inheritance,
    Composition,
    Aggregation,
}

impl RelationKind {
    /// Scan order of the relation passes.
    pub const ALL: [RelationKind; 5] = [
        RelationKind::Association,
        RelationKind::Dependency,
        RelationKind::Inheritance,
        RelationKind::Composition,
        RelationKind::Aggregation,
    ];

    /// The token that marks this relation in the source notation.
    pub fn source_token(self) -> &'static str {
        match self {
            RelationKind::Association => "--",
            RelationKind::Dependency => "..",
            RelationKind::Inheritance => "<|--",
            RelationKind::Composition => "*--",
            RelationKind::Aggregation => "o--",
        }
    }

    /// The token emitted for this relation in the target notation.
    ///
    /// Both notations happen to spell class relations the same way.
    pub fn target_token(self) -> &'static str {
        self.source_token()
    }
}

/// A `(source, target, kind)` relation found in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRecord {
    source: String,
    target: String,
    kind: RelationKind,
}

impl RelationRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }
}

impl Display for RelationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.source,
            self.kind.target_token(),
            self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_visibility() {
        let public = Member::parse("+String username").unwrap();
        assert_eq!(public.visibility(), Visibility::Public);
        assert_eq!(public.to_string(), "+String username");

        let private = Member::parse("  -password ").unwrap();
        assert_eq!(private.visibility(), Visibility::Private);
        assert_eq!(private.to_string(), "-password");

        let plain = Member::parse("String email").unwrap();
        assert_eq!(plain.visibility(), Visibility::Unspecified);
        assert_eq!(plain.to_string(), "String email");
    }

    #[test]
    fn test_member_keeps_text_after_first_marker() {
        let member = Member::parse("int a+b").unwrap();
        assert_eq!(member.visibility(), Visibility::Public);
        assert_eq!(member.to_string(), "+b");

        let member = Member::parse("String first-name").unwrap();
        assert_eq!(member.visibility(), Visibility::Private);
        assert_eq!(member.to_string(), "-name");

        assert_eq!(Member::parse("+a+b").unwrap().text(), "a+b");
    }

    #[test]
    fn test_blank_member_skipped() {
        assert_eq!(Member::parse("   "), None);
    }

    #[test]
    fn test_relation_display() {
        let relation = RelationRecord::new("Animal", "Dog", RelationKind::Inheritance);
        assert_eq!(relation.to_string(), "Animal <|-- Dog");
        assert_eq!(relation.source(), "Animal");
        assert_eq!(relation.target(), "Dog");
        assert_eq!(relation.kind(), RelationKind::Inheritance);
    }
}
