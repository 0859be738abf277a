//! Class diagram conversion.

use std::sync::LazyLock;

use regex::Regex;

use super::Emitter;
use crate::records::{EntityRecord, Member, RelationKind, RelationRecord};

static CLASS_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bclass\s+(\w+)(?:\s*\{(.*?)\})?").expect("valid class pattern")
});

/// One pattern per relation kind, in [`RelationKind::ALL`] order.
///
/// The association pattern tolerates decorations around `--`, so it also
/// fires on inheritance, composition and aggregation lines.
static RELATIONS: LazyLock<Vec<(RelationKind, Regex)>> = LazyLock::new(|| {
    RelationKind::ALL
        .into_iter()
        .map(|kind| {
            let pattern = match kind {
                RelationKind::Association => r"(\w+)\s+(?:<\||\*|o)?--(?:\|>|>|\*|o)?\s+(\w+)",
                RelationKind::Dependency => r"(\w+)\s+\.\.>?\s+(\w+)",
                RelationKind::Inheritance => r"(\w+)\s+<\|--\s+(\w+)",
                RelationKind::Composition => r"(\w+)\s+\*--\s+(\w+)",
                RelationKind::Aggregation => r"(\w+)\s+o--\s+(\w+)",
            };
            (kind, Regex::new(pattern).expect("valid relation pattern"))
        })
        .collect()
});

/// Split one body line into member segments.
///
/// A `+` or `-` that starts a new token outside parentheses begins a new
/// segment, so `+String name +login()` yields two members.
fn split_members(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut prev_is_space = true;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' | '-'
                if depth == 0
                    && prev_is_space
                    && !line[start..i].trim().is_empty()
                    && chars
                        .peek()
                        .is_some_and(|&(_, next)| !next.is_whitespace() && next != '-') =>
            {
                segments.push(&line[start..i]);
                start = i;
            }
            _ => {}
        }
        prev_is_space = c.is_whitespace();
    }

    segments.push(&line[start..]);
    segments
}

/// Collect every class declaration with its members.
pub fn parse_entities(body: &str) -> Vec<EntityRecord> {
    CLASS_DECL
        .captures_iter(body)
        .map(|caps| {
            let members = caps
                .get(2)
                .map(|block| {
                    block
                        .as_str()
                        .lines()
                        .flat_map(split_members)
                        .filter_map(Member::parse)
                        .collect()
                })
                .unwrap_or_default();
            EntityRecord::new(&caps[1], members)
        })
        .collect()
}

/// Run every relation pass over `body` independently, in scan order.
///
/// A line matched by several passes yields one record per pass.
pub fn scan_relations(body: &str) -> Vec<RelationRecord> {
    RELATIONS
        .iter()
        .flat_map(|(kind, pattern)| {
            pattern
                .captures_iter(body)
                .map(move |caps| RelationRecord::new(&caps[1], &caps[2], *kind))
        })
        .collect()
}

pub(super) fn emit(body: &str, out: &mut Emitter) {
    for entity in parse_entities(body) {
        out.line(format!("class {}", entity.name()));
        for member in entity.members() {
            out.line(format!("{} : {member}", entity.name()));
        }
    }

    for relation in scan_relations(body) {
        out.line(relation.to_string());
    }
}
