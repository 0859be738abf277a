//! Generic flowchart conversion, also the fallback for unrecognized sources.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use super::Emitter;

static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-->|--").expect("valid link pattern"));

/// Node anchor for an operand: its text with spaces replaced by underscores.
fn anchor(operand: &str) -> String {
    operand.trim().replace(' ', "_")
}

/// Split `line` on `separator` into exactly two non-empty operands.
fn operands<'a>(line: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let mut parts = line.split(separator);
    let (left, right) = (parts.next()?.trim(), parts.next()?.trim());
    if parts.next().is_some() || left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left, right))
}

pub(super) fn emit(body: &str, out: &mut Emitter) {
    let mut nodes: IndexSet<&str> = IndexSet::new();
    for line in body.lines().filter(|line| line.contains("--")) {
        let mut parts = LINK.split(line);
        if let (Some(left), Some(right)) = (parts.next(), parts.next()) {
            nodes.insert(left.trim());
            nodes.insert(right.trim());
        }
    }

    for node in nodes.iter().filter(|node| !node.is_empty()) {
        out.line(format!("{}[{node}]", anchor(node)));
    }

    for line in body.lines() {
        if line.contains("-->") {
            if let Some((from, to)) = operands(line, "-->") {
                out.line(format!("{} --> {}", anchor(from), anchor(to)));
            }
        } else if let Some((left, right)) = operands(line, "--") {
            out.line(format!("{} --- {}", anchor(left), anchor(right)));
        }
    }
}
