//! Component diagrams, rendered as left-to-right flowcharts.

use std::sync::LazyLock;

use regex::Regex;

use super::{Emitter, clean_name};

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:component|interface)\s+(.+?)(?:\s+as\s+(\w+))?\s*$")
        .expect("valid component pattern")
});

static DIRECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[?(\w+)\]?[ \t]*-->[ \t]*\[?(\w+)\]?").expect("valid directed edge pattern")
});

static UNDIRECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[?(\w+)\]?[ \t]*--[ \t]*\[?(\w+)\]?").expect("valid undirected edge pattern")
});

pub(super) fn emit(body: &str, out: &mut Emitter) {
    for line in body.lines() {
        let Some(caps) = DECLARATION.captures(line.trim()) else {
            continue;
        };
        let name = clean_name(&caps[1]);
        if name.is_empty() {
            continue;
        }
        let alias = caps
            .get(2)
            .map_or_else(|| name.split_whitespace().collect(), |m| m.as_str().to_string());
        out.line(format!("{alias}[{name}]"));
    }

    for caps in DIRECTED.captures_iter(body) {
        out.line(format!("{} --> {}", &caps[1], &caps[2]));
    }

    for caps in UNDIRECTED.captures_iter(body) {
        out.line(format!("{} --- {}", &caps[1], &caps[2]));
    }
}
