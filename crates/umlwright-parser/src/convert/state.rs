//! State diagram conversion.

use std::sync::LazyLock;

use regex::Regex;

use super::{Emitter, clean_name};

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^state\s+(.+?)(?:\s+as\s+(\w+))?\s*\{?\s*$").expect("valid state pattern")
});

static TRANSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+|\[\*\])[ \t]*-->[ \t]*(\w+|\[\*\])(?:[ \t]*:([^\n]*))?")
        .expect("valid transition pattern")
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
            .map_or_else(|| name.replace(' ', "_"), |m| m.as_str().to_string());
        out.line(format!("{alias}: {name}"));
    }

    for caps in TRANSITION.captures_iter(body) {
        let label = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
        if label.is_empty() {
            out.line(format!("{} --> {}", &caps[1], &caps[2]));
        } else {
            out.line(format!("{} --> {}: {label}", &caps[1], &caps[2]));
        }
    }
}
