//! Use case diagrams, rendered as top-down flowcharts.

use std::sync::LazyLock;

use regex::Regex;

use super::Emitter;

const PERSON_GLYPH: &str = "👤";

static ACTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bactor\s+(?:"([^"\n]+)"\s+as\s+(\w+)|(\w+))"#).expect("valid actor pattern")
});

static USE_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\busecase\s+(?:"([^"\n]*)"|(\w+))(?:[ \t]+as[ \t]+(\w+))?"#)
        .expect("valid use case pattern")
});

static LABELED_EDGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)[ \t]*-+>[ \t]*(\w+)[ \t]*:").expect("valid labeled edge pattern")
});

static PLAIN_EDGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)[ \t]*--[ \t]*(\w+)").expect("valid plain edge pattern"));

pub(super) fn emit(body: &str, out: &mut Emitter) {
    for caps in ACTOR.captures_iter(body) {
        let (id, label) = match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(name), Some(alias), _) => (alias.as_str(), name.as_str()),
            (_, _, Some(name)) => (name.as_str(), name.as_str()),
            _ => continue,
        };
        out.line(format!("{id}[{PERSON_GLYPH} {label}]"));
    }

    for caps in USE_CASE.captures_iter(body) {
        let quoted = caps.get(1).map(|m| m.as_str().trim());
        let text = quoted.or_else(|| caps.get(2).map(|m| m.as_str())).unwrap_or("");
        let id = match caps.get(3) {
            Some(alias) => alias.as_str().to_string(),
            None => text.replace(' ', "_"),
        };
        if id.is_empty() {
            continue;
        }
        let label = match quoted {
            Some(text) if !text.is_empty() => text,
            _ => id.as_str(),
        };
        out.line(format!("{id}[({label})]"));
    }

    for caps in LABELED_EDGE.captures_iter(body) {
        out.line(format!("{} -->|uses| {}", &caps[1], &caps[2]));
    }

    for caps in PLAIN_EDGE.captures_iter(body) {
        out.line(format!("{} --- {}", &caps[1], &caps[2]));
    }
}
