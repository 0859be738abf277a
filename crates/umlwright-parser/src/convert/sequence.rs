//! Sequence diagram conversion.

use std::sync::LazyLock;

use regex::Regex;

use super::{Emitter, clean_name};

static PARTICIPANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:participant|actor)\s+(.+?)(?:\s+as\s+(\w+))?\s*$")
        .expect("valid participant pattern")
});

/// Message patterns paired with the arrow they are rendered with.
///
/// The patterns are scanned independently and in this order.
static MESSAGES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"->", "->"),
        (r"-->", "->>"),
        (r"<-", "<-"),
        (r"<--", "<<-"),
    ]
    .into_iter()
    .map(|(token, arrow)| {
        let pattern = format!(r"(\w+)[ \t]*{token}[ \t]*(\w+)[ \t]*:([^\n]*)");
        (Regex::new(&pattern).expect("valid message pattern"), arrow)
    })
    .collect()
});

pub(super) fn emit(body: &str, out: &mut Emitter) {
    for line in body.lines() {
        let Some(caps) = PARTICIPANT.captures(line.trim()) else {
            continue;
        };
        let name = clean_name(&caps[1]);
        if name.is_empty() {
            continue;
        }
        let alias = caps
            .get(2)
            .map_or_else(|| name.split_whitespace().collect(), |m| m.as_str().to_string());
        out.line(format!("participant {alias} as {name}"));
    }

    for (pattern, arrow) in MESSAGES.iter() {
        for caps in pattern.captures_iter(body) {
            let message = caps[3].trim();
            out.line(format!("{}{arrow}{}: {message}", &caps[1], &caps[2]));
        }
    }
}
