//! Code-fence stripping and diagram-start detection.

use std::sync::LazyLock;

use regex::Regex;

use umlwright_core::{AUXILIARY_START_KEYWORDS, NOTATION_START_KEYWORDS, PLACEHOLDER_DIAGRAM};

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:mermaid|plantuml|puml|uml)?\s*([\s\S]*?)```").expect("valid fence pattern")
});

fn alternation(keywords: &[&str]) -> String {
    keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|")
}

static NOTATION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", alternation(NOTATION_START_KEYWORDS)))
        .expect("valid notation keyword pattern")
});

/// Auxiliary keywords count only when they open a line.
static AUXILIARY_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^[ \t]*((?:{})\b)",
        alternation(AUXILIARY_START_KEYWORDS)
    ))
    .expect("valid auxiliary keyword pattern")
});

/// Trimmed inner text of the first triple-backtick block, if it has any content.
pub(super) fn fence_inner(text: &str) -> Option<&str> {
    FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim())
        .filter(|inner| !inner.is_empty())
}

/// Byte offset where the diagram most likely starts.
///
/// The earliest word-bounded notation keyword wins. Failing that, the first
/// line opening with an auxiliary keyword such as `gantt` or `pie`.
pub(super) fn keyword_start(text: &str) -> Option<usize> {
    NOTATION_KEYWORD
        .find(text)
        .or_else(|| {
            AUXILIARY_KEYWORD
                .captures(text)
                .and_then(|caps| caps.get(1))
        })
        .map(|found| found.start())
}

/// Reduce free text around a diagram to the diagram itself.
///
/// Tries, in order: the inner text of a fenced block, the text from the
/// diagram-start keyword found by `keyword_start` onward, and the trimmed
/// input. An input
/// that is blank after all of that yields [`PLACEHOLDER_DIAGRAM`], so the
/// result is never empty.
///
/// # Examples
///
/// ```
/// # use umlwright::extract::strip_code_fence;
/// assert_eq!(
///     strip_code_fence("Here you go:\n```mermaid\nflowchart TD\n    A --> B\n```"),
///     "flowchart TD\n    A --> B",
/// );
/// assert_eq!(strip_code_fence("As requested, sequenceDiagram\n    A->>B: hi"), "sequenceDiagram\n    A->>B: hi");
/// ```
pub fn strip_code_fence(text: &str) -> String {
    if let Some(inner) = fence_inner(text) {
        return inner.to_string();
    }

    if let Some(start) = keyword_start(text) {
        return text[start..].trim().to_string();
    }

    match text.trim() {
        "" => PLACEHOLDER_DIAGRAM.to_string(),
        trimmed => trimmed.to_string(),
    }
}
