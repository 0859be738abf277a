//! Pattern search over the stringified result, the last resort of the chain.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::{fence_inner, keyword_start};

/// Recommendation-shaped patterns, most specific first.
static RECOMMENDATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // SDLC anchor followed by bullet points
        r"(?is)SDLC.*?:.*?(\w+(?:\s+\w+)*(?:\n\s*[-•*]\s*[^\n]+)+)",
        // SDLC anchor followed by a paragraph
        r"(?is)SDLC.*?:.*?\w+(?:\s+\w+)*\n.*?(?:\n\n|\z)",
        // recommendation followed by bullet points
        r"(?is)recommend.*?(\w+(?:\s+\w+){0,3}).*?(?:\n\s*[-•*].*?)+",
        // recommendation with a few lines of context
        r"(?is)recommend.*?(\w+(?:\s+\w+){0,3}).*?(?:\n.*?){1,10}",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid recommendation pattern"))
    .collect()
});

/// First pattern match, trimmed, that is strictly longer than `current`.
pub(super) fn recommendation(text: &str, current: &str) -> Option<String> {
    let current_len = current.chars().count();
    RECOMMENDATION_PATTERNS.iter().find_map(|pattern| {
        pattern
            .find(text)
            .map(|found| found.as_str().trim())
            .filter(|found| found.chars().count() > current_len)
            .map(str::to_string)
    })
}

/// Inner text of the first fenced block, or the remainder of `text` from the
/// earliest diagram-start keyword.
pub(super) fn diagram(text: &str) -> Option<String> {
    fence_inner(text)
        .or_else(|| keyword_start(text).map(|start| text[start..].trim()))
        .filter(|found| !found.is_empty())
        .map(str::to_string)
}
