//! Per-subtype emitters for the target notation.
//!
//! Every emitter receives the delimiter-free source body and writes into an
//! [`Emitter`], which always starts with the keyword line of its notation.
//! Unmatched or malformed lines are skipped, never reported.

mod class;
mod component;
mod flowchart;
mod sequence;
mod state;
mod use_case;

use log::trace;

use umlwright_core::{DiagramNotation, DiagramSnippet};

use crate::source::SourceKind;

pub use class::{parse_entities, scan_relations};

const INDENT: &str = "    ";

/// Accumulates target-notation lines under a keyword header.
pub(crate) struct Emitter {
    notation: DiagramNotation,
    out: String,
}

impl Emitter {
    pub(crate) fn new(notation: DiagramNotation) -> Self {
        let mut out = String::with_capacity(256);
        out.push_str(notation.keyword());
        out.push('\n');
        Self { notation, out }
    }

    /// Append one indented content line.
    pub(crate) fn line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        trace!(line = line; "Emitting line");
        self.out.push_str(INDENT);
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn finish(self) -> DiagramSnippet {
        DiagramSnippet::new(self.out, self.notation)
    }
}

/// Dispatch `body` to the emitter for `kind`.
pub(crate) fn emit(body: &str, kind: SourceKind) -> DiagramSnippet {
    let mut emitter = Emitter::new(kind.target());
    match kind {
        SourceKind::Class => class::emit(body, &mut emitter),
        SourceKind::UseCase => use_case::emit(body, &mut emitter),
        SourceKind::Sequence => sequence::emit(body, &mut emitter),
        SourceKind::Flowchart => flowchart::emit(body, &mut emitter),
        SourceKind::Component => component::emit(body, &mut emitter),
        SourceKind::State => state::emit(body, &mut emitter),
    }
    emitter.finish()
}

/// Strip surrounding quotes and brackets from a declared display name.
fn clean_name(raw: &str) -> &str {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '[' || c == ']')
        .trim()
}
