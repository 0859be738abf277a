//! The ordered extraction strategies.
//!
//! Each strategy is a pure function of the opaque result and the best
//! candidates found so far. None of them fail: a shape that is not present
//! simply yields [`StrategyOutcome::NotFound`].

use std::fmt::{self, Display};

use serde_json::Value;

use super::{Candidates, StrategyOutcome, rescue, text::stringify};

/// One way of locating the recommendation and diagram in a generation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// An ordered collection of per-step outputs: a top-level array, or a
    /// `tasks_output` array or object with at least two entries.
    IndexedOutputs,
    /// The `output` of the first two elements of a `tasks` array.
    TaskIterator,
    /// The first two values of a `raw` object with at least two entries.
    RawMerge,
    /// Pattern search over the whole result rendered as text.
    TextRescue,
}

impl Strategy {
    /// The strategies in the order they are tried.
    pub const CHAIN: [Strategy; 4] = [
        Strategy::IndexedOutputs,
        Strategy::TaskIterator,
        Strategy::RawMerge,
        Strategy::TextRescue,
    ];

    /// Run this strategy against `raw`.
    pub fn apply(self, raw: &Value, best: &Candidates) -> StrategyOutcome {
        match self {
            Strategy::IndexedOutputs => indexed_outputs(raw),
            Strategy::TaskIterator => task_iterator(raw),
            Strategy::RawMerge => raw_merge(raw),
            Strategy::TextRescue => text_rescue(raw, best),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::IndexedOutputs => "indexed outputs",
            Strategy::TaskIterator => "task iterator",
            Strategy::RawMerge => "raw merge",
            Strategy::TextRescue => "text rescue",
        };
        f.write_str(name)
    }
}

/// First two entries of an array, or first two values of an object.
fn first_two(collection: &Value) -> Option<(&Value, &Value)> {
    match collection {
        Value::Array(items) if items.len() >= 2 => Some((&items[0], &items[1])),
        Value::Object(map) if map.len() >= 2 => {
            let mut values = map.values();
            Some((values.next()?, values.next()?))
        }
        _ => None,
    }
}

fn pair(recommendation: &Value, diagram: &Value) -> StrategyOutcome {
    StrategyOutcome::from(Candidates::new(
        stringify(recommendation),
        stringify(diagram),
    ))
}

fn indexed_outputs(raw: &Value) -> StrategyOutcome {
    let outputs = match raw {
        Value::Array(_) => first_two(raw),
        Value::Object(map) => map.get("tasks_output").and_then(first_two),
        _ => None,
    };
    outputs.map_or(StrategyOutcome::NotFound, |(recommendation, diagram)| {
        pair(recommendation, diagram)
    })
}

fn task_iterator(raw: &Value) -> StrategyOutcome {
    let Some(Value::Array(tasks)) = raw.get("tasks") else {
        return StrategyOutcome::NotFound;
    };
    let output = |index: usize| {
        tasks
            .get(index)
            .and_then(|task| task.get("output"))
            .map(stringify)
            .unwrap_or_default()
    };
    StrategyOutcome::from(Candidates::new(output(0), output(1)))
}

fn raw_merge(raw: &Value) -> StrategyOutcome {
    raw.get("raw")
        .filter(|inner| inner.is_object())
        .and_then(first_two)
        .map_or(StrategyOutcome::NotFound, |(recommendation, diagram)| {
            pair(recommendation, diagram)
        })
}

fn text_rescue(raw: &Value, best: &Candidates) -> StrategyOutcome {
    let text = stringify(raw);
    let recommendation = rescue::recommendation(&text, best.recommendation()).unwrap_or_default();
    let diagram = rescue::diagram(&text).unwrap_or_default();
    StrategyOutcome::from(Candidates::new(recommendation, diagram))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn found(recommendation: &str, diagram: &str) -> StrategyOutcome {
        StrategyOutcome::Found(Candidates::new(recommendation, diagram))
    }

    #[test]
    fn test_indexed_outputs_array_field() {
        let raw = json!({"tasks_output": ["rec", "flowchart TD\n A-->B", "extra"]});
        assert_eq!(
            Strategy::IndexedOutputs.apply(&raw, &Candidates::default()),
            found("rec", "flowchart TD\n A-->B")
        );
    }

    #[test]
    fn test_indexed_outputs_mapping_uses_insertion_order() {
        let raw = json!({"tasks_output": {"zeta": "rec", "alpha": {"raw": "graph"}}});
        assert_eq!(
            Strategy::IndexedOutputs.apply(&raw, &Candidates::default()),
            found("rec", "graph")
        );
    }

    #[test]
    fn test_indexed_outputs_top_level_array() {
        let raw = json!(["rec", "diagram"]);
        assert_eq!(
            Strategy::IndexedOutputs.apply(&raw, &Candidates::default()),
            found("rec", "diagram")
        );
    }

    #[test]
    fn test_indexed_outputs_needs_two_entries() {
        let best = Candidates::default();
        for raw in [
            json!({"tasks_output": ["only one"]}),
            json!({"tasks_output": {"a": "only one"}}),
            json!(["only one"]),
            json!({"recommendation": "a", "diagram": "b"}),
            json!("plain text"),
        ] {
            assert_eq!(
                Strategy::IndexedOutputs.apply(&raw, &best),
                StrategyOutcome::NotFound,
                "{raw}"
            );
        }
    }

    #[test]
    fn test_task_iterator() {
        let raw = json!({"tasks": [{"output": "rec"}, {"output": "diagram"}]});
        assert_eq!(
            Strategy::TaskIterator.apply(&raw, &Candidates::default()),
            found("rec", "diagram")
        );
    }

    #[test]
    fn test_task_iterator_single_task_is_partial() {
        let raw = json!({"tasks": [{"output": "rec"}]});
        assert_eq!(
            Strategy::TaskIterator.apply(&raw, &Candidates::default()),
            StrategyOutcome::Partial(Candidates::new("rec", ""))
        );
    }

    #[test]
    fn test_task_iterator_without_outputs() {
        let raw = json!({"tasks": [{"description": "x"}, 3]});
        assert_eq!(
            Strategy::TaskIterator.apply(&raw, &Candidates::default()),
            StrategyOutcome::NotFound
        );
        assert_eq!(
            Strategy::TaskIterator.apply(&json!({"tasks": "nope"}), &Candidates::default()),
            StrategyOutcome::NotFound
        );
    }

    #[test]
    fn test_raw_merge() {
        let raw = json!({"raw": {"first": "rec", "second": "diagram"}});
        assert_eq!(
            Strategy::RawMerge.apply(&raw, &Candidates::default()),
            found("rec", "diagram")
        );
        let text = json!({"raw": "just a string"});
        assert_eq!(
            Strategy::RawMerge.apply(&text, &Candidates::default()),
            StrategyOutcome::NotFound
        );
    }

    #[test]
    fn test_text_rescue_respects_current_best() {
        let raw = json!("SDLC: Spiral\nRisk driven.\n\nflowchart LR\n    A --> B");
        let outcome = Strategy::TextRescue.apply(&raw, &Candidates::default());
        assert_eq!(
            outcome,
            found("SDLC: Spiral\nRisk driven.", "flowchart LR\n    A --> B")
        );

        let long = Candidates::new("x".repeat(200), "");
        let outcome = Strategy::TextRescue.apply(&raw, &long);
        assert_eq!(
            outcome,
            StrategyOutcome::Partial(Candidates::new("", "flowchart LR\n    A --> B"))
        );
    }

    #[test]
    fn test_display() {
        let names: Vec<String> = Strategy::CHAIN.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["indexed outputs", "task iterator", "raw merge", "text rescue"]
        );
    }
}
