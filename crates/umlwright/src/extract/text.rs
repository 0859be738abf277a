//! Plain-text view of an opaque generation result.

use serde_json::Value;

/// Render `value` as the text a human would read from it.
///
/// Strings are taken verbatim and `null` is empty. Arrays join their items
/// with newlines. Objects prefer a string `raw` field and otherwise join
/// their values with newlines, in insertion order.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => join_lines(items.iter()),
        Value::Object(map) => match map.get("raw") {
            Some(Value::String(raw)) => raw.clone(),
            _ => join_lines(map.values()),
        },
    }
}

fn join_lines<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values.map(stringify).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(stringify(&Value::Null), "");
        assert_eq!(stringify(&json!("text")), "text");
        assert_eq!(stringify(&json!(42)), "42");
        assert_eq!(stringify(&json!(true)), "true");
    }

    #[test]
    fn test_array_joins_items() {
        assert_eq!(stringify(&json!(["a", 1, ["b", "c"]])), "a\n1\nb\nc");
    }

    #[test]
    fn test_object_prefers_raw_string() {
        let value = json!({"description": "ignored", "raw": "Use Kanban"});
        assert_eq!(stringify(&value), "Use Kanban");
    }

    #[test]
    fn test_object_joins_values_in_order() {
        let value = json!({"second": "b", "first": "a", "raw": {"x": "c"}});
        assert_eq!(stringify(&value), "b\na\nc");
    }
}
