use std::path::Path;

use hcldecode::hcl::{Literal, Node, Result, SequenceMode, Value, parse};
use serde_json::{Map, Value as JsonValue, json};

/// Read and parse an HCL file into its tree root.
pub(crate) fn read_tree(path: &Path) -> Result<Node> {
	let text = std::fs::read_to_string(path)?;
	parse(&text)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

/// Convert a decoded value into JSON.
pub(crate) fn value_to_json(value: &Value) -> JsonValue {
	match value {
		Value::Null => JsonValue::Null,
		Value::Int(v) => json!(v),
		Value::String(v) => json!(v),
		Value::Map(entries) => {
			let mut out = Map::new();
			for (key, item) in entries {
				out.insert(key.clone(), value_to_json(item));
			}
			JsonValue::Object(out)
		}
		Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
	}
}

/// Convert a syntax tree node into tagged JSON.
pub(crate) fn node_to_json(node: &Node) -> JsonValue {
	match node {
		Node::Literal(Literal::Int(v)) => json!({ "kind": "literal", "type": "int", "value": v }),
		Node::Literal(Literal::String(v)) => json!({ "kind": "literal", "type": "string", "value": v }),
		Node::Object(object) => json!({
			"kind": "object",
			"entries": object.entries.iter().map(node_to_json).collect::<Vec<_>>(),
		}),
		Node::List(list) => json!({
			"kind": "list",
			"elements": list.elements.iter().map(node_to_json).collect::<Vec<_>>(),
		}),
		Node::Assignment(assignment) => json!({
			"kind": "assignment",
			"key": assignment.key,
			"value": node_to_json(&assignment.value),
		}),
	}
}

/// Stable label for a sequence mode.
pub(crate) fn sequence_mode_label(mode: SequenceMode) -> &'static str {
	match mode {
		SequenceMode::Legacy => "legacy",
		SequenceMode::Elements => "elements",
	}
}

/// Escape a string for display between double quotes.
pub(crate) fn escape_string(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
			c => out.push(c),
		}
	}
	out
}
