use std::collections::BTreeMap;

use tracing::debug;

use crate::hcl::decode::{DecodeOptions, child_path, decode_node, expect_assignment};
use crate::hcl::{HclError, Node, Result, Shape, Value};

/// Decode an object node into a string-keyed mapping slot.
///
/// Entries already present in the slot seed the value decoded for the same key, so nested
/// mappings merge instead of being replaced. The slot is only assigned after every entry
/// decoded successfully.
pub(super) fn decode_mapping(
	path: &str,
	node: &Node,
	key_shape: &Shape,
	value_shape: &Shape,
	slot: &mut Value,
	opt: &DecodeOptions,
	depth: u32,
) -> Result<()> {
	let Node::Object(object) = node else {
		return Err(HclError::ShapeMismatch {
			path: path.to_owned(),
			expected: "an object",
			got: node.kind(),
		});
	};

	if *key_shape != Shape::String {
		return Err(HclError::InvalidMapKeyShape {
			path: path.to_owned(),
			key: key_shape.to_string(),
		});
	}

	// Below the root the slot is a temporary owned by the parent converter.
	let mut out = match slot {
		Value::Map(existing) if depth > 0 => std::mem::take(existing),
		Value::Map(existing) => existing.clone(),
		_ => BTreeMap::new(),
	};

	for entry in &object.entries {
		let assignment = expect_assignment(path, entry)?;
		let field_path = child_path(path, &assignment.key);

		let mut val = out.remove(&assignment.key).unwrap_or_else(|| value_shape.zero_value());
		decode_node(&field_path, &assignment.value, value_shape, &mut val, opt, depth + 1)?;
		out.insert(assignment.key.clone(), val);
	}

	debug!(path, entries = out.len(), "commit mapping");
	*slot = Value::Map(out);
	Ok(())
}
