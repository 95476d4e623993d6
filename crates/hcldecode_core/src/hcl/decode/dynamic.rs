use std::collections::BTreeMap;

use crate::hcl::decode::{DecodeOptions, child_path, decode_node, expect_assignment};
use crate::hcl::{HclError, Literal, Node, Result, Shape, Value};

/// Infer the output shape from `node` and decode into a dynamic slot.
///
/// Literals only pick the concrete scalar shape here; the scalar converter fills the value
/// on a second dispatch of the same node.
pub(super) fn decode_dynamic(path: &str, node: &Node, slot: &mut Value, opt: &DecodeOptions, depth: u32) -> Result<()> {
	let resolved = match node {
		Node::Object(object) => {
			let mut out = BTreeMap::new();
			for entry in &object.entries {
				let assignment = expect_assignment(path, entry)?;
				let mut raw = Value::Null;
				decode_node(&child_path(path, &assignment.key), &assignment.value, &Shape::Dynamic, &mut raw, opt, depth + 1)?;
				out.insert(assignment.key.clone(), raw);
			}
			*slot = Value::Map(out);
			return Ok(());
		}
		Node::List(list) => {
			let mut out = Vec::with_capacity(list.elements.len());
			for (idx, elem) in list.elements.iter().enumerate() {
				let mut raw = Value::Null;
				decode_node(&child_path(path, idx), elem, &Shape::Dynamic, &mut raw, opt, depth + 1)?;
				out.push(raw);
			}
			*slot = Value::List(out);
			return Ok(());
		}
		Node::Literal(Literal::Int(_)) => Shape::Int,
		Node::Literal(Literal::String(_)) => Shape::String,
		other => {
			return Err(HclError::UnrecognizedNodeShape {
				path: path.to_owned(),
				kind: other.kind(),
			});
		}
	};

	let mut set = resolved.zero_value();
	decode_node(path, node, &resolved, &mut set, opt, depth)?;
	*slot = set;
	Ok(())
}
