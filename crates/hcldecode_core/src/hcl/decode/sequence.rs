use tracing::{debug, warn};

use crate::hcl::decode::{DecodeOptions, SequenceMode, child_path, decode_node};
use crate::hcl::{HclError, Node, Result, Shape, Value};

pub(super) fn decode_sequence(path: &str, node: &Node, elem_shape: &Shape, slot: &mut Value, opt: &DecodeOptions, depth: u32) -> Result<()> {
	let Node::List(list) = node else {
		return Err(HclError::ShapeMismatch {
			path: path.to_owned(),
			expected: "a list",
			got: node.kind(),
		});
	};

	if opt.sequence_mode == SequenceMode::Legacy {
		if !list.elements.is_empty() {
			warn!(path, dropped = list.elements.len(), "legacy sequence mode ignores list elements");
		}
		*slot = Value::List(Vec::new());
		return Ok(());
	}

	let mut out = Vec::with_capacity(list.elements.len());
	for (idx, elem) in list.elements.iter().enumerate() {
		let mut item = elem_shape.zero_value();
		decode_node(&child_path(path, idx), elem, elem_shape, &mut item, opt, depth + 1)?;
		out.push(item);
	}

	debug!(path, items = out.len(), "commit sequence");
	*slot = Value::List(out);
	Ok(())
}
