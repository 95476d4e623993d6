use std::fmt::Display;

use tracing::trace;

use crate::hcl::{Assignment, Decode, HclError, Node, Result, Shape, Value, parse};

mod dynamic;
mod mapping;
mod scalar;
mod sequence;

/// Diagnostic path label of the document root.
const ROOT_PATH: &str = "root";

/// How list nodes are decoded into sequence outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequenceMode {
	/// Commit an empty sequence and ignore the list's elements.
	///
	/// Matches the behavior existing configurations were written against.
	#[default]
	Legacy,
	/// Decode every element into a slot of the element shape, in order.
	Elements,
}

/// Runtime limits and behavior switches for tree decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive dispatch depth.
	pub max_depth: u32,
	/// Sequence converter behavior.
	pub sequence_mode: SequenceMode,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			sequence_mode: SequenceMode::Legacy,
		}
	}
}

impl DecodeOptions {
	/// Preset that decodes list elements instead of dropping them.
	pub fn strict_elements() -> Self {
		Self {
			sequence_mode: SequenceMode::Elements,
			..Self::default()
		}
	}
}

/// Parse `input` and decode the resulting tree into `out`.
pub fn decode_str<T: Decode>(out: &mut T, input: &str) -> Result<()> {
	decode_str_with(out, input, &DecodeOptions::default())
}

/// Parse `input` and decode the resulting tree into `out` with explicit options.
pub fn decode_str_with<T: Decode>(out: &mut T, input: &str, opt: &DecodeOptions) -> Result<()> {
	let root = parse(input)?;
	decode_tree_with(out, &root, opt)
}

/// Decode an object-shaped tree root into `out`.
///
/// `out` is only assigned when the whole decode succeeds; its current contents seed mapping merges.
pub fn decode_tree<T: Decode>(out: &mut T, root: &Node) -> Result<()> {
	decode_tree_with(out, root, &DecodeOptions::default())
}

/// Decode an object-shaped tree root into `out` with explicit options.
pub fn decode_tree_with<T: Decode>(out: &mut T, root: &Node, opt: &DecodeOptions) -> Result<()> {
	let shape = T::shape();
	let mut slot = out.to_value();
	decode_value(&shape, &mut slot, root, opt)?;
	*out = T::from_value(slot)?;
	Ok(())
}

/// Decode an object-shaped tree root into a slot whose shape is only known at run time.
pub fn decode_value(shape: &Shape, slot: &mut Value, root: &Node, opt: &DecodeOptions) -> Result<()> {
	if !matches!(root, Node::Object(_)) {
		return Err(HclError::ShapeMismatch {
			path: ROOT_PATH.to_owned(),
			expected: "an object",
			got: root.kind(),
		});
	}
	decode_node(ROOT_PATH, root, shape, slot, opt, 0)
}

/// Route `node` to the converter for the slot's declared shape.
fn decode_node(path: &str, node: &Node, shape: &Shape, slot: &mut Value, opt: &DecodeOptions, depth: u32) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(HclError::DepthExceeded {
			path: path.to_owned(),
			max_depth: opt.max_depth,
		});
	}

	trace!(path, %shape, node = %node.kind(), "decode");
	match shape {
		Shape::Int => scalar::decode_int(path, node, slot),
		Shape::String => scalar::decode_string(path, node, slot),
		Shape::Dynamic => dynamic::decode_dynamic(path, node, slot, opt, depth),
		Shape::Mapping { key, value } => mapping::decode_mapping(path, node, key, value, slot, opt, depth),
		Shape::Sequence(elem) => sequence::decode_sequence(path, node, elem, slot, opt, depth),
		Shape::Unsupported(_) => Err(HclError::UnsupportedOutputShape {
			path: path.to_owned(),
			shape: shape.to_string(),
		}),
	}
}

fn child_path(path: &str, segment: impl Display) -> String {
	format!("{path}.{segment}")
}

fn expect_assignment<'n>(path: &str, entry: &'n Node) -> Result<&'n Assignment> {
	match entry {
		Node::Assignment(assignment) => Ok(assignment),
		other => Err(HclError::ShapeMismatch {
			path: path.to_owned(),
			expected: "an assignment",
			got: other.kind(),
		}),
	}
}
