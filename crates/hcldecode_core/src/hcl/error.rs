use thiserror::Error;

use crate::hcl::{LiteralType, NodeKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, HclError>;

/// Errors produced while parsing HCL text and decoding trees into output locations.
#[derive(Debug, Error)]
pub enum HclError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text is not valid for the supported HCL subset.
	#[error("parse error at {line}:{column}: {message}")]
	Parse {
		/// 1-based line of the offending character.
		line: usize,
		/// 1-based column of the offending character.
		column: usize,
		/// What the parser expected or found.
		message: String,
	},
	/// Shape expression syntax is invalid.
	#[error("invalid shape: {input}")]
	InvalidShape {
		/// Original shape expression.
		input: String,
	},
	/// Output shape cannot accept the node's shape.
	#[error("{path}: not {expected} type (got {got})")]
	ShapeMismatch {
		/// Diagnostic path of the node.
		path: String,
		/// Node shape the converter needs, with article (`a literal`, `an object`, ...).
		expected: &'static str,
		/// Node shape actually found.
		got: NodeKind,
	},
	/// Literal type disagrees with the requested scalar shape.
	#[error("{path}: unknown type {got} (expected {expected})")]
	LiteralTypeMismatch {
		/// Diagnostic path of the literal.
		path: String,
		/// Literal type required by the output.
		expected: LiteralType,
		/// Literal type found in the tree.
		got: LiteralType,
	},
	/// Declared output shape has no converter.
	#[error("{path}: unknown kind: {shape}")]
	UnsupportedOutputShape {
		/// Diagnostic path of the output location.
		path: String,
		/// Rendered output shape.
		shape: String,
	},
	/// Mapping output declared with a non-string key shape.
	#[error("{path}: map must have string keys (got {key})")]
	InvalidMapKeyShape {
		/// Diagnostic path of the mapping.
		path: String,
		/// Rendered key shape.
		key: String,
	},
	/// Dynamic inference met a node that is not an object, list, or literal.
	#[error("{path}: cannot decode into dynamic output: {kind}")]
	UnrecognizedNodeShape {
		/// Diagnostic path of the node.
		path: String,
		/// Node shape found.
		kind: NodeKind,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("{path}: decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Diagnostic path where the limit was hit.
		path: String,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Decoded value does not fit the Rust output type.
	#[error("value mismatch: expected {expected}, got {got}")]
	ValueMismatch {
		/// Value kind the Rust type accepts.
		expected: &'static str,
		/// Value kind produced by the decoder.
		got: &'static str,
	},
}
