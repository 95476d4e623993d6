mod ast;
mod decode;
mod error;
mod parse;
mod shape;
mod typed;
mod value;

/// Syntax tree node types and constructors.
pub use ast::{Assignment, ListNode, Literal, LiteralType, Node, NodeKind, ObjectNode};
/// Tree decoding entry points and options.
pub use decode::{DecodeOptions, SequenceMode, decode_str, decode_str_with, decode_tree, decode_tree_with, decode_value};
/// Error and result aliases.
pub use error::{HclError, Result};
/// Text to tree parser.
pub use parse::{MAX_NESTING, parse};
/// Output location shape descriptors.
pub use shape::Shape;
/// Mapping between Rust types and output shapes.
pub use typed::Decode;
/// Dynamic value representation.
pub use value::Value;
