use std::fmt;

/// Parsed configuration tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Terminal scalar.
	Literal(Literal),
	/// Keyed collection of assignments.
	Object(ObjectNode),
	/// Positional collection of nodes.
	List(ListNode),
	/// Single `key = value` pair, only valid inside an object.
	Assignment(Assignment),
}

/// Scalar literal with its concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
	/// Integer literal.
	Int(i64),
	/// String literal with escapes already resolved.
	String(String),
}

/// Type tag of a literal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType {
	/// Integer literal.
	Int,
	/// String literal.
	String,
}

/// Ordered object entries.
///
/// Entries are expected to be [`Node::Assignment`]; anything else is rejected at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectNode {
	/// Entries in source order.
	pub entries: Vec<Node>,
}

/// Ordered list elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListNode {
	/// Elements in source order.
	pub elements: Vec<Node>,
}

/// Key bound to a value node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
	/// Assignment key.
	pub key: String,
	/// Assigned value.
	pub value: Box<Node>,
}

/// Shape tag of a node, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// [`Node::Literal`].
	Literal,
	/// [`Node::Object`].
	Object,
	/// [`Node::List`].
	List,
	/// [`Node::Assignment`].
	Assignment,
}

impl Node {
	/// Integer literal node.
	pub fn int(value: i64) -> Self {
		Self::Literal(Literal::Int(value))
	}

	/// String literal node.
	pub fn string(value: impl Into<String>) -> Self {
		Self::Literal(Literal::String(value.into()))
	}

	/// Object node from `(key, value)` pairs.
	pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
		Self::Object(ObjectNode {
			entries: entries.into_iter().map(|(key, value)| Self::assign(key, value)).collect(),
		})
	}

	/// List node from elements.
	pub fn list(elements: impl IntoIterator<Item = Node>) -> Self {
		Self::List(ListNode {
			elements: elements.into_iter().collect(),
		})
	}

	/// Assignment node.
	pub fn assign(key: impl Into<String>, value: Node) -> Self {
		Self::Assignment(Assignment {
			key: key.into(),
			value: Box::new(value),
		})
	}

	/// Shape tag of this node.
	pub fn kind(&self) -> NodeKind {
		match self {
			Self::Literal(_) => NodeKind::Literal,
			Self::Object(_) => NodeKind::Object,
			Self::List(_) => NodeKind::List,
			Self::Assignment(_) => NodeKind::Assignment,
		}
	}
}

impl Literal {
	/// Type tag of this literal.
	pub fn ty(&self) -> LiteralType {
		match self {
			Self::Int(_) => LiteralType::Int,
			Self::String(_) => LiteralType::String,
		}
	}
}

impl fmt::Display for LiteralType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int => f.write_str("int"),
			Self::String => f.write_str("string"),
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal => f.write_str("literal"),
			Self::Object => f.write_str("object"),
			Self::List => f.write_str("list"),
			Self::Assignment => f.write_str("assignment"),
		}
	}
}
