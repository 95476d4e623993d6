use std::collections::BTreeMap;

/// Runtime value held by an output location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
	/// Uninitialized slot (no mapping, sequence, or dynamic value yet).
	#[default]
	Null,
	/// Integer scalar.
	Int(i64),
	/// String scalar.
	String(String),
	/// String-keyed mapping.
	Map(BTreeMap<String, Value>),
	/// Ordered sequence.
	List(Vec<Value>),
}

impl Value {
	/// Short kind label used in diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Int(_) => "int",
			Self::String(_) => "string",
			Self::Map(_) => "map",
			Self::List(_) => "list",
		}
	}

	/// Integer payload, if any.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Mapping payload, if any.
	pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	/// Sequence payload, if any.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Look up a mapping entry by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_map().and_then(|map| map.get(key))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}
