use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::hcl::{HclError, Result, Shape, Value};

/// Rust types that can serve as decode output locations.
///
/// The declared [`Shape`] selects the converter. `to_value` seeds the decode with the current
/// contents of the output so mappings merge, and `from_value` commits the decoded slot back.
pub trait Decode: Sized {
	/// Declared shape of this type.
	fn shape() -> Shape;

	/// Current contents as a slot value.
	fn to_value(&self) -> Value;

	/// Build the Rust value from a decoded slot.
	fn from_value(value: Value) -> Result<Self>;
}

impl Decode for i64 {
	fn shape() -> Shape {
		Shape::Int
	}

	fn to_value(&self) -> Value {
		Value::Int(*self)
	}

	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Int(value) => Ok(value),
			other => Err(mismatch("int", &other)),
		}
	}
}

impl Decode for String {
	fn shape() -> Shape {
		Shape::String
	}

	fn to_value(&self) -> Value {
		Value::String(self.clone())
	}

	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::String(value) => Ok(value),
			other => Err(mismatch("string", &other)),
		}
	}
}

impl Decode for Value {
	fn shape() -> Shape {
		Shape::Dynamic
	}

	fn to_value(&self) -> Value {
		self.clone()
	}

	fn from_value(value: Value) -> Result<Self> {
		Ok(value)
	}
}

impl<T: Decode> Decode for Vec<T> {
	fn shape() -> Shape {
		Shape::Sequence(Box::new(T::shape()))
	}

	fn to_value(&self) -> Value {
		Value::List(self.iter().map(T::to_value).collect())
	}

	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Null => Ok(Vec::new()),
			Value::List(items) => items.into_iter().map(T::from_value).collect(),
			other => Err(mismatch("list", &other)),
		}
	}
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
	K: Decode + Eq + Hash,
	V: Decode,
	S: BuildHasher + Default,
{
	fn shape() -> Shape {
		map_shape::<K, V>()
	}

	fn to_value(&self) -> Value {
		map_to_value(self.iter())
	}

	fn from_value(value: Value) -> Result<Self> {
		map_entries(value)?.collect()
	}
}

impl<K, V> Decode for BTreeMap<K, V>
where
	K: Decode + Ord,
	V: Decode,
{
	fn shape() -> Shape {
		map_shape::<K, V>()
	}

	fn to_value(&self) -> Value {
		map_to_value(self.iter())
	}

	fn from_value(value: Value) -> Result<Self> {
		map_entries(value)?.collect()
	}
}

macro_rules! unsupported_output {
	($($ty:ty => $name:literal),* $(,)?) => {
		$(
			impl Decode for $ty {
				fn shape() -> Shape {
					Shape::Unsupported($name.into())
				}

				fn to_value(&self) -> Value {
					Value::Null
				}

				fn from_value(value: Value) -> Result<Self> {
					Err(mismatch($name, &value))
				}
			}
		)*
	};
}

unsupported_output!(bool => "bool", f64 => "f64");

fn map_shape<K: Decode, V: Decode>() -> Shape {
	Shape::Mapping {
		key: Box::new(K::shape()),
		value: Box::new(V::shape()),
	}
}

fn map_to_value<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Value
where
	K: Decode + 'a,
	V: Decode + 'a,
{
	let mut out = BTreeMap::new();
	for (key, value) in entries {
		// Non-string keys are rejected by the key guard before any seed is read.
		let Value::String(key) = key.to_value() else {
			return Value::Null;
		};
		out.insert(key, value.to_value());
	}
	Value::Map(out)
}

fn map_entries<K: Decode, V: Decode>(value: Value) -> Result<impl Iterator<Item = Result<(K, V)>>> {
	let entries = match value {
		Value::Null => BTreeMap::new(),
		Value::Map(entries) => entries,
		other => return Err(mismatch("map", &other)),
	};
	Ok(entries
		.into_iter()
		.map(|(key, value)| -> Result<(K, V)> { Ok((K::from_value(Value::String(key))?, V::from_value(value)?)) }))
}

fn mismatch(expected: &'static str, got: &Value) -> HclError {
	HclError::ValueMismatch {
		expected,
		got: got.kind_name(),
	}
}

#[cfg(test)]
mod tests;
