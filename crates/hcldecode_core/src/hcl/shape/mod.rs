use std::fmt;

use crate::hcl::{HclError, Result, Value};

/// Declared shape of an output location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
	/// Integer scalar.
	Int,
	/// String scalar.
	String,
	/// Keyed mapping. Only string keys can be decoded.
	Mapping {
		/// Key shape.
		key: Box<Shape>,
		/// Value shape.
		value: Box<Shape>,
	},
	/// Ordered sequence of one element shape.
	Sequence(Box<Shape>),
	/// Shape chosen from the data at decode time.
	Dynamic,
	/// Any other declared shape; decoding into it fails.
	Unsupported(Box<str>),
}

impl Shape {
	/// String-keyed mapping with the given value shape.
	pub fn map_of(value: Shape) -> Self {
		Self::Mapping {
			key: Box::new(Self::String),
			value: Box::new(value),
		}
	}

	/// Sequence with the given element shape.
	pub fn list_of(elem: Shape) -> Self {
		Self::Sequence(Box::new(elem))
	}

	/// Initial contents of a freshly allocated slot of this shape.
	pub fn zero_value(&self) -> Value {
		match self {
			Self::Int => Value::Int(0),
			Self::String => Value::String(String::new()),
			Self::Mapping { .. } | Self::Sequence(_) | Self::Dynamic | Self::Unsupported(_) => Value::Null,
		}
	}

	/// Parse `int`, `string`, `any`, `list<T>`, or `map<K, V>`.
	///
	/// Any other bare identifier becomes [`Shape::Unsupported`].
	pub fn parse(input: &str) -> Result<Self> {
		let mut cursor = ShapeCursor { input, idx: 0, depth: 0 };
		let shape = cursor.shape()?;
		cursor.skip_ws();
		if cursor.idx != input.len() {
			return Err(cursor.invalid());
		}
		Ok(shape)
	}
}

const MAX_SHAPE_NESTING: usize = 64;

struct ShapeCursor<'a> {
	input: &'a str,
	idx: usize,
	depth: usize,
}

impl<'a> ShapeCursor<'a> {
	fn shape(&mut self) -> Result<Shape> {
		self.skip_ws();
		let name = self.ident()?;
		self.skip_ws();

		let mut args = Vec::new();
		if self.eat(b'<') {
			if self.depth >= MAX_SHAPE_NESTING {
				return Err(self.invalid());
			}
			self.depth += 1;
			loop {
				args.push(self.shape()?);
				self.skip_ws();
				if self.eat(b',') {
					continue;
				}
				if self.eat(b'>') {
					break;
				}
				return Err(self.invalid());
			}
			self.depth -= 1;
		}

		match (name, args.len()) {
			("int", 0) => Ok(Shape::Int),
			("string", 0) => Ok(Shape::String),
			("any", 0) => Ok(Shape::Dynamic),
			("list", 1) => Ok(Shape::Sequence(Box::new(args.remove(0)))),
			("map", 2) => {
				let value = args.pop().ok_or_else(|| self.invalid())?;
				let key = args.pop().ok_or_else(|| self.invalid())?;
				Ok(Shape::Mapping {
					key: Box::new(key),
					value: Box::new(value),
				})
			}
			("int" | "string" | "any" | "list" | "map", _) => Err(self.invalid()),
			(other, 0) => Ok(Shape::Unsupported(other.into())),
			_ => Err(self.invalid()),
		}
	}

	fn ident(&mut self) -> Result<&'a str> {
		let bytes = self.input.as_bytes();
		let start = self.idx;
		while self.idx < bytes.len() && (bytes[self.idx].is_ascii_alphanumeric() || bytes[self.idx] == b'_') {
			self.idx += 1;
		}
		if self.idx == start {
			return Err(self.invalid());
		}
		Ok(&self.input[start..self.idx])
	}

	fn eat(&mut self, byte: u8) -> bool {
		if self.input.as_bytes().get(self.idx) == Some(&byte) {
			self.idx += 1;
			return true;
		}
		false
	}

	fn skip_ws(&mut self) {
		let bytes = self.input.as_bytes();
		while self.idx < bytes.len() && bytes[self.idx].is_ascii_whitespace() {
			self.idx += 1;
		}
	}

	fn invalid(&self) -> HclError {
		HclError::InvalidShape { input: self.input.to_owned() }
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int => f.write_str("int"),
			Self::String => f.write_str("string"),
			Self::Mapping { key, value } => write!(f, "map<{key}, {value}>"),
			Self::Sequence(elem) => write!(f, "list<{elem}>"),
			Self::Dynamic => f.write_str("any"),
			Self::Unsupported(name) => f.write_str(name),
		}
	}
}
