use crate::hcl::{HclError, ListNode, Node, ObjectNode, Result};

/// Maximum nesting of objects, blocks, and lists accepted by [`parse`].
pub const MAX_NESTING: usize = 256;

/// Parse HCL text into an object-shaped tree root.
///
/// Supports `key = value` assignments, `key { ... }` blocks, integer and string literals,
/// objects, lists, and `#`, `//`, `/* */` comments.
pub fn parse(input: &str) -> Result<Node> {
	let mut parser = Parser { input, pos: 0, depth: 0 };
	let entries = parser.body(None)?;
	Ok(Node::Object(ObjectNode { entries }))
}

struct Parser<'a> {
	input: &'a str,
	pos: usize,
	depth: usize,
}

impl Parser<'_> {
	fn body(&mut self, close: Option<u8>) -> Result<Vec<Node>> {
		let mut entries = Vec::new();
		loop {
			self.skip_trivia(true)?;
			match (self.peek(), close) {
				(None, None) => break,
				(None, Some(close)) => return Err(self.error(format!("expected '{}'", char::from(close)))),
				(Some(byte), Some(close)) if byte == close => {
					self.pos += 1;
					break;
				}
				_ => {}
			}

			let key = self.key()?;
			self.skip_trivia(false)?;
			let value = match self.peek() {
				Some(b'=') => {
					self.pos += 1;
					self.value()?
				}
				Some(b'{') => Node::Object(ObjectNode {
					entries: self.nested(|parser| parser.body(Some(b'}')))?,
				}),
				_ => return Err(self.error(format!("expected '=' or '{{' after key {key:?}"))),
			};
			entries.push(Node::assign(key, value));
		}
		Ok(entries)
	}

	fn value(&mut self) -> Result<Node> {
		self.skip_trivia(false)?;
		match self.peek() {
			Some(b'"') => Ok(Node::string(self.string()?)),
			Some(b'{') => Ok(Node::Object(ObjectNode {
				entries: self.nested(|parser| parser.body(Some(b'}')))?,
			})),
			Some(b'[') => self.nested(Self::list),
			Some(b'-' | b'0'..=b'9') => self.int(),
			Some(_) => Err(self.error("expected value".to_owned())),
			None => Err(self.error("expected value, found end of input".to_owned())),
		}
	}

	/// Consume an opening bracket and run `inner` one nesting level deeper.
	fn nested<T>(&mut self, inner: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		if self.depth >= MAX_NESTING {
			return Err(self.error(format!("nesting too deep (max={MAX_NESTING})")));
		}
		self.pos += 1;
		self.depth += 1;
		let out = inner(self);
		self.depth -= 1;
		out
	}

	fn list(&mut self) -> Result<Node> {
		let mut elements = Vec::new();
		loop {
			self.skip_trivia(false)?;
			if self.eat(b']') {
				break;
			}
			elements.push(self.value()?);
			self.skip_trivia(false)?;
			if self.eat(b',') {
				continue;
			}
			if self.eat(b']') {
				break;
			}
			return Err(self.error("expected ',' or ']'".to_owned()));
		}
		Ok(Node::List(ListNode { elements }))
	}

	fn int(&mut self) -> Result<Node> {
		let start = self.pos;
		self.eat(b'-');
		let digits = self.pos;
		while self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
			self.pos += 1;
		}
		if self.pos == digits {
			return Err(self.error_at(start, "expected digits".to_owned()));
		}
		let text = &self.input[start..self.pos];
		text.parse::<i64>()
			.map(Node::int)
			.map_err(|_| self.error_at(start, format!("integer out of range: {text}")))
	}

	fn key(&mut self) -> Result<String> {
		match self.peek() {
			Some(b'"') => self.string(),
			Some(byte) if byte.is_ascii_alphabetic() || byte == b'_' => {
				let start = self.pos;
				while self.peek().is_some_and(|byte| byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-') {
					self.pos += 1;
				}
				Ok(self.input[start..self.pos].to_owned())
			}
			_ => Err(self.error("expected key".to_owned())),
		}
	}

	fn string(&mut self) -> Result<String> {
		let start = self.pos;
		self.pos += 1;
		let mut out = String::new();
		loop {
			let Some(ch) = self.input[self.pos..].chars().next() else {
				return Err(self.error_at(start, "unterminated string".to_owned()));
			};
			self.pos += ch.len_utf8();
			match ch {
				'"' => return Ok(out),
				'\n' => return Err(self.error_at(start, "unterminated string".to_owned())),
				'\\' => {
					let escape_at = self.pos - 1;
					let escaped = match self.peek() {
						Some(b'"') => '"',
						Some(b'\\') => '\\',
						Some(b'n') => '\n',
						Some(b't') => '\t',
						Some(b'r') => '\r',
						_ => return Err(self.error_at(escape_at, "invalid escape sequence".to_owned())),
					};
					self.pos += 1;
					out.push(escaped);
				}
				other => out.push(other),
			}
		}
	}

	/// Skip whitespace and comments; `separators` also skips newlines between entries and commas.
	fn skip_trivia(&mut self, separators: bool) -> Result<()> {
		while let Some(byte) = self.peek() {
			match byte {
				b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
				b',' if separators => self.pos += 1,
				b'#' => self.skip_line(),
				b'/' if self.peek_at(1) == Some(b'/') => self.skip_line(),
				b'/' if self.peek_at(1) == Some(b'*') => {
					let start = self.pos;
					let Some(end) = self.input[self.pos + 2..].find("*/") else {
						return Err(self.error_at(start, "unterminated block comment".to_owned()));
					};
					self.pos += 2 + end + 2;
				}
				_ => break,
			}
		}
		Ok(())
	}

	fn skip_line(&mut self) {
		match self.input[self.pos..].find('\n') {
			Some(end) => self.pos += end + 1,
			None => self.pos = self.input.len(),
		}
	}

	fn peek(&self) -> Option<u8> {
		self.peek_at(0)
	}

	fn peek_at(&self, offset: usize) -> Option<u8> {
		self.input.as_bytes().get(self.pos + offset).copied()
	}

	fn eat(&mut self, byte: u8) -> bool {
		if self.peek() == Some(byte) {
			self.pos += 1;
			return true;
		}
		false
	}

	fn error(&self, message: String) -> HclError {
		self.error_at(self.pos, message)
	}

	fn error_at(&self, pos: usize, message: String) -> HclError {
		let before = &self.input[..pos];
		let line = before.matches('\n').count() + 1;
		let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
		HclError::Parse {
			line,
			column: before[line_start..].chars().count() + 1,
			message,
		}
	}
}
