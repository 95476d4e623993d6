use hcldecode::hcl::{Literal, Node, Value};

use crate::cmd::util::escape_string;

/// Output truncation and formatting limits for decoded values and trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single mapping or object.
	pub max_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_list_items: usize,
	/// Maximum recursive print depth for nested collections.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_entries: 80,
			max_string_len: 200,
			max_list_items: 16,
			max_print_depth: 8,
		}
	}
}

/// Render a decoded value as indented text.
pub fn render_value(value: &Value, indent: usize, options: PrintOptions) -> String {
	let mut printer = Printer { out: String::new(), options };
	printer.value(value, indent, 0);
	printer.out
}

/// Render a syntax tree as indented text.
pub fn render_node(node: &Node, indent: usize, options: PrintOptions) -> String {
	let mut printer = Printer { out: String::new(), options };
	printer.node(node, indent, 0);
	printer.out
}

struct Printer {
	out: String,
	options: PrintOptions,
}

impl Printer {
	fn value(&mut self, value: &Value, indent: usize, depth: u32) {
		if let Some(text) = self.scalar(value) {
			self.line(indent, &text);
			return;
		}
		match value {
			Value::Null | Value::Int(_) | Value::String(_) => {}
			Value::List(items) => {
				if depth >= self.options.max_print_depth {
					self.line(indent, &format!("[... {} items]", items.len()));
					return;
				}
				self.line(indent, "[");
				for item in items.iter().take(self.options.max_list_items) {
					self.value(item, indent + 2, depth + 1);
				}
				if items.len() > self.options.max_list_items {
					self.line(indent + 2, &format!("... {} more", items.len() - self.options.max_list_items));
				}
				self.line(indent, "]");
			}
			Value::Map(entries) => {
				if depth >= self.options.max_print_depth {
					self.line(indent, &format!("{{ ... {} entries }}", entries.len()));
					return;
				}
				self.line(indent, "{");
				for (key, item) in entries.iter().take(self.options.max_entries) {
					if let Some(text) = self.scalar(item) {
						self.line(indent + 2, &format!("{key} = {text}"));
					} else {
						self.line(indent + 2, &format!("{key} ="));
						self.value(item, indent + 4, depth + 1);
					}
				}
				if entries.len() > self.options.max_entries {
					self.line(indent + 2, &format!("... {} more entries", entries.len() - self.options.max_entries));
				}
				self.line(indent, "}");
			}
		}
	}

	fn scalar(&self, value: &Value) -> Option<String> {
		match value {
			Value::Null => Some("null".to_owned()),
			Value::Int(v) => Some(v.to_string()),
			Value::String(v) => Some(format!("\"{}\"", escape_string(&truncate(v, self.options.max_string_len)))),
			Value::Map(_) | Value::List(_) => None,
		}
	}

	fn node(&mut self, node: &Node, indent: usize, depth: u32) {
		if depth >= self.options.max_print_depth {
			self.line(indent, &format!("{} ...", node.kind()));
			return;
		}
		match node {
			Node::Literal(Literal::Int(v)) => self.line(indent, &format!("literal int {v}")),
			Node::Literal(Literal::String(v)) => self.line(indent, &format!("literal string \"{}\"", escape_string(&truncate(v, self.options.max_string_len)))),
			Node::Object(object) => {
				self.line(indent, &format!("object ({} entries)", object.entries.len()));
				for entry in object.entries.iter().take(self.options.max_entries) {
					self.node(entry, indent + 2, depth + 1);
				}
				if object.entries.len() > self.options.max_entries {
					self.line(indent + 2, &format!("... {} more entries", object.entries.len() - self.options.max_entries));
				}
			}
			Node::List(list) => {
				self.line(indent, &format!("list ({} elements)", list.elements.len()));
				for elem in list.elements.iter().take(self.options.max_list_items) {
					self.node(elem, indent + 2, depth + 1);
				}
				if list.elements.len() > self.options.max_list_items {
					self.line(indent + 2, &format!("... {} more", list.elements.len() - self.options.max_list_items));
				}
			}
			Node::Assignment(assignment) => {
				self.line(indent, &format!("assign \"{}\"", escape_string(&assignment.key)));
				self.node(&assignment.value, indent + 2, depth + 1);
			}
		}
	}

	fn line(&mut self, indent: usize, text: &str) {
		self.out.push_str(&" ".repeat(indent));
		self.out.push_str(text);
		self.out.push('\n');
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
