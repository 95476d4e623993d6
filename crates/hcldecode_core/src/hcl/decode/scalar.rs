use crate::hcl::{HclError, Literal, LiteralType, Node, Result, Value};

pub(super) fn decode_int(path: &str, node: &Node, slot: &mut Value) -> Result<()> {
	match expect_literal(path, node)? {
		Literal::Int(value) => {
			*slot = Value::Int(*value);
			Ok(())
		}
		other => Err(type_mismatch(path, LiteralType::Int, other)),
	}
}

pub(super) fn decode_string(path: &str, node: &Node, slot: &mut Value) -> Result<()> {
	match expect_literal(path, node)? {
		Literal::String(value) => {
			*slot = Value::String(value.clone());
			Ok(())
		}
		other => Err(type_mismatch(path, LiteralType::String, other)),
	}
}

fn expect_literal<'n>(path: &str, node: &'n Node) -> Result<&'n Literal> {
	match node {
		Node::Literal(literal) => Ok(literal),
		other => Err(HclError::ShapeMismatch {
			path: path.to_owned(),
			expected: "a literal",
			got: other.kind(),
		}),
	}
}

fn type_mismatch(path: &str, expected: LiteralType, got: &Literal) -> HclError {
	HclError::LiteralTypeMismatch {
		path: path.to_owned(),
		expected,
		got: got.ty(),
	}
}
