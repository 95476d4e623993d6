use std::collections::{BTreeMap, HashMap};

use crate::hcl::{Decode, HclError, Node, Shape, Value, decode_tree};

#[test]
fn rust_types_declare_expected_shapes() {
	assert_eq!(i64::shape(), Shape::Int);
	assert_eq!(String::shape(), Shape::String);
	assert_eq!(Value::shape(), Shape::Dynamic);
	assert_eq!(Vec::<i64>::shape(), Shape::list_of(Shape::Int));
	assert_eq!(HashMap::<String, Vec<Value>>::shape(), Shape::map_of(Shape::list_of(Shape::Dynamic)));
	assert_eq!(
		BTreeMap::<i64, String>::shape(),
		Shape::Mapping {
			key: Box::new(Shape::Int),
			value: Box::new(Shape::String),
		}
	);
	assert_eq!(bool::shape(), Shape::Unsupported("bool".into()));
}

#[test]
fn hash_map_seed_and_commit() {
	let mut out: HashMap<String, i64> = HashMap::from([("keep".to_owned(), 7)]);
	let root = Node::object([("port", Node::int(8080))]);

	decode_tree(&mut out, &root).expect("decode succeeds");

	assert_eq!(out.len(), 2);
	assert_eq!(out["keep"], 7);
	assert_eq!(out["port"], 8080);
}

#[test]
fn from_value_rejects_wrong_kind() {
	let err = i64::from_value(Value::from("x")).expect_err("string is not an int");
	assert!(matches!(err, HclError::ValueMismatch { expected: "int", got: "string" }));

	let err = Vec::<i64>::from_value(Value::Int(1)).expect_err("int is not a list");
	assert!(matches!(err, HclError::ValueMismatch { expected: "list", got: "int" }));
}

#[test]
fn null_collections_become_empty() {
	assert!(Vec::<String>::from_value(Value::Null).expect("null list converts").is_empty());
	assert!(BTreeMap::<String, i64>::from_value(Value::Null).expect("null map converts").is_empty());
}

#[test]
fn non_string_keyed_map_does_not_seed() {
	let out: BTreeMap<i64, i64> = BTreeMap::from([(1, 2)]);
	assert_eq!(out.to_value(), Value::Null);
}
