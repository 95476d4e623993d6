#![allow(missing_docs)]

use std::process::Command;

use hcldecode_testkit::{fixture_path, stdout_json};
use serde_json::{Value, json};

#[test]
fn decode_json_output_is_valid_and_structured() {
	let json = run_json(&["decode", &fixture("servers.hcl"), "--shape", "map<string, any>", "--json"]);

	assert_eq!(json["shape"], "map<string, any>");
	assert_eq!(json["value"]["name"], "edge");
	assert!(json["value"]["servers"].is_object(), "expected servers object");
}

#[test]
fn decode_elements_json_output_decodes_lists() {
	let json = run_json(&["decode", &fixture("lists.hcl"), "--shape", "map<string, list<string>>", "--elements", "--json"]);

	assert_eq!(json["value"], json!({ "hosts": ["a", "b"], "backups": [] }));
}

#[test]
fn decode_depth_limit_flag_is_enforced() {
	let output = Command::new(env!("CARGO_BIN_EXE_hcldecode"))
		.args(["decode", &fixture("servers.hcl"), "--max-depth", "2"])
		.output()
		.expect("command executes");

	assert!(!output.status.success(), "shallow depth limit should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("decode depth exceeded (max=2)"));
}

#[test]
fn deeply_nested_input_fails_with_parse_error() {
	let path = std::env::temp_dir().join(format!("hcldecode-deep-{}.hcl", std::process::id()));
	std::fs::write(&path, format!("a = {}{}", "[".repeat(20_000), "]".repeat(20_000))).expect("write deep input");

	for command in ["decode", "tree"] {
		let output = Command::new(env!("CARGO_BIN_EXE_hcldecode"))
			.args([command, &path.display().to_string()])
			.output()
			.expect("command executes");

		assert_eq!(output.status.code(), Some(1), "{command} should exit cleanly");
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.starts_with("error: parse error at 1:"), "unexpected stderr: {stderr}");
		assert!(stderr.contains("nesting too deep"), "unexpected stderr: {stderr}");
	}

	let _ = std::fs::remove_file(&path);
}

#[test]
fn tree_json_output_is_valid() {
	let json = run_json(&["tree", &fixture("lists.hcl"), "--json"]);

	assert_eq!(json["kind"], "object");
	assert_eq!(json["entries"][0]["value"]["elements"][1]["value"], "b");
}

fn run_json(args: &[&str]) -> Value {
	let output = Command::new(env!("CARGO_BIN_EXE_hcldecode")).args(args).output().expect("command executes");

	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	stdout_json(&output.stdout)
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}
