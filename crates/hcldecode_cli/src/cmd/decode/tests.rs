use crate::cmd::test_support::{fixture_arg, run_hcldecode, run_hcldecode_json};

#[test]
fn decode_json_infers_dynamic_values() {
	let fixture = fixture_arg("servers.hcl");
	let json = run_hcldecode_json(&["decode", &fixture, "--json"]);

	assert_eq!(json["shape"], "any");
	assert_eq!(json["sequence_mode"], "legacy");
	assert_eq!(json["value"]["replicas"], 3);
	assert_eq!(json["value"]["servers"]["web"]["port"], 8080);
	assert_eq!(json["value"]["tags"], serde_json::json!(["blue", "green"]));
}

#[test]
fn decode_json_merges_repeated_blocks() {
	let fixture = fixture_arg("merge.hcl");
	let json = run_hcldecode_json(&["decode", &fixture, "--shape", "map<string, map<string, int>>", "--json"]);

	assert_eq!(json["shape"], "map<string, map<string, int>>");
	assert_eq!(json["value"]["limits"], serde_json::json!({ "cpu": 4, "memory": 512 }));
}

#[test]
fn decode_sequence_mode_flag() {
	let fixture = fixture_arg("lists.hcl");

	let legacy = run_hcldecode(&["decode", &fixture, "--shape", "map<string, list<string>>", "--json"]);
	assert!(legacy.status.success(), "legacy decode should succeed");
	let json = hcldecode_testkit::stdout_json(&legacy.stdout);
	assert_eq!(json["sequence_mode"], "legacy");
	assert_eq!(json["value"]["hosts"], serde_json::json!([]));
	let stderr = String::from_utf8_lossy(&legacy.stderr);
	assert!(stderr.contains("legacy sequence mode ignores list elements"), "expected warning on stderr: {stderr}");

	let json = run_hcldecode_json(&["decode", &fixture, "--shape", "map<string, list<string>>", "--elements", "--json"]);
	assert_eq!(json["sequence_mode"], "elements");
	assert_eq!(json["value"]["hosts"], serde_json::json!(["a", "b"]));
	assert_eq!(json["value"]["backups"], serde_json::json!([]));
}

#[test]
fn decode_reports_path_on_type_error() {
	let fixture = fixture_arg("mistyped.hcl");
	let output = run_hcldecode(&["decode", &fixture, "--shape", "map<string, map<string, int>>"]);

	assert!(!output.status.success(), "decode should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: root.ports.https: unknown type string (expected int)"), "unexpected stderr: {stderr}");
}

#[test]
fn decode_rejects_non_string_keys_and_bad_shapes() {
	let fixture = fixture_arg("servers.hcl");

	let output = run_hcldecode(&["decode", &fixture, "--shape", "map<int, any>"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("map must have string keys"));

	let output = run_hcldecode(&["decode", &fixture, "--shape", "list<"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid shape"));
}

#[test]
fn decode_text_output_lists_entries() {
	let fixture = fixture_arg("servers.hcl");
	let output = run_hcldecode(&["decode", &fixture]);

	assert!(output.status.success(), "decode should succeed");
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
	assert!(stdout.contains("shape: any"));
	assert!(stdout.contains("name = \"edge\""), "unexpected stdout: {stdout}");
}
