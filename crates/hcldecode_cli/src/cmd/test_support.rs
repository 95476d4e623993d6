use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static HCLDECODE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	hcldecode_testkit::fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_hcldecode(args: &[&str]) -> Output {
	Command::new(hcldecode_bin()).args(args).env_remove("RUST_LOG").output().expect("hcldecode command executes")
}

pub(crate) fn run_hcldecode_json(args: &[&str]) -> serde_json::Value {
	let output = run_hcldecode(args);
	assert!(
		output.status.success(),
		"hcldecode command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	hcldecode_testkit::stdout_json(&output.stdout)
}

fn hcldecode_bin() -> &'static PathBuf {
	HCLDECODE_BIN.get_or_init(resolve_hcldecode_bin)
}

fn resolve_hcldecode_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_hcldecode") {
		return PathBuf::from(path);
	}

	let mut bin = hcldecode_testkit::target_dir().join("debug");
	bin.push(if cfg!(windows) { "hcldecode.exe" } else { "hcldecode" });

	let status = Command::new("cargo")
		.current_dir(hcldecode_testkit::workspace_root())
		.args(["build", "--quiet", "--bin", "hcldecode"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build hcldecode binary at {}", bin.display());

	bin
}
