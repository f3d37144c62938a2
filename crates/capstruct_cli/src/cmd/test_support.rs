use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use capstruct_testkit::{stdout_json, target_dir as workspace_target_dir};

static CAPSTRUCT_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_capstruct(args: &[&str]) -> Output {
	Command::new(capstruct_bin()).args(args).output().expect("capstruct command executes")
}

pub(crate) fn run_capstruct_stdout(args: &[&str]) -> String {
	let output = run_capstruct(args);
	assert!(
		output.status.success(),
		"capstruct command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

pub(crate) fn run_capstruct_json(args: &[&str]) -> serde_json::Value {
	let output = run_capstruct(args);
	assert!(
		output.status.success(),
		"capstruct command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	stdout_json(&output.stdout)
}

fn capstruct_bin() -> &'static PathBuf {
	CAPSTRUCT_BIN.get_or_init(resolve_capstruct_bin)
}

fn resolve_capstruct_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_capstruct") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "capstruct.exe" } else { "capstruct" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "capstruct"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build capstruct binary at {}", bin.display());

	bin
}
