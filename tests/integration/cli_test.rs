use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::utils::rows;

fn demos() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos")
}

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_popup-formatter"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "info")
        .output()
        .expect("run popup-formatter")
}

#[test]
fn test_default_config_path() {
    let output = run_cli(&demos(), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(rows(&stdout).len(), 4);
}

#[test]
fn test_stdout_carries_only_the_fragment() {
    let output = run_cli(&demos(), &["popup_ordered.json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<div>"));
    assert!(stdout.trim_end().ends_with("</div>"));
    assert_eq!(rows(&stdout).len(), 10);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Loading run configuration"));
    assert!(!stdout.contains("Loading run configuration"));
}

#[test]
fn test_missing_config_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["missing.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.json"));
}

#[test]
fn test_help_is_not_read_as_config() {
    let output = run_cli(&demos(), &["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage"));
    assert!(!stdout.contains("<div>"));
}

#[test]
fn test_unknown_arguments_are_rejected() {
    let output = run_cli(&demos(), &["popup.json", "--bogus"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = run_cli(&demos(), &["popup.json", "extra.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
