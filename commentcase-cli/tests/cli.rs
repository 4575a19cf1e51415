use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const SOURCE: &str = "\
// Server Runs Things
package main

type Server struct {
\t// The Listen Address
\tAddr string
}

func (s *Server) Start() {
\t// Bind The Socket
\t// TODO Handle Errors
}
";

fn fixture(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("server.go");
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn prints_normalized_source_to_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path);

    cmd.assert().success().stdout(
        predicate::str::contains("// Server Runs Things")
            .and(predicate::str::contains("\t// the listen address"))
            .and(predicate::str::contains("\t// bind the socket"))
            .and(predicate::str::contains("\t// TODO Handle Errors")),
    );
    assert_eq!(fs::read_to_string(&path).expect("read back"), SOURCE);
}

#[test]
fn write_rewrites_file_in_place() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path).arg("--write");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("updated 2 comments"));

    let rewritten = fs::read_to_string(&path).expect("read back");
    assert!(rewritten.contains("\t// the listen address"));
    assert!(rewritten.contains("// Server Runs Things"));
}

#[test]
fn check_fails_when_changes_are_pending() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path).arg("--check");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("would update 2 comments"));
    assert_eq!(fs::read_to_string(&path).expect("read back"), SOURCE);
}

#[test]
fn check_passes_on_normalized_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(
        dir.path(),
        "package main\n\nfunc main() {\n\t// already fine\n}\n",
    );

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path).arg("--check");

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn title_mode_only_touches_leading_rune() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path).args(["--mode", "title"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\t// the Listen Address"));
}

#[test]
fn json_prints_one_summary_per_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path).arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let line = String::from_utf8(output).expect("utf-8 stdout");
    let summary: serde_json::Value = serde_json::from_str(line.trim()).expect("json summary");

    assert_eq!(summary["mode"], "lowercase");
    assert_eq!(summary["changes"], 2);
    assert_eq!(summary["modified"], true);
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);
    fs::write(dir.path().join(".commentcase.toml"), "[casing]\nmode = \"title\"\n")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\t// the Listen Address"));
}

#[test]
fn mode_flag_beats_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[casing]\nmode = \"title\"\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path())
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .args(["--mode", "lowercase"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\t// the listen address"));
}

#[test]
fn unknown_mode_exits_with_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fixture(dir.path(), SOURCE);

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path).args(["--mode", "shout"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("unknown case mode 'shout'"));
}

#[test]
fn missing_file_exits_with_error() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(dir.path().join("missing.go"));

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn write_refuses_non_utf8_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("server.go");
    let source = b"package main\n\nvar raw = \"\xff\"\n\nfunc main() {\n\t// Bind The Socket\n}\n";
    fs::write(&path, source).expect("write fixture");

    let mut cmd = cargo_bin_cmd!("commentcase");
    cmd.current_dir(dir.path()).arg(&path).arg("--write");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("not valid UTF-8"));
    assert_eq!(fs::read(&path).expect("read back"), source);
}
