use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn vsolve_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vsolve").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write_index(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_matches_printed_in_index_order() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(
        tmp.path(),
        "release.idx",
        "bar 2.0 ruby\nbaz 0.1 ruby\nfoo 1.5 ruby\nfoo 1.4 ruby\n",
    );

    vsolve_cmd(tmp.path())
        .arg(&index)
        .write_stdin("bar = 2.0\nfoo >= 1.0\n")
        .assert()
        .success()
        .stdout("bar 2.0\nfoo 1.5\n");
}

#[test]
fn test_satisfied_package_not_repeated_from_second_index() {
    let tmp = TempDir::new().unwrap();
    let first = write_index(tmp.path(), "first.idx", "foo 1.0\n");
    let second = write_index(tmp.path(), "second.idx", "foo 2.0\n");

    vsolve_cmd(tmp.path())
        .arg(&first)
        .arg(&second)
        .write_stdin("foo >= 1.0\n")
        .assert()
        .success()
        .stdout("foo 1.0\n");
}

#[test]
fn test_unresolved_package_fails() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "bar 1.0\nfoo 1.0\n");

    vsolve_cmd(tmp.path())
        .arg(&index)
        .write_stdin("baz = 9.9\n")
        .assert()
        .failure()
        .stdout("baz -\n")
        .stderr(predicate::str::contains("could not be resolved"));
}

#[test]
fn test_unresolved_listed_after_matches() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "foo 1.0\n");

    vsolve_cmd(tmp.path())
        .arg(&index)
        .write_stdin("baz = 9.9\nfoo >= 1.0\n")
        .assert()
        .failure()
        .stdout("foo 1.0\nbaz -\n");
}

#[test]
fn test_conjunction_rejects_out_of_range_version() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "foo 2.5\nfoo 1.9\n");

    vsolve_cmd(tmp.path())
        .arg(&index)
        .write_stdin("foo >= 1.0\nfoo < 2.0\n")
        .assert()
        .success()
        .stdout("foo 1.9\n");
}

#[test]
fn test_compatible_release_operator() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(
        tmp.path(),
        "release.idx",
        "pack 1.9.0\npack 1.3.0\npack 1.2.999\npack 1.2.3\n",
    );

    vsolve_cmd(tmp.path())
        .arg(&index)
        .write_stdin("pack ~> 1.2.3\n")
        .assert()
        .success()
        .stdout("pack 1.2.999\n");
}

#[test]
fn test_missing_index_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let present = write_index(tmp.path(), "present.idx", "foo 1.0\n");

    vsolve_cmd(tmp.path())
        .arg(tmp.path().join("missing.idx"))
        .arg(&present)
        .write_stdin("foo >= 1.0\n")
        .assert()
        .success()
        .stdout("foo 1.0\n");
}

#[test]
fn test_directory_index_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let present = write_index(tmp.path(), "present.idx", "foo 1.0\n");

    vsolve_cmd(tmp.path())
        .arg(tmp.path())
        .arg(&present)
        .arg("--verbose")
        .write_stdin("foo >= 1.0\n")
        .assert()
        .success()
        .stdout("foo 1.0\n")
        .stderr(predicate::str::contains("Skipped"));
}

#[test]
fn test_all_flag_prints_every_match() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "foo 1.2\nfoo 1.1\nfoo 0.9\n");

    vsolve_cmd(tmp.path())
        .args(["--all"])
        .arg(&index)
        .write_stdin("foo >= 1.0\n")
        .assert()
        .success()
        .stdout("foo 1.2\nfoo 1.1\n");
}

#[test]
fn test_lenient_parse_ignores_lines_after_malformed_one() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "aaa 1.0\nccc 1.0\n");

    vsolve_cmd(tmp.path())
        .arg(&index)
        .write_stdin("aaa >= 1.0\nbbb => 1.0\nccc >= 1.0\n")
        .assert()
        .success()
        .stdout("aaa 1.0\n");
}

#[test]
fn test_strict_parse_reports_line_number() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "aaa 1.0\n");

    vsolve_cmd(tmp.path())
        .args(["--strict"])
        .arg(&index)
        .write_stdin("aaa >= 1.0\nbbb => 1.0\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_constraints_from_file() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "rack 1.2.0 ruby\n");
    let constraints = write_index(tmp.path(), "constraints.txt", "rack >= 1.0\n");

    vsolve_cmd(tmp.path())
        .arg("--constraints")
        .arg(&constraints)
        .arg(&index)
        .assert()
        .success()
        .stdout("rack 1.2.0\n");
}

#[test]
fn test_default_index_from_config() {
    let tmp = TempDir::new().unwrap();
    write_index(tmp.path(), "release.idx", "rack 1.2.0 ruby\n");
    let config_dir = tmp.path().join(".vsolve");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[index]\ndefault = [\"~/release.idx\"]\n",
    )
    .unwrap();

    vsolve_cmd(tmp.path())
        .write_stdin("rack >= 1.0\n")
        .assert()
        .success()
        .stdout("rack 1.2.0\n");
}

#[test]
fn test_config_enables_strict_mode() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "aaa 1.0\n");
    let config = write_index(tmp.path(), "vsolve.toml", "[resolve]\nstrict = true\n");

    vsolve_cmd(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg(&index)
        .write_stdin("aaa >= 1.0\nnot a constraint line\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_no_index_fails() {
    let tmp = TempDir::new().unwrap();

    vsolve_cmd(tmp.path())
        .write_stdin("foo >= 1.0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No index files given"));
}

#[test]
fn test_verbose_prints_status_on_stderr() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(tmp.path(), "release.idx", "foo 1.0\n");

    vsolve_cmd(tmp.path())
        .arg("--verbose")
        .arg(&index)
        .write_stdin("foo >= 1.0\n")
        .assert()
        .success()
        .stdout("foo 1.0\n")
        .stderr(predicate::str::contains("Scanning"))
        .stderr(predicate::str::contains("Resolved"));
}

#[test]
fn test_help_mentions_operators() {
    let tmp = TempDir::new().unwrap();

    vsolve_cmd(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INDEX_FILE"))
        .stdout(predicate::str::contains("~>"));
}
