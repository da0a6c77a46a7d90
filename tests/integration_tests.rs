//! Integration tests for the findmatch CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn findmatch() -> Command {
    let mut cmd = Command::cargo_bin("findmatch").unwrap();
    // keep the host environment from leaking into results
    cmd.env_remove("SYSTEM_DEFAULTWORKINGDIRECTORY").env_remove("RUST_LOG");
    cmd
}

/// Small project tree: src/{lib.rs,util/mod.rs}, docs/guide.md, README.md
fn project() -> (TempDir, String) {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/util")).unwrap();
    fs::create_dir_all(temp.path().join("docs")).unwrap();
    fs::write(temp.path().join("src/lib.rs"), "").unwrap();
    fs::write(temp.path().join("src/util/mod.rs"), "").unwrap();
    fs::write(temp.path().join("docs/guide.md"), "").unwrap();
    fs::write(temp.path().join("README.md"), "").unwrap();
    let root = temp.path().to_str().unwrap().to_string();
    (temp, root)
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    findmatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find paths on disk selected by glob patterns"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    findmatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("findmatch"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    findmatch()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_walk_lists_tree_in_preorder() {
    let (_temp, root) = project();
    let output = findmatch().args(["walk", &root]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], root);
    let src = lines.iter().position(|l| *l == format!("{root}/src")).unwrap();
    let lib = lines.iter().position(|l| *l == format!("{root}/src/lib.rs")).unwrap();
    assert!(src < lib);
}

#[test]
fn test_walk_missing_root_prints_nothing() {
    let (_temp, root) = project();
    findmatch()
        .args(["walk", &format!("{root}/nope")])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_find_with_excludes() {
    let (_temp, root) = project();
    findmatch()
        .args(["find", "--root", &root, "**/*", "!**/*.md", "!src/util"])
        .assert()
        .success()
        .stdout(format!("{root}/docs\n{root}/src\n{root}/src/lib.rs\n{root}/src/util/mod.rs\n"));
}

#[test]
fn test_find_uses_working_directory_by_default() {
    let (temp, _root) = project();
    findmatch()
        .current_dir(temp.path())
        .args(["find", "src/*.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/lib.rs"))
        .stdout(predicate::str::contains("mod.rs").not());
}

#[test]
fn test_find_default_root_from_environment() {
    let (temp, root) = project();
    findmatch()
        .current_dir(std::env::temp_dir())
        .env("SYSTEM_DEFAULTWORKINGDIRECTORY", temp.path())
        .args(["find", "*.md"])
        .assert()
        .success()
        .stdout(format!("{root}/README.md\n"));
}

#[test]
fn test_find_json_output() {
    let (_temp, root) = project();
    let output = findmatch()
        .args(["find", "--root", &root, "--format", "json", "**/*.rs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let paths: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(paths, vec![format!("{root}/src/lib.rs"), format!("{root}/src/util/mod.rs")]);
}

#[test]
fn test_find_match_base_and_braces() {
    let (_temp, root) = project();
    findmatch()
        .args(["find", "--root", &root, "--match-base", "*.md"])
        .assert()
        .success()
        .stdout(format!("{root}/README.md\n{root}/docs/guide.md\n"));

    findmatch()
        .args(["find", "--root", &root, "--braces", "{README.md,src/lib.rs}"])
        .assert()
        .success()
        .stdout(format!("{root}/README.md\n{root}/src/lib.rs\n"));
}

#[test]
fn test_match_reads_stdin() {
    findmatch()
        .args(["match", "-p", "/src/**/*.rs", "-p", "!/src/gen/**"])
        .write_stdin("/src/a.rs\n/src/gen/b.rs\n/docs/c.md\n/src/deep/d.rs\n")
        .assert()
        .success()
        .stdout("/src/a.rs\n/src/deep/d.rs\n");
}

#[test]
fn test_match_with_pattern_root_and_arguments() {
    findmatch()
        .args(["match", "-p", "*.txt", "--root", "/base", "/base/a.txt", "/other/b.txt"])
        .assert()
        .success()
        .stdout("/base/a.txt\n");
}

#[test]
fn test_legacy_patterns() {
    let (_temp, root) = project();
    findmatch()
        .args(["legacy", "--root", &root, "+:**/*.rs;-:**/util/*"])
        .assert()
        .success()
        .stdout(format!("{root}/src/lib.rs\n"));
}

#[test]
fn test_legacy_directories() {
    let (_temp, root) = project();
    findmatch()
        .args(["legacy", "--root", &root, "--directories", "src/*"])
        .assert()
        .success()
        .stdout(format!("{root}/src\n{root}/src/util\n"));
}

#[test]
fn test_legacy_trailing_slash_fails() {
    let (_temp, root) = project();
    findmatch()
        .args(["legacy", "--root", &root, "src/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

/// Test configuration functionality
#[test]
fn test_config_operations() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[match]\nmatch_base = true\n").unwrap();
    let config_path = config_path.to_str().unwrap();

    findmatch()
        .current_dir(temp_dir.path())
        .args(["config", "validate", "--config", config_path])
        .assert()
        .success();

    findmatch()
        .args(["--config", config_path, "config", "get", "match.match_base"])
        .assert()
        .success()
        .stdout("true\n");

    findmatch()
        .args(["--config", config_path, "config", "show", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"follow_symbolic_links\": true"));
}

#[test]
fn test_config_drives_matching() {
    let (temp, root) = project();
    fs::write(temp.path().join("findmatch.toml"), "[match]\nmatch_base = true\n").unwrap();

    findmatch()
        .current_dir(temp.path())
        .args(["find", "--root", &root, "*.rs"])
        .assert()
        .success()
        .stdout(format!("{root}/src/lib.rs\n{root}/src/util/mod.rs\n"));
}

#[test]
fn test_environment_overrides_config() {
    let (_temp, root) = project();
    findmatch()
        .env("FINDMATCH_MATCH__MATCH_BASE", "true")
        .args(["find", "--root", &root, "guide.md"])
        .assert()
        .success()
        .stdout(format!("{root}/docs/guide.md\n"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[walk]\nskip_missing_files = \"sometimes\"\n").unwrap();

    findmatch()
        .args(["--config", config_path.to_str().unwrap(), "config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid findmatch configuration"));
}
