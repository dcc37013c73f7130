use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn gembatch(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("gembatch").unwrap();
    // Isolate from any real user config
    cmd.env("HOME", home);
    cmd
}

#[test]
fn missing_input_file_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ai.txt");
    let output = dir.path().join("llm_responses.json");

    gembatch(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found or unreadable"));

    assert!(!output.exists());
}

#[test]
fn empty_input_file_warns_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ai.txt");
    let output = dir.path().join("llm_responses.json");
    fs::write(&input, "").unwrap();

    gembatch(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found"));

    assert!(!output.exists());
}

#[test]
fn blank_only_input_is_treated_as_empty() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ai.txt");
    let output = dir.path().join("llm_responses.json");
    fs::write(&input, "\n   \n\t\n").unwrap();

    gembatch(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found"));

    assert!(!output.exists());
}

#[test]
fn version_subcommand_prints_package_version() {
    let dir = tempdir().unwrap();

    gembatch(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "gembatch {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn config_subcommand_shows_resolved_settings() {
    let dir = tempdir().unwrap();

    gembatch(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[api]"))
        .stdout(predicate::str::contains("generativelanguage.googleapis.com"));
}

#[test]
fn init_writes_config_and_is_not_repeated() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(".gembatch").join("config.toml");

    gembatch(dir.path()).arg("init").assert().success();
    assert!(config_path.exists());

    gembatch(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
