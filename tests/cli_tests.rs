//! CLI interface tests

mod common;

use assert_cmd::Command;
use common::{alice_export, bob_export};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Exports {
    dir: TempDir,
    alice: PathBuf,
    bob: PathBuf,
}

fn exports() -> Exports {
    let dir = TempDir::new().unwrap();
    let alice = dir.path().join("alice.zip");
    let bob = dir.path().join("bob.zip");
    fs::write(&alice, alice_export()).unwrap();
    fs::write(&bob, bob_export()).unwrap();
    Exports { dir, alice, bob }
}

fn cinematch(exports: &Exports) -> Command {
    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.env_remove("CINEMATCH_CONFIG")
        .env_remove("RUST_LOG")
        .arg("alice")
        .arg(&exports.alice)
        .arg("bob")
        .arg(&exports.bob);
    cmd
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cinematch"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "comparing two film-diary exports",
        ));
}

#[test]
fn test_no_people_prints_usage() {
    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.env_remove("CINEMATCH_CONFIG")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: cinematch <name person 1> <zip person 1> <name person 2> <zip person 2>",
        ));
}

#[test]
fn test_missing_archive() {
    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.env_remove("CINEMATCH_CONFIG")
        .args(["alice", "/definitely/missing.zip", "bob", "/also/missing.zip"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Export archive not found"));
}

#[test]
fn test_one_shot_shared_watched() {
    let exports = exports();
    cinematch(&exports)
        .args(["-c", "m"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "-> you both share 2 watched movies\n\
             Crouching Tiger, Hidden Dragon (2000)\n\
             Heat (1995)\n",
        ));
}

#[test]
fn test_one_shot_cross_both_directions() {
    let exports = exports();
    cinematch(&exports)
        .args(["--command", "movies_watchlist"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "-> alice watched 2 movies that bob watchlisted\nAlien (1979)\nDune (1984)\n",
        ))
        .stdout(predicate::str::contains(
            "-> bob watched 1 movies that alice watchlisted\nStalker (1979)\n",
        ));
}

#[test]
fn test_unknown_one_shot_command_fails() {
    let exports = exports();
    cinematch(&exports)
        .args(["-c", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown command 'bogus'"));
}

#[test]
fn test_piped_console_session() {
    let exports = exports();
    cinematch(&exports)
        .write_stdin("s\nwhat\nlw\nq\nm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded info:"))
        .stdout(predicate::str::contains("    -> share 2 watched movies"))
        .stdout(predicate::str::contains("Unknown command 'what'"))
        .stdout(predicate::str::contains(
            "-> bob liked 1 movies that alice watchlisted\nStalker (1979)\n",
        ))
        .stdout(predicate::str::ends_with("bye!\n"));
}

#[test]
fn test_console_exits_cleanly_at_end_of_input() {
    let exports = exports();
    cinematch(&exports)
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("q/quit - quit"));
}

#[test]
fn test_json_output() {
    let exports = exports();
    let output = cinematch(&exports)
        .args(["--output-format", "json", "-c", "ml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let reports: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&stdout)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["heading"], "alice watched 1 movies that bob liked");
    assert_eq!(reports[0]["movies"][0]["title"], "Heat");
    assert_eq!(reports[1]["movies"][0]["year"], "2000");
}

#[test]
fn test_invalid_output_format() {
    let exports = exports();
    cinematch(&exports)
        .args(["--output-format", "xml", "-c", "s"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid format: xml"));
}

#[test]
fn test_config_file() {
    let exports = exports();
    let config_path = exports.dir.path().join("cinematch.yaml");
    let config_content = r"
people:
  - name: alice
    export: alice.zip
  - name: bob
    export: bob.zip
";
    fs::write(&config_path, config_content).unwrap();

    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.env("CINEMATCH_CONFIG", &config_path)
        .args(["-c", "l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-> you both share 0 liked movies"));
}

#[test]
fn test_missing_config_file() {
    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.arg("--config")
        .arg("nonexistent.yaml")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_export_missing_list() {
    let exports = exports();
    let partial = exports.dir.path().join("partial.zip");
    fs::write(&partial, common::zip_bytes(&[("watched.csv", "Name,Year\n")])).unwrap();

    let mut cmd = Command::cargo_bin("cinematch").unwrap();
    cmd.env_remove("CINEMATCH_CONFIG")
        .arg("alice")
        .arg(&exports.alice)
        .arg("carol")
        .arg(&partial)
        .args(["-c", "s"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("has no 'likes/films.csv'"));
}
