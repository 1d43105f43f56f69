//! Integration tests for argument handling and the config subcommand.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_no_inputs_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("upmix");
    cmd.arg("--config").arg(dir.path().join("config.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no audio files provided"));
}

#[test]
fn test_only_missing_files_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("upmix");
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg(dir.path().join("missing.wav"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no valid input files"));
}

#[test]
fn test_unknown_format_rejected() {
    let mut cmd = cargo_bin_cmd!("upmix");
    cmd.arg("--format").arg("mp3").arg("song.wav");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'mp3'"));
}

#[test]
fn test_help_mentions_surround() {
    let mut cmd = cargo_bin_cmd!("upmix");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5.1"))
        .stdout(predicate::str::contains("--rear-delay"));
}

#[test]
fn test_config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    let mut cmd = cargo_bin_cmd!("upmix");
    cmd.arg("config").arg("path").arg("--config").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("upmix").join("config.toml");

    let mut init = cargo_bin_cmd!("upmix");
    init.arg("config").arg("init").arg("--config").arg(&path);
    init.assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(path.exists());

    let mut again = cargo_bin_cmd!("upmix");
    again.arg("config").arg("init").arg("--config").arg(&path);
    again
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let mut show = cargo_bin_cmd!("upmix");
    show.arg("config").arg("show").arg("--config").arg(&path);
    show.assert()
        .success()
        .stdout(predicate::str::contains("[upmix]"))
        .stdout(predicate::str::contains("rear_delay_ms = 20.0"))
        .stdout(predicate::str::contains("format = \"flac\""));
}

#[test]
fn test_invalid_config_file_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[upmix\nbroken").unwrap();
    let input = dir.path().join("song.wav");
    std::fs::write(&input, b"").unwrap();

    let mut cmd = cargo_bin_cmd!("upmix");
    cmd.arg("--config").arg(&path).arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}
