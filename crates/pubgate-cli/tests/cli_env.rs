mod common;

use common::{pubgate_cmd, workspace};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    pubgate_cmd()
        .current_dir(tmp.path())
        .args(["env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Pubgate.toml"));
}

#[test]
fn test_env_masks_token() {
    let tmp = workspace("https://maven.example.com/releases");

    pubgate_cmd()
        .current_dir(tmp.path())
        .env("TOKEN", "ghp_supersecret")
        .env("USERNAME", "octocat")
        .args(["env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://maven.example.com/releases"))
        .stdout(predicate::str::contains("core: username = octocat, token = ********"))
        .stdout(predicate::str::contains("ghp_supersecret").not());
}

#[test]
fn test_env_reveal_shows_token() {
    let tmp = workspace("https://maven.example.com/releases");

    pubgate_cmd()
        .current_dir(tmp.path())
        .env("TOKEN", "ghp_supersecret")
        .args(["env", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("token = ghp_supersecret"));
}

#[test]
fn test_property_override_beats_environment() {
    let tmp = workspace("https://maven.example.com/releases");

    pubgate_cmd()
        .current_dir(tmp.path().join("core"))
        .env("USERNAME", "env-user")
        .args(["-P", "gpr.user=prop-user", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("username = prop-user"))
        .stdout(predicate::str::contains("token = <not set>"));
}

#[test]
fn test_malformed_override_fails() {
    let tmp = workspace("https://maven.example.com/releases");

    pubgate_cmd()
        .current_dir(tmp.path())
        .args(["-P", "no-equals-sign", "env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid property override"));
}
