#![allow(dead_code)]

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[allow(deprecated)]
pub fn pubgate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pubgate").unwrap();
    cmd.env_remove("USERNAME")
        .env_remove("TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// A workspace with one JVM library publishing to `repo_url`.
pub fn workspace(repo_url: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("Pubgate.toml"),
        format!("[workspace]\nmembers = [\"core\"]\n\n[repository]\nurl = \"{repo_url}\"\n"),
    )
    .unwrap();
    fs::write(
        root.join("gradle.properties"),
        "GROUP=com.example\nVERSION_NAME=1.2.0\nPOM_NAME=Example Core\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("core/build/libs")).unwrap();
    fs::write(
        root.join("core/Module.toml"),
        "[module]\nplugins = [\"java-library\"]\n\n[components.java]\nartifacts = [\"build/libs/core.jar\"]\n",
    )
    .unwrap();
    fs::write(root.join("core/build/libs/core.jar"), b"jar-bytes").unwrap();
    tmp
}
