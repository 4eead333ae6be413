#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pubgate_core::config::Environment;
use pubgate_core::workspace::Workspace;
use tempfile::TempDir;

/// Workspace with a JVM library, an Android library, a multiplatform module
/// and a bare module, publishing to `repo_url`.
pub fn fixture(repo_url: &str, gate: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("Pubgate.toml"),
        format!(
            r#"
[workspace]
members = ["apollo-api", "apollo-runtime-android", "apollo-kmp", "docs"]

[repository]
url = "{repo_url}"

[gate]
on-error = "{gate}"
"#
        ),
    )
    .unwrap();
    fs::write(
        root.join("gradle.properties"),
        "GROUP=com.apollographql\n\
         VERSION_NAME=4.0.0\n\
         POM_NAME=Apollo Kotlin\n\
         POM_LICENCE_NAME=MIT License\n",
    )
    .unwrap();

    module(
        root,
        "apollo-api",
        "[module]\nplugins = [\"org.jetbrains.kotlin.jvm\"]\n\n[components.java]\nartifacts = [\"build/libs/apollo-api.jar\"]\n",
    );
    fs::create_dir_all(root.join("apollo-api/build/libs")).unwrap();
    fs::write(root.join("apollo-api/build/libs/apollo-api.jar"), b"fake-jar").unwrap();

    module(
        root,
        "apollo-runtime-android",
        "[module]\nplugins = [\"com.android.library\"]\n\n[components.release]\nartifacts = [\"build/outputs/aar/runtime-release.aar\"]\n",
    );
    fs::create_dir_all(root.join("apollo-runtime-android/build/outputs/aar")).unwrap();
    fs::write(
        root.join("apollo-runtime-android/build/outputs/aar/runtime-release.aar"),
        b"fake-aar",
    )
    .unwrap();

    module(
        root,
        "apollo-kmp",
        "[module]\nplugins = [\"org.jetbrains.kotlin.multiplatform\"]\n",
    );
    fs::create_dir_all(root.join("docs")).unwrap();
    tmp
}

fn module(root: &Path, name: &str, manifest: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Module.toml"), manifest).unwrap();
}

pub fn load(tmp: &TempDir, overrides: &[(&str, &str)]) -> Workspace {
    let overrides: BTreeMap<String, String> = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Workspace::load(tmp.path(), &overrides).unwrap()
}

pub fn env(pairs: &[(&str, &str)]) -> Environment {
    Environment::from_map(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}
