//! Integration tests for next-fingerprint-guard
//!
//! These tests verify end-to-end behavior by creating real project trees
//! with a package.json and a fake `.next` build output, then executing the
//! guard through the command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a project with a manifest and a small `.next` tree
#[allow(unused)]
pub fn create_test_project(next_version: &str) -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(
        temp.path().join("package.json"),
        format!(
            r#"{{
  "name": "demo-app",
  "dependencies": {{
    "next": "^{next_version}",
    "react": "^18.3.1"
  }}
}}
"#
        ),
    )
    .unwrap();

    let chunks = temp.path().join(".next/static/chunks");
    fs::create_dir_all(&chunks).unwrap();
    fs::write(
        chunks.join("main.js"),
        format!(
            "var id=\"next@{next_version}_@babel+core@7.1_0123456789abcdef0123456789abcdef\";\nvar env=\"@next+env@{next_version}\";\n"
        ),
    )
    .unwrap();

    let server = temp.path().join(".next/server");
    fs::create_dir_all(&server).unwrap();
    fs::write(
        server.join("manifest.json"),
        format!(r#"{{"version": "{next_version}"}}"#),
    )
    .unwrap();

    temp
}

/// Helper to run the guard against a project root
#[allow(unused)]
pub fn run_guard(project_root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("next-fingerprint-guard");
    cmd.arg("--root")
        .arg(project_root)
        .args(extra_args)
        .env_remove("NEXT_TARGET_VERSION")
        .current_dir(project_root);

    cmd.assert()
}
