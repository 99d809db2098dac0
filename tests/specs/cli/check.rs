// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `mrtrigger check` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mrtrigger() -> Command {
    cargo_bin_cmd!("mrtrigger")
}

fn init_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".mrtrigger");
    fs::create_dir_all(&config_dir).unwrap();
    for (name, content) in files {
        fs::write(config_dir.join(name), content).unwrap();
    }
    temp
}

#[test]
fn check_lists_jobs_from_toml_and_json() {
    let temp = init_project(&[
        (
            "jobs.toml",
            "[[jobs]]\nname = \"api\"\nstates = [\"opened\"]\nrun = \"./queue.sh\"\n",
        ),
        (
            "jobs.json",
            r#"{"jobs": [{"name": "web", "actions": ["approved"], "run": "./queue.sh"}]}"#,
        ),
    ]);

    mrtrigger()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 job(s)"))
        .stdout(predicate::str::contains("  api: states=opened actions=-"))
        .stdout(predicate::str::contains("  web: states=- actions=approved"));
}

#[test]
fn check_json_output() {
    let temp = init_project(&[(
        "jobs.toml",
        "[[jobs]]\nname = \"api\"\nstates = [\"opened\"]\nrun = \"./queue.sh\"\n",
    )]);

    let output = mrtrigger()
        .args(["check", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["jobs"][0]["name"], "api");
    assert_eq!(value["jobs"][0]["ci_skip"], true);
    assert_eq!(value["jobs"][0]["branch_filter"]["type"], "all");
}

#[test]
fn check_rejects_invalid_regex() {
    let temp = init_project(&[(
        "jobs.toml",
        r#"
[[jobs]]
name = "api"
states = ["opened"]
run = "./queue.sh"

[jobs.branch_filter]
type = "regex"
target = "release/("
"#,
    )]);

    mrtrigger()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("job 'api'"))
        .stderr(predicate::str::contains("release/("));
}

#[test]
fn check_rejects_duplicate_names_across_files() {
    let temp = init_project(&[
        (
            "jobs.toml",
            "[[jobs]]\nname = \"api\"\nstates = [\"opened\"]\nrun = \"./a.sh\"\n",
        ),
        (
            "jobs.json",
            r#"{"jobs": [{"name": "api", "states": ["merged"], "run": "./b.sh"}]}"#,
        ),
    ]);

    mrtrigger()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate job name: 'api'"));
}

#[test]
fn check_rejects_unknown_state() {
    let temp = init_project(&[(
        "jobs.toml",
        "[[jobs]]\nname = \"api\"\nstates = [\"draft\"]\nrun = \"./a.sh\"\n",
    )]);

    mrtrigger()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse jobs.toml"));
}

#[test]
fn check_empty_config_dir_is_not_configured() {
    let temp = init_project(&[]);

    mrtrigger()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no trigger configuration found"));
}
