// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `mrtrigger evaluate` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use yare::parameterized;

fn mrtrigger() -> Command {
    let mut cmd = cargo_bin_cmd!("mrtrigger");
    cmd.env_remove("MRTRIGGER_LOG");
    cmd
}

const JOBS_TOML: &str = r#"
[[jobs]]
name = "api"
states = ["opened", "reopened"]
cancel_pending_builds_on_update = true
run = "cat > api-payload.json"

[[jobs]]
name = "release"
states = ["merged"]
run = "touch release-ran"

[[jobs]]
name = "approved"
actions = ["approved"]
run = "touch approved-ran"

[jobs.label_filter]
exclude = ["hold"]
"#;

fn event_json(state: &str, action: &str, description: &str, labels: &[&str]) -> String {
    serde_json::json!({
        "iid": 42,
        "title": "Cache build artifacts",
        "state": state,
        "action": action,
        "source": {
            "name": "builder",
            "namespace": "infra",
            "web_url": "https://git.example.com/infra/builder",
            "ssh_url": "git@git.example.com:infra/builder.git",
            "http_url": "https://git.example.com/infra/builder.git"
        },
        "target": {
            "name": "builder",
            "namespace": "infra",
            "web_url": "https://git.example.com/infra/builder",
            "ssh_url": "git@git.example.com:infra/builder.git",
            "http_url": "https://git.example.com/infra/builder.git"
        },
        "source_branch": "cache",
        "target_branch": "main",
        "last_commit": {
            "id": "0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e",
            "message": "Cache artifacts between stages",
            "author": { "name": "Robin Roe", "email": "robin@example.com" }
        },
        "description": description,
        "labels": labels
    })
    .to_string()
}

fn init_project(jobs_toml: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".mrtrigger");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("jobs.toml"), jobs_toml).unwrap();
    temp
}

fn write_event(dir: &Path, json: &str) -> String {
    let path = dir.join("event.json");
    fs::write(&path, json).unwrap();
    path.display().to_string()
}

#[test]
fn evaluate_prints_one_line_per_job() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), &event_json("opened", "update", "", &[]));

    mrtrigger()
        .args(["evaluate", &event])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^build api [0-9a-f]{64}$").unwrap())
        .stdout(predicate::str::contains(
            "skip release: state 'opened' and action 'update' are not enabled",
        ))
        .stdout(predicate::str::contains(
            "skip approved: state 'opened' and action 'update' are not enabled",
        ));
}

#[test]
fn evaluate_runs_dispatch_command_in_project_root() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), &event_json("opened", "update", "", &[]));
    let nested = temp.path().join("sub/dir");
    fs::create_dir_all(&nested).unwrap();

    mrtrigger()
        .args(["evaluate", &event])
        .current_dir(&nested)
        .assert()
        .success();

    let payload = fs::read_to_string(temp.path().join("api-payload.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value["job"], "api");
    assert_eq!(value["cancel_pending"], true);
    assert_eq!(value["parameters"]["merge_request_iid"], 42);
    assert_eq!(value["parameters"]["target_ref"], "refs/heads/main");
    assert!(!temp.path().join("release-ran").exists());
}

#[test]
fn evaluate_dry_run_dispatches_nothing() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), &event_json("merged", "merge", "", &[]));

    mrtrigger()
        .args(["evaluate", &event, "--dry-run"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("build release "));

    assert!(!temp.path().join("release-ran").exists());
}

#[test]
fn evaluate_reads_event_from_stdin() {
    let temp = init_project(JOBS_TOML);

    mrtrigger()
        .args(["evaluate", "-", "--dry-run", "--job", "release"])
        .current_dir(temp.path())
        .write_stdin(event_json("merged", "merge", "", &[]))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("build release "));
}

#[test]
fn evaluate_with_directory_flag() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), &event_json("merged", "merge", "", &[]));
    let elsewhere = TempDir::new().unwrap();

    mrtrigger()
        .args(["-C", &temp.path().display().to_string()])
        .args(["evaluate", &event, "--dry-run", "--job", "release"])
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("build release "));
}

#[parameterized(
    description = { "Please skip [ci-skip]", "skip api: [ci-skip] marker in description" },
    no_marker = { "Regular change", "build api " },
)]
fn evaluate_honors_ci_skip(description: &str, expected: &str) {
    let temp = init_project(JOBS_TOML);
    let event = write_event(
        temp.path(),
        &event_json("opened", "open", description, &[]),
    );

    mrtrigger()
        .args(["evaluate", &event, "--dry-run", "--job", "api"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn evaluate_label_filter_blocks_approval() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(
        temp.path(),
        &event_json("updated", "approved", "", &["hold"]),
    );

    mrtrigger()
        .args(["evaluate", &event, "--dry-run", "--job", "approved"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "skip approved: labels are filtered out",
        ));
}

#[test]
fn evaluate_json_output() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), &event_json("opened", "update", "", &[]));

    let output = mrtrigger()
        .args(["evaluate", &event, "--dry-run", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = value.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["job"], "api");
    assert_eq!(results[0]["outcome"], "build");
    assert_eq!(results[0]["dispatched"], false);
    assert_eq!(results[0]["cancel_pending"], true);
    assert_eq!(results[1]["outcome"], "skip");
}

#[test]
fn evaluate_same_event_has_same_fingerprint() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), &event_json("opened", "update", "", &[]));

    let run = || {
        let output = mrtrigger()
            .args(["evaluate", &event, "--dry-run", "--job", "api"])
            .current_dir(temp.path())
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn evaluate_dispatch_failure_exits_nonzero_after_all_jobs() {
    let temp = init_project(
        r#"
[[jobs]]
name = "broken"
states = ["opened"]
run = "exit 4"

[[jobs]]
name = "working"
states = ["opened"]
run = "touch working-ran"
"#,
    );
    let event = write_event(temp.path(), &event_json("opened", "update", "", &[]));

    mrtrigger()
        .args(["evaluate", &event])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed broken: "))
        .stdout(predicate::str::contains("build working "))
        .stderr(predicate::str::contains("1 of 2 dispatches failed"));

    assert!(temp.path().join("working-ran").exists());
}

#[test]
fn evaluate_unknown_job_fails() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), &event_json("opened", "update", "", &[]));

    mrtrigger()
        .args(["evaluate", &event, "--job", "nope"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("job not found: nope"));
}

#[test]
fn evaluate_invalid_event_fails() {
    let temp = init_project(JOBS_TOML);
    let event = write_event(temp.path(), r#"{"iid": 1, "state": "draft"}"#);

    mrtrigger()
        .args(["evaluate", &event])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn evaluate_missing_event_file_fails() {
    let temp = init_project(JOBS_TOML);

    mrtrigger()
        .args(["evaluate", "missing.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to read event from missing.json",
        ));
}
