// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `mrtrigger completion` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn mrtrigger() -> Command {
    cargo_bin_cmd!("mrtrigger")
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = mrtrigger().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
}

#[test]
fn completion_bash_references_commands() {
    let output = mrtrigger().args(["completion", "bash"]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("complete"));
    assert!(stdout.contains("evaluate"));
    assert!(stdout.contains("check"));
}

#[test]
fn completion_zsh_generates_valid_script() {
    let output = mrtrigger().args(["completion", "zsh"]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#compdef") || stdout.contains("_arguments"));
}

#[test]
fn completion_invalid_shell_fails() {
    mrtrigger()
        .args(["completion", "invalid_shell"])
        .assert()
        .failure();
}
