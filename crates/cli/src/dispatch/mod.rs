// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build dispatch through per-job shell commands.
//!
//! When a job decides to build, its `run` command is started from the project
//! root with the build parameters in the environment and a JSON
//! [`DispatchPayload`] on stdin:
//!
//! ```toml
//! [[jobs]]
//! name = "api"
//! states = ["opened", "reopened"]
//! run = "./scripts/queue-build.sh"
//! ```
//!
//! The command sees `MR_JOB`, `MR_FINGERPRINT`, `MR_CANCEL_PENDING` and the
//! `MR_*` parameter bindings, and its exit status decides whether the
//! dispatch succeeded.

pub mod executor;
pub mod payload;

pub use executor::ShellDispatcher;
pub use payload::DispatchPayload;
