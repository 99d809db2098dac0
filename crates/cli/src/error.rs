// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the mrtrig library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no trigger configuration found\n  hint: create .mrtrigger/jobs.toml in the project root, or pass -C <path>")]
    NotConfigured,

    #[error("job not found: {0}")]
    JobNotFound(String),

    #[error("duplicate job name: '{0}'\n  hint: job names must be unique across jobs.toml and jobs.json")]
    DuplicateJob(String),

    #[error("job '{job}': {reason}")]
    InvalidJob { job: String, reason: String },

    #[error("dispatch failed for job '{job}': {reason}")]
    Dispatch { job: String, reason: String },

    #[error("{failed} of {total} dispatches failed")]
    PartialDispatchFailure { failed: usize, total: usize },

    #[error("failed to read event from {path}: {source}")]
    ReadEvent {
        path: String,
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] mrt_core::Error),
}

/// A specialized Result type for mrtrig operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
