// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for mrt-core operations.

use thiserror::Error;

/// All possible errors that can occur in mrt-core operations.
///
/// Every variant is raised while building configuration or parsing an event.
/// Trigger evaluation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid merge request state: '{0}'\n  hint: valid states are: opened, reopened, updated, closed, merged")]
    InvalidState(String),

    #[error("invalid merge request action: '{0}'\n  hint: valid actions are: open, update, reopened, close, merge, approved, unapproved")]
    InvalidAction(String),

    #[error("invalid branch scope: '{0}'\n  hint: valid scopes are: target, source, both")]
    InvalidBranchScope(String),

    #[error("invalid branch pattern '{pattern}': {source}")]
    InvalidBranchPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for mrt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
