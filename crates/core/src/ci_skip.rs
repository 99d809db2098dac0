// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opt-out marker detection.

use std::fmt;

use crate::event::MergeRequestEvent;

/// Literal token that suppresses automatic builds. Matched case-sensitively.
pub const CI_SKIP_MARKER: &str = "[ci-skip]";

/// Field of the event that carried the skip marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipSource {
    Description,
    CommitMessage,
}

impl SkipSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipSource::Description => "description",
            SkipSource::CommitMessage => "last commit message",
        }
    }
}

impl fmt::Display for SkipSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns true if `text` contains the skip marker.
pub fn contains_skip_marker(text: &str) -> bool {
    text.contains(CI_SKIP_MARKER)
}

/// Find the first field carrying the skip marker.
///
/// Only the description and the last commit message are inspected.
pub fn skip_marker_source(event: &MergeRequestEvent) -> Option<SkipSource> {
    if contains_skip_marker(&event.description) {
        Some(SkipSource::Description)
    } else if contains_skip_marker(&event.last_commit.message) {
        Some(SkipSource::CommitMessage)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "ci_skip_tests.rs"]
mod tests;
