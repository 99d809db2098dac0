// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared event fixtures for unit tests.

use std::collections::BTreeSet;

use crate::event::{Action, Commit, CommitAuthor, MergeRequestEvent, ProjectRef, State};

/// Create a project reference hosted at `gitlab.org`.
pub fn make_project(name: &str) -> ProjectRef {
    ProjectRef {
        name: name.to_string(),
        namespace: "test-namespace".to_string(),
        web_url: format!("https://gitlab.org/{}", name),
        ssh_url: format!("git@gitlab.org:{}.git", name),
        http_url: format!("https://gitlab.org/{}.git", name),
    }
}

/// Create an open merge request from `feature` into `master` with an `update`
/// action and no labels.
pub fn make_event() -> MergeRequestEvent {
    MergeRequestEvent {
        iid: 1,
        title: "test".to_string(),
        state: State::Opened,
        action: Some(Action::Update),
        source_project: make_project("test"),
        target_project: make_project("test"),
        source_branch: "feature".to_string(),
        target_branch: "master".to_string(),
        last_commit: Commit {
            id: "4c6dbd0e1a2b3c4d5e6f708192a3b4c5d6e7f809".to_string(),
            message: "test".to_string(),
            author: CommitAuthor {
                name: "test".to_string(),
                email: "test@gitlab.org".to_string(),
            },
        },
        description: String::new(),
        labels: BTreeSet::new(),
        work_in_progress: false,
    }
}

/// Create the default event with the given state and action.
pub fn make_event_with(state: State, action: Option<Action>) -> MergeRequestEvent {
    MergeRequestEvent {
        state,
        action,
        ..make_event()
    }
}

/// Build a label set from string slices.
pub fn labels(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
