// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed merge request events.
//!
//! Field names and the `State`/`Action` vocabularies follow the source-control
//! provider's merge request webhook so payloads deserialize without renaming.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Title prefixes that mark a merge request as a draft.
const DRAFT_PREFIXES: &[&str] = &["wip:", "draft:", "[draft]", "(draft)"];

/// Lifecycle stage of a merge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum State {
    Opened,
    Reopened,
    Updated,
    Closed,
    Merged,
}

impl State {
    /// Every state, in declaration order.
    pub const ALL: [State; 5] = [
        State::Opened,
        State::Reopened,
        State::Updated,
        State::Closed,
        State::Merged,
    ];

    /// Returns the webhook spelling of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Opened => "opened",
            State::Reopened => "reopened",
            State::Updated => "updated",
            State::Closed => "closed",
            State::Merged => "merged",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "opened" => Ok(State::Opened),
            "reopened" => Ok(State::Reopened),
            "updated" => Ok(State::Updated),
            "closed" => Ok(State::Closed),
            "merged" => Ok(State::Merged),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// The transition reported by a single webhook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Open,
    Update,
    #[serde(alias = "reopen")]
    Reopened,
    Close,
    Merge,
    Approved,
    Unapproved,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 7] = [
        Action::Open,
        Action::Update,
        Action::Reopened,
        Action::Close,
        Action::Merge,
        Action::Approved,
        Action::Unapproved,
    ];

    /// Returns the webhook spelling of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Open => "open",
            Action::Update => "update",
            Action::Reopened => "reopened",
            Action::Close => "close",
            Action::Merge => "merge",
            Action::Approved => "approved",
            Action::Unapproved => "unapproved",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "open" => Ok(Action::Open),
            "update" => Ok(Action::Update),
            "reopened" | "reopen" => Ok(Action::Reopened),
            "close" => Ok(Action::Close),
            "merge" => Ok(Action::Merge),
            "approved" => Ok(Action::Approved),
            "unapproved" => Ok(Action::Unapproved),
            _ => Err(Error::InvalidAction(s.to_string())),
        }
    }
}

/// A repository taking part in a merge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProjectRef {
    pub name: String,
    pub namespace: String,
    /// Project homepage.
    pub web_url: String,
    pub ssh_url: String,
    pub http_url: String,
}

/// Author of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CommitAuthor {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// The head commit of the merge request's source branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Commit {
    /// Full commit hash.
    pub id: String,
    #[serde(default)]
    pub message: String,
    pub author: CommitAuthor,
}

/// A merge request webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MergeRequestEvent {
    /// Project-scoped merge request number.
    pub iid: u64,
    #[serde(default)]
    pub title: String,
    pub state: State,
    /// Absent on deliveries that do not report a transition.
    #[serde(default)]
    pub action: Option<Action>,
    #[serde(rename = "source")]
    pub source_project: ProjectRef,
    #[serde(rename = "target")]
    pub target_project: ProjectRef,
    pub source_branch: String,
    pub target_branch: String,
    pub last_commit: Commit,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: BTreeSet<String>,
    /// Explicit draft flag reported by the provider.
    #[serde(default)]
    pub work_in_progress: bool,
}

impl MergeRequestEvent {
    /// Parse an event from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when a required field is missing or a state or
    /// action is outside the provider vocabulary.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true if the merge request is a draft, either flagged by the
    /// provider or marked by a conventional title prefix.
    pub fn is_work_in_progress(&self) -> bool {
        if self.work_in_progress {
            return true;
        }
        let title = self.title.trim_start().to_lowercase();
        DRAFT_PREFIXES
            .iter()
            .any(|prefix| title.starts_with(prefix))
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
