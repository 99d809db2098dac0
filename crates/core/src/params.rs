// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build parameters derived from a merge request event.
//!
//! Parameters are a pure function of the event, so repeated deliveries of the
//! same event produce identical parameters and an identical fingerprint.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::branch_filter::short_branch_name;
use crate::event::{Action, MergeRequestEvent, ProjectRef, State};

/// Resolve a branch name to its full ref form (`refs/heads/<branch>`).
///
/// Names already in ref form are returned unchanged.
pub fn branch_ref(branch: &str) -> String {
    if branch.starts_with("refs/") {
        branch.to_string()
    } else {
        format!("refs/heads/{}", branch)
    }
}

/// Repository coordinates passed to the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RepoParameters {
    pub name: String,
    pub namespace: String,
    pub homepage: String,
    pub ssh_url: String,
    pub http_url: String,
}

impl From<&ProjectRef> for RepoParameters {
    fn from(project: &ProjectRef) -> Self {
        RepoParameters {
            name: project.name.clone(),
            namespace: project.namespace.clone(),
            homepage: project.web_url.clone(),
            ssh_url: project.ssh_url.clone(),
            http_url: project.http_url.clone(),
        }
    }
}

/// Parameters handed to the downstream scheduler for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct BuildParameters {
    pub merge_request_iid: u64,
    pub merge_request_title: String,
    pub state: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// Source branch in short form.
    pub source_branch: String,
    /// Target branch in short form.
    pub target_branch: String,
    /// Target branch in `refs/heads/` form.
    pub target_ref: String,
    pub last_commit_id: String,
    pub last_commit_message: String,
    pub last_commit_author: String,
    pub source_repo: RepoParameters,
    pub target_repo: RepoParameters,
}

impl BuildParameters {
    /// Derive parameters from an event.
    pub fn from_event(event: &MergeRequestEvent) -> Self {
        BuildParameters {
            merge_request_iid: event.iid,
            merge_request_title: event.title.clone(),
            state: event.state,
            action: event.action,
            source_branch: short_branch_name(&event.source_branch).to_string(),
            target_branch: short_branch_name(&event.target_branch).to_string(),
            target_ref: branch_ref(&event.target_branch),
            last_commit_id: event.last_commit.id.clone(),
            last_commit_message: event.last_commit.message.clone(),
            last_commit_author: event.last_commit.author.name.clone(),
            source_repo: (&event.source_project).into(),
            target_repo: (&event.target_project).into(),
        }
    }

    /// Environment-style bindings in a stable order.
    pub fn to_env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("MR_IID", self.merge_request_iid.to_string()),
            ("MR_TITLE", self.merge_request_title.clone()),
            ("MR_STATE", self.state.as_str().to_string()),
            (
                "MR_ACTION",
                self.action.map(|a| a.as_str()).unwrap_or("").to_string(),
            ),
            ("MR_SOURCE_BRANCH", self.source_branch.clone()),
            ("MR_TARGET_BRANCH", self.target_branch.clone()),
            ("MR_TARGET_REF", self.target_ref.clone()),
            ("MR_LAST_COMMIT", self.last_commit_id.clone()),
            ("MR_LAST_COMMIT_MESSAGE", self.last_commit_message.clone()),
            ("MR_LAST_COMMIT_AUTHOR", self.last_commit_author.clone()),
            ("MR_SOURCE_REPO_NAME", self.source_repo.name.clone()),
            ("MR_SOURCE_REPO_NAMESPACE", self.source_repo.namespace.clone()),
            ("MR_SOURCE_REPO_HOMEPAGE", self.source_repo.homepage.clone()),
            ("MR_SOURCE_REPO_SSH_URL", self.source_repo.ssh_url.clone()),
            ("MR_SOURCE_REPO_HTTP_URL", self.source_repo.http_url.clone()),
            ("MR_TARGET_REPO_NAME", self.target_repo.name.clone()),
            ("MR_TARGET_REPO_NAMESPACE", self.target_repo.namespace.clone()),
            ("MR_TARGET_REPO_HOMEPAGE", self.target_repo.homepage.clone()),
            ("MR_TARGET_REPO_SSH_URL", self.target_repo.ssh_url.clone()),
            ("MR_TARGET_REPO_HTTP_URL", self.target_repo.http_url.clone()),
        ]
    }

    /// Stable identifier for building this commit of this merge request
    /// into `job`. Hex-encoded SHA-256.
    pub fn fingerprint(&self, job: &str) -> String {
        let mut hasher = Sha256::new();
        for part in [
            job,
            self.target_repo.http_url.as_str(),
            self.target_ref.as_str(),
            self.source_repo.http_url.as_str(),
            self.source_branch.as_str(),
            self.last_commit_id.as_str(),
        ] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
