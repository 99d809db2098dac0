// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output of `mrtrigger evaluate -o json`.

use schemars::JsonSchema;
use serde::Serialize;

use mrt_core::{BuildParameters, BuildRequest, MergeRequestEvent, SkipReason};

/// What happened to one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The job decided to build.
    Build,
    /// The job was not triggered.
    Skip,
    /// The job decided to build but the dispatch command failed.
    Failed,
}

/// One job's decision for an event.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DecisionJson {
    pub job: String,
    pub outcome: Outcome,
    /// Whether the dispatch command ran successfully. False on dry runs.
    pub dispatched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_pending: Option<bool>,
    /// Why the job was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Why the dispatch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BuildParameters>,
}

impl DecisionJson {
    pub fn build(job: &str, request: &BuildRequest, dispatched: bool) -> Self {
        DecisionJson {
            job: job.to_string(),
            outcome: Outcome::Build,
            dispatched,
            fingerprint: Some(request.parameters.fingerprint(job)),
            cancel_pending: Some(request.cancel_pending),
            reason: None,
            error: None,
            parameters: Some(request.parameters.clone()),
        }
    }

    pub fn skip(job: &str, reason: &SkipReason) -> Self {
        DecisionJson {
            job: job.to_string(),
            outcome: Outcome::Skip,
            dispatched: false,
            fingerprint: None,
            cancel_pending: None,
            reason: Some(reason.to_string()),
            error: None,
            parameters: None,
        }
    }

    pub fn failed(job: &str, event: &MergeRequestEvent, error: String) -> Self {
        let parameters = BuildParameters::from_event(event);
        DecisionJson {
            job: job.to_string(),
            outcome: Outcome::Failed,
            dispatched: false,
            fingerprint: Some(parameters.fingerprint(job)),
            cancel_pending: None,
            reason: None,
            error: Some(error),
            parameters: Some(parameters),
        }
    }

    /// Single-line text rendering.
    pub fn to_line(&self) -> String {
        match self.outcome {
            Outcome::Build => format!(
                "build {} {}",
                self.job,
                self.fingerprint.as_deref().unwrap_or_default()
            ),
            Outcome::Skip => format!(
                "skip {}: {}",
                self.job,
                self.reason.as_deref().unwrap_or_default()
            ),
            Outcome::Failed => format!(
                "failed {}: {}",
                self.job,
                self.error.as_deref().unwrap_or_default()
            ),
        }
    }
}
