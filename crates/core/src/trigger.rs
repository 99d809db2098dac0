// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merge request trigger decisions.
//!
//! A [`TriggerHandler`] holds one job's trigger configuration and decides, for
//! each incoming [`MergeRequestEvent`], whether that job should build. Checks
//! run in a fixed order and stop at the first one that fails:
//!
//! 1. CI-skip marker in the description or last commit message
//! 2. State OR action allowed by the configuration
//! 3. Draft merge requests (when configured to skip them)
//! 4. Branch filter
//! 5. Label filter

use std::collections::BTreeSet;
use std::fmt;

use crate::branch_filter::BranchFilter;
use crate::ci_skip::{skip_marker_source, SkipSource};
use crate::dispatch::{BuildDispatcher, BuildRequest};
use crate::event::{Action, MergeRequestEvent, State};
use crate::label_filter::LabelFilter;
use crate::params::BuildParameters;

/// Trigger configuration for a single job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    /// States that trigger a build. Empty means no state triggers.
    pub allowed_states: BTreeSet<State>,
    /// Actions that trigger a build. Empty means no action triggers.
    pub allowed_actions: BTreeSet<Action>,
    /// Honor the `[ci-skip]` marker.
    pub ci_skip: bool,
    /// Build even when the `[ci-skip]` marker is present.
    pub ci_skip_forced: bool,
    /// Ignore draft merge requests.
    pub skip_work_in_progress: bool,
    /// Ask the scheduler to cancel queued builds when a merge request is updated.
    pub cancel_pending_builds_on_update: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig {
            allowed_states: BTreeSet::new(),
            allowed_actions: BTreeSet::new(),
            ci_skip: true,
            ci_skip_forced: false,
            skip_work_in_progress: false,
            cancel_pending_builds_on_update: false,
        }
    }
}

impl TriggerConfig {
    /// Configuration triggering on the given states and actions, honoring
    /// `[ci-skip]`.
    pub fn new<S, A>(states: S, actions: A) -> Self
    where
        S: IntoIterator<Item = State>,
        A: IntoIterator<Item = Action>,
    {
        TriggerConfig {
            allowed_states: states.into_iter().collect(),
            allowed_actions: actions.into_iter().collect(),
            ..TriggerConfig::default()
        }
    }
}

/// Why a job did not build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    CiSkip(SkipSource),
    StateAndActionNotAllowed {
        state: State,
        action: Option<Action>,
    },
    WorkInProgress,
    BranchNotAllowed {
        source: String,
        target: String,
    },
    LabelsNotAllowed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::CiSkip(source) => write!(f, "[ci-skip] marker in {}", source),
            SkipReason::StateAndActionNotAllowed { state, action } => match action {
                Some(action) => write!(
                    f,
                    "state '{}' and action '{}' are not enabled",
                    state, action
                ),
                None => write!(f, "state '{}' is not enabled", state),
            },
            SkipReason::WorkInProgress => write!(f, "merge request is a draft"),
            SkipReason::BranchNotAllowed { source, target } => {
                write!(f, "branches '{}' -> '{}' are filtered out", source, target)
            }
            SkipReason::LabelsNotAllowed => write!(f, "labels are filtered out"),
        }
    }
}

/// Outcome of evaluating one event against one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Build(BuildRequest),
    Skip(SkipReason),
}

impl Decision {
    /// Returns true if a build should be started.
    pub fn is_build(&self) -> bool {
        matches!(self, Decision::Build(_))
    }

    /// Parameters of the build, if one should be started.
    pub fn parameters(&self) -> Option<&BuildParameters> {
        match self {
            Decision::Build(request) => Some(&request.parameters),
            Decision::Skip(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Decision::Build(_) => None,
            Decision::Skip(reason) => Some(reason),
        }
    }
}

/// Decides whether merge request events trigger a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerHandler {
    config: TriggerConfig,
}

impl TriggerHandler {
    pub fn new(config: TriggerConfig) -> Self {
        TriggerHandler { config }
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Evaluate an event without dispatching anything.
    pub fn evaluate(
        &self,
        event: &MergeRequestEvent,
        branch_filter: &BranchFilter,
        label_filter: &LabelFilter,
    ) -> Decision {
        if self.config.ci_skip {
            if let Some(source) = skip_marker_source(event) {
                if self.config.ci_skip_forced {
                    tracing::debug!(
                        "!{}: [ci-skip] in {} overridden by forced build",
                        event.iid,
                        source
                    );
                } else {
                    return skip(event, SkipReason::CiSkip(source));
                }
            }
        }

        if !self.is_state_or_action_allowed(event) {
            return skip(
                event,
                SkipReason::StateAndActionNotAllowed {
                    state: event.state,
                    action: event.action,
                },
            );
        }

        if self.config.skip_work_in_progress && event.is_work_in_progress() {
            return skip(event, SkipReason::WorkInProgress);
        }

        if !branch_filter.is_branch_allowed(&event.source_branch, &event.target_branch) {
            return skip(
                event,
                SkipReason::BranchNotAllowed {
                    source: event.source_branch.clone(),
                    target: event.target_branch.clone(),
                },
            );
        }

        if !label_filter.is_label_allowed(&event.labels) {
            return skip(event, SkipReason::LabelsNotAllowed);
        }

        let cancel_pending =
            self.config.cancel_pending_builds_on_update && event.action == Some(Action::Update);

        tracing::debug!(
            "!{}: build {} -> {} at {}",
            event.iid,
            event.source_branch,
            event.target_branch,
            event.last_commit.id
        );

        Decision::Build(BuildRequest {
            parameters: BuildParameters::from_event(event),
            cancel_pending,
        })
    }

    /// Evaluate an event and dispatch at most one build for `job`.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's error unchanged if dispatching fails. The
    /// dispatch is not retried.
    pub fn handle<D: BuildDispatcher>(
        &self,
        job: &str,
        event: &MergeRequestEvent,
        branch_filter: &BranchFilter,
        label_filter: &LabelFilter,
        dispatcher: &D,
    ) -> Result<Decision, D::Error> {
        let decision = self.evaluate(event, branch_filter, label_filter);
        if let Decision::Build(ref request) = decision {
            tracing::info!("dispatching build for job '{}' (!{})", job, event.iid);
            dispatcher.dispatch(job, request)?;
        }
        Ok(decision)
    }

    /// A build fires when the state matches OR the action matches. Once the
    /// state matches the action is not inspected.
    fn is_state_or_action_allowed(&self, event: &MergeRequestEvent) -> bool {
        self.config.allowed_states.contains(&event.state)
            || event
                .action
                .is_some_and(|action| self.config.allowed_actions.contains(&action))
    }
}

fn skip(event: &MergeRequestEvent, reason: SkipReason) -> Decision {
    tracing::debug!("!{}: skip, {}", event.iid, reason);
    Decision::Skip(reason)
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
