// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mrt-core: merge request trigger engine.
//!
//! This crate decides whether a merge request webhook delivery should start a
//! build, and with which parameters. It performs no I/O: the caller parses
//! the payload into a [`MergeRequestEvent`] and supplies a [`BuildDispatcher`]
//! that talks to the scheduler.
//!
//! ```rust,ignore
//! use mrt_core::{BranchFilter, LabelFilter, State, TriggerConfig, TriggerHandler};
//!
//! let handler = TriggerHandler::new(TriggerConfig::new([State::Opened], []));
//! let decision = handler.evaluate(&event, &BranchFilter::All, &LabelFilter::All);
//! ```

pub mod branch_filter;
pub mod ci_skip;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod label_filter;
pub mod params;
pub mod trigger;

#[cfg(test)]
mod test_helpers;

pub use branch_filter::{BranchFilter, BranchScope};
pub use ci_skip::{contains_skip_marker, SkipSource, CI_SKIP_MARKER};
pub use dispatch::{BuildDispatcher, BuildRequest};
pub use error::{Error, Result};
pub use event::{Action, Commit, CommitAuthor, MergeRequestEvent, ProjectRef, State};
pub use label_filter::LabelFilter;
pub use params::{BuildParameters, RepoParameters};
pub use trigger::{Decision, SkipReason, TriggerConfig, TriggerHandler};
