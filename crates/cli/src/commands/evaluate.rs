// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluate command implementation.
//!
//! Runs every configured job (or the one named with `--job`) against a single
//! merge request event and dispatches the builds they decide on.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use mrt_core::{BuildDispatcher, Decision, MergeRequestEvent};

use crate::cli::OutputFormat;
use crate::config::{load_jobs, Job};
use crate::dispatch::ShellDispatcher;
use crate::error::{Error, Result};
use crate::schema::{DecisionJson, Outcome};

/// Run the evaluate command.
pub fn run(
    start: &Path,
    event_path: &str,
    job: Option<&str>,
    dry_run: bool,
    output: OutputFormat,
) -> Result<()> {
    let event = read_event(event_path)?;
    let (project_root, jobs) = load_jobs(start)?;
    let jobs = select_jobs(jobs, job)?;

    let results = if dry_run {
        evaluate_jobs(&event, &jobs)
    } else {
        let dispatcher = ShellDispatcher::for_jobs(&project_root, &jobs);
        dispatch_jobs(&event, &jobs, &dispatcher)
    };

    println!("{}", render(&results, output)?);
    check_failures(&results)
}

/// Read and parse an event from a file, or from stdin when `path` is `-`.
pub(crate) fn read_event(path: &str) -> Result<MergeRequestEvent> {
    let content = if path == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        fs::read_to_string(path)
    }
    .map_err(|source| Error::ReadEvent {
        path: path.to_string(),
        source,
    })?;
    Ok(MergeRequestEvent::from_json(&content)?)
}

/// Keep only the job named `only`, if given.
pub(crate) fn select_jobs(jobs: Vec<Job>, only: Option<&str>) -> Result<Vec<Job>> {
    let Some(name) = only else {
        return Ok(jobs);
    };
    let selected: Vec<Job> = jobs.into_iter().filter(|job| job.name == name).collect();
    if selected.is_empty() {
        return Err(Error::JobNotFound(name.to_string()));
    }
    Ok(selected)
}

/// Decide for every job without dispatching.
pub(crate) fn evaluate_jobs(event: &MergeRequestEvent, jobs: &[Job]) -> Vec<DecisionJson> {
    jobs.iter()
        .map(|job| {
            match job
                .handler
                .evaluate(event, &job.branch_filter, &job.label_filter)
            {
                Decision::Build(request) => DecisionJson::build(&job.name, &request, false),
                Decision::Skip(reason) => DecisionJson::skip(&job.name, &reason),
            }
        })
        .collect()
}

/// Decide for every job and dispatch the builds.
///
/// A failed dispatch is recorded and the remaining jobs still run.
pub(crate) fn dispatch_jobs<D>(
    event: &MergeRequestEvent,
    jobs: &[Job],
    dispatcher: &D,
) -> Vec<DecisionJson>
where
    D: BuildDispatcher,
    D::Error: Display,
{
    jobs.iter()
        .map(|job| {
            match job.handler.handle(
                &job.name,
                event,
                &job.branch_filter,
                &job.label_filter,
                dispatcher,
            ) {
                Ok(Decision::Build(request)) => DecisionJson::build(&job.name, &request, true),
                Ok(Decision::Skip(reason)) => DecisionJson::skip(&job.name, &reason),
                Err(e) => {
                    tracing::warn!("job '{}' failed to dispatch: {}", job.name, e);
                    DecisionJson::failed(&job.name, event, e.to_string())
                }
            }
        })
        .collect()
}

pub(crate) fn render(results: &[DecisionJson], output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(results
            .iter()
            .map(DecisionJson::to_line)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// Fail if any dispatch failed.
pub(crate) fn check_failures(results: &[DecisionJson]) -> Result<()> {
    let failed = results
        .iter()
        .filter(|r| r.outcome == Outcome::Failed)
        .count();
    if failed == 0 {
        return Ok(());
    }
    let total = results
        .iter()
        .filter(|r| r.outcome != Outcome::Skip)
        .count();
    Err(Error::PartialDispatchFailure { failed, total })
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
