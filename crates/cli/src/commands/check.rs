// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.
//!
//! Validates the job configuration the same way `evaluate` does and lists
//! the jobs it found.

use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::{load_project, BranchFilterConfig, JobConfig};
use crate::error::Result;
use crate::schema::CheckOutputJson;

/// Run the check command.
pub fn run(start: &Path, output: OutputFormat) -> Result<()> {
    let (project_root, config) = load_project(start)?;
    config.build()?;

    let report = CheckOutputJson {
        project_root: project_root.display().to_string(),
        jobs: config.jobs,
    };
    println!("{}", render(&report, output)?);
    Ok(())
}

pub(crate) fn render(report: &CheckOutputJson, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "{} job(s) in {}",
                report.jobs.len(),
                report.project_root
            )];
            lines.extend(report.jobs.iter().map(describe_job));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn describe_job(job: &JobConfig) -> String {
    let join = |items: Vec<&str>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(",")
        }
    };
    let branches = match &job.branch_filter {
        BranchFilterConfig::All => "all".to_string(),
        BranchFilterConfig::NameList { scope, .. } => format!("name_list({})", scope),
        BranchFilterConfig::Regex { .. } => "regex".to_string(),
    };
    format!(
        "  {}: states={} actions={} branches={} labels={}",
        job.name.trim(),
        join(job.states.iter().map(|s| s.as_str()).collect()),
        join(job.actions.iter().map(|a| a.as_str()).collect()),
        branches,
        if job.label_filter.is_some() { "list" } else { "all" },
    )
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
