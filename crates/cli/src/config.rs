// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Job configuration loading from TOML and JSON files.
//!
//! Jobs are configured in `.mrtrigger/jobs.toml` and/or `.mrtrigger/jobs.json`.
//! Both files are read when present and their jobs merged, TOML first.
//! Configuration is validated into [`Job`] values before any event is
//! evaluated, so a bad pattern or duplicate name fails up front.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use mrt_core::{
    Action, BranchFilter, BranchScope, LabelFilter, State, TriggerConfig, TriggerHandler,
};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".mrtrigger";
const JOBS_TOML_FILE: &str = "jobs.toml";
const JOBS_JSON_FILE: &str = "jobs.json";

/// Branch policy as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BranchFilterConfig {
    /// Every branch pair triggers.
    #[default]
    All,
    /// Exact branch names.
    NameList {
        #[serde(default)]
        include: Vec<String>,
        #[serde(default)]
        exclude: Vec<String>,
        #[serde(default)]
        scope: BranchScope,
    },
    /// Whole-name regular expressions; an empty pattern matches everything.
    Regex {
        #[serde(default)]
        source: String,
        #[serde(default)]
        target: String,
    },
}

impl BranchFilterConfig {
    /// Compile into a branch filter.
    pub fn build(&self) -> Result<BranchFilter> {
        match self {
            BranchFilterConfig::All => Ok(BranchFilter::All),
            BranchFilterConfig::NameList {
                include,
                exclude,
                scope,
            } => Ok(BranchFilter::name_list(include, exclude, *scope)),
            BranchFilterConfig::Regex { source, target } => {
                Ok(BranchFilter::regex(source, target)?)
            }
        }
    }
}

/// Label policy as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelFilterConfig {
    /// At least one of these labels must be present (when non-empty).
    #[serde(default)]
    pub include: Vec<String>,
    /// None of these labels may be present.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// A single job definition from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JobConfig {
    /// Identifier for the job, unique across all config files.
    pub name: String,
    /// Merge request states that trigger the job.
    #[serde(default)]
    pub states: Vec<State>,
    /// Merge request actions that trigger the job.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Honor the `[ci-skip]` marker (default: true).
    #[serde(default = "default_true")]
    pub ci_skip: bool,
    /// Build even when the `[ci-skip]` marker is present.
    #[serde(default)]
    pub ci_skip_forced: bool,
    /// Ignore draft merge requests.
    #[serde(default)]
    pub skip_work_in_progress: bool,
    /// Ask the scheduler to cancel queued builds on `update` deliveries.
    #[serde(default)]
    pub cancel_pending_builds_on_update: bool,
    #[serde(default)]
    pub branch_filter: BranchFilterConfig,
    /// Absent means every label set is allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_filter: Option<LabelFilterConfig>,
    /// Command that queues the build.
    pub run: String,
}

fn default_true() -> bool {
    true
}

impl JobConfig {
    /// Validate and compile this definition.
    pub fn build(&self) -> Result<Job> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Config("job name cannot be empty".to_string()));
        }
        if self.run.trim().is_empty() {
            return Err(Error::InvalidJob {
                job: name.to_string(),
                reason: "run command cannot be empty".to_string(),
            });
        }
        if self.states.is_empty() && self.actions.is_empty() {
            tracing::warn!("job '{}' enables no states or actions and will never build", name);
        }

        let branch_filter = self.branch_filter.build().map_err(|e| Error::InvalidJob {
            job: name.to_string(),
            reason: e.to_string(),
        })?;
        let label_filter = match &self.label_filter {
            Some(labels) => LabelFilter::label_list(&labels.include, &labels.exclude),
            None => LabelFilter::All,
        };

        let config = TriggerConfig {
            allowed_states: self.states.iter().copied().collect(),
            allowed_actions: self.actions.iter().copied().collect(),
            ci_skip: self.ci_skip,
            ci_skip_forced: self.ci_skip_forced,
            skip_work_in_progress: self.skip_work_in_progress,
            cancel_pending_builds_on_update: self.cancel_pending_builds_on_update,
        };

        Ok(Job {
            name: name.to_string(),
            handler: TriggerHandler::new(config),
            branch_filter,
            label_filter,
            run: self.run.clone(),
        })
    }
}

/// Root configuration structure for jobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JobsConfig {
    /// List of configured jobs.
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

impl JobsConfig {
    /// Append the jobs of another configuration.
    pub fn merge(&mut self, other: JobsConfig) {
        self.jobs.extend(other.jobs);
    }

    /// Validate every job, rejecting duplicate names.
    pub fn build(&self) -> Result<Vec<Job>> {
        let mut seen = HashSet::new();
        let mut jobs = Vec::with_capacity(self.jobs.len());
        for config in &self.jobs {
            let job = config.build()?;
            if !seen.insert(job.name.clone()) {
                return Err(Error::DuplicateJob(job.name));
            }
            jobs.push(job);
        }
        Ok(jobs)
    }
}

/// A validated job: its trigger handler, filters and dispatch command.
#[derive(Debug, Clone)]
pub struct Job {
    pub name: String,
    pub handler: TriggerHandler,
    pub branch_filter: BranchFilter,
    pub label_filter: LabelFilter,
    pub run: String,
}

/// Find the `.mrtrigger` directory by walking up from `start`.
pub fn find_config_dir(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config_dir = current.join(CONFIG_DIR_NAME);
        if config_dir.is_dir() {
            return Ok(config_dir);
        }
        if !current.pop() {
            return Err(Error::NotConfigured);
        }
    }
}

/// Load jobs configuration from `jobs.toml` and/or `jobs.json` in `config_dir`.
///
/// If both files exist, jobs from both are merged. Returns `None` if neither
/// file exists.
pub fn load_jobs_config(config_dir: &Path) -> Result<Option<JobsConfig>> {
    let toml_path = config_dir.join(JOBS_TOML_FILE);
    let json_path = config_dir.join(JOBS_JSON_FILE);

    let toml_exists = toml_path.exists();
    let json_exists = json_path.exists();

    if !toml_exists && !json_exists {
        return Ok(None);
    }

    let mut config = JobsConfig::default();

    if toml_exists {
        let content = fs::read_to_string(&toml_path)
            .map_err(|e| Error::Config(format!("failed to read jobs.toml: {}", e)))?;
        let parsed: JobsConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse jobs.toml: {}", e)))?;
        config.merge(parsed);
    }

    if json_exists {
        let content = fs::read_to_string(&json_path)
            .map_err(|e| Error::Config(format!("failed to read jobs.json: {}", e)))?;
        let parsed: JobsConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse jobs.json: {}", e)))?;
        config.merge(parsed);
    }

    tracing::debug!(
        "loaded {} job(s) from {}",
        config.jobs.len(),
        config_dir.display()
    );

    Ok(Some(config))
}

/// Locate and load the job configuration for a project.
///
/// Returns the project root (parent of `.mrtrigger/`) and the configuration.
pub fn load_project(start: &Path) -> Result<(PathBuf, JobsConfig)> {
    let config_dir = find_config_dir(start)?;
    let config = load_jobs_config(&config_dir)?.ok_or(Error::NotConfigured)?;
    let project_root = config_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config_dir.clone());
    Ok((project_root, config))
}

/// Locate, load and validate the jobs for a project.
pub fn load_jobs(start: &Path) -> Result<(PathBuf, Vec<Job>)> {
    let (project_root, config) = load_project(start)?;
    Ok((project_root, config.build()?))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
