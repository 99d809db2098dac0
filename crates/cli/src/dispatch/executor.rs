// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command execution for build dispatch.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use mrt_core::{BuildDispatcher, BuildRequest};

use crate::config::Job;
use crate::error::Error;

use super::payload::DispatchPayload;

/// Dispatches builds by running each job's `run` command.
///
/// The command runs under `sh -c` from the project root and is waited on; a
/// spawn failure or non-zero exit is reported as [`Error::Dispatch`].
#[derive(Debug, Clone)]
pub struct ShellDispatcher {
    project_root: PathBuf,
    commands: HashMap<String, String>,
}

impl ShellDispatcher {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        ShellDispatcher {
            project_root: project_root.into(),
            commands: HashMap::new(),
        }
    }

    /// Dispatcher for the `run` commands of the given jobs.
    pub fn for_jobs(project_root: &Path, jobs: &[Job]) -> Self {
        let mut dispatcher = ShellDispatcher::new(project_root);
        for job in jobs {
            dispatcher.add_command(&job.name, &job.run);
        }
        dispatcher
    }

    pub fn add_command(&mut self, job: &str, run: &str) {
        self.commands.insert(job.to_string(), run.to_string());
    }
}

impl BuildDispatcher for ShellDispatcher {
    type Error = Error;

    fn dispatch(&self, job: &str, request: &BuildRequest) -> Result<(), Error> {
        let run = self
            .commands
            .get(job)
            .ok_or_else(|| Error::JobNotFound(job.to_string()))?;
        let payload = DispatchPayload::from_request(job, request);
        let json = payload.to_json()?;

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(run)
            .current_dir(&self.project_root)
            .envs(request.parameters.to_env())
            .env("MR_JOB", job)
            .env("MR_FINGERPRINT", &payload.fingerprint)
            .env("MR_CANCEL_PENDING", payload.cancel_pending.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::Dispatch {
                job: job.to_string(),
                reason: format!("failed to spawn '{}': {}", run, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // Commands that ignore stdin may exit before reading it.
            if let Err(e) = stdin.write_all(json.as_bytes()) {
                tracing::debug!("job '{}' did not read the payload: {}", job, e);
            }
        }

        let status = child.wait().map_err(|e| Error::Dispatch {
            job: job.to_string(),
            reason: e.to_string(),
        })?;
        if !status.success() {
            return Err(Error::Dispatch {
                job: job.to_string(),
                reason: format!("'{}' exited with {}", run, status),
            });
        }

        tracing::debug!("dispatched job '{}' ({})", job, payload.fingerprint);
        Ok(())
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
