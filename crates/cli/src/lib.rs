// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mrtrig - merge request build triggers from the command line.
//!
//! This crate provides the `mrtrigger` CLI around [`mrt_core`]: it loads job
//! definitions from a project's `.mrtrigger/` directory, evaluates merge
//! request events against them and hands the resulting builds to each job's
//! shell command.
//!
//! # Main Components
//!
//! - [`config`] - Job configuration loading and validation
//! - [`dispatch`] - [`ShellDispatcher`], the shell-command build dispatcher
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use mrtrig::config::load_jobs;
//! use mrtrig::ShellDispatcher;
//!
//! let (root, jobs) = load_jobs(Path::new("."))?;
//! let dispatcher = ShellDispatcher::for_jobs(&root, &jobs);
//! for job in &jobs {
//!     job.handler.handle(&job.name, &event, &job.branch_filter, &job.label_filter, &dispatcher)?;
//! }
//! ```

mod cli;
mod commands;
mod env;
pub mod help;
mod logging;
mod schema;

pub mod config;
pub mod dispatch;
pub mod error;


pub use cli::{Cli, Command, OutputFormat, SchemaCommand};
pub use config::{load_jobs, Job, JobConfig, JobsConfig};
pub use dispatch::{DispatchPayload, ShellDispatcher};
pub use error::{Error, Result};
pub use logging::setup_logging;

use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;

/// Resolve the directory configuration discovery starts from.
fn start_dir(directory: Option<String>) -> Result<PathBuf> {
    match directory {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(std::env::current_dir()?),
    }
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Evaluate {
            event,
            job,
            dry_run,
            output,
        } => {
            let start = start_dir(cli.directory)?;
            commands::evaluate::run(&start, &event, job.as_deref(), dry_run, output)
        }
        Command::Check { output } => {
            let start = start_dir(cli.directory)?;
            commands::check::run(&start, output)
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "mrtrigger", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
