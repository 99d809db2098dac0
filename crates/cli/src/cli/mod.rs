// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "mrtrigger")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decide which merge request events start builds")]
#[command(
    long_about = "Decide which merge request events start builds.\n\n\
    Jobs in .mrtrigger/jobs.toml choose the states, actions, branches and labels \
    that trigger them; matching events are handed to each job's run command."
)]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if mrtrigger was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Log decision details to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a merge request event against the configured jobs
    #[command(
        arg_required_else_help = true,
        after_help = help::examples("\
Examples:
  mrtrigger evaluate event.json              Evaluate and dispatch every job
  mrtrigger evaluate event.json --job api    Evaluate a single job
  mrtrigger evaluate - --dry-run < ev.json   Read the event from stdin, dispatch nothing
  mrtrigger evaluate event.json -o json      Print decisions as JSON")
    )]
    Evaluate {
        /// Path to the webhook payload, or '-' for stdin
        #[arg(value_name = "event")]
        event: String,

        /// Only evaluate this job
        #[arg(long)]
        job: Option<String>,

        /// Decide without running any dispatch command
        #[arg(long)]
        dry_run: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate the job configuration and list the jobs
    Check {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for inputs and JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// JSON Schema commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for the merge request event payload
    Event,
    /// Output JSON Schema for jobs.toml / jobs.json
    Jobs,
    /// Output JSON Schema for 'mrtrigger evaluate -o json' output
    Decision,
    /// Output JSON Schema for the payload dispatch commands read on stdin
    Payload,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
