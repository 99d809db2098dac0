// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for the event input, the job
//! configuration, the evaluate JSON output and the dispatch payload.

use crate::cli::SchemaCommand;
use crate::config::JobsConfig;
use crate::dispatch::DispatchPayload;
use crate::error::Result;
use crate::schema::DecisionJson;
use mrt_core::MergeRequestEvent;
use schemars::schema::RootSchema;
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Event => schema_for!(MergeRequestEvent),
        SchemaCommand::Jobs => schema_for!(JobsConfig),
        SchemaCommand::Decision => schema_for!(Vec<DecisionJson>),
        SchemaCommand::Payload => schema_for!(DispatchPayload),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
