// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output of `mrtrigger check -o json`.

use schemars::JsonSchema;
use serde::Serialize;

use crate::config::JobConfig;

/// Validated configuration of a project.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CheckOutputJson {
    /// Directory holding `.mrtrigger/`.
    pub project_root: String,
    pub jobs: Vec<JobConfig>,
}
