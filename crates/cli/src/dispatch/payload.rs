// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch payload building for stdin JSON.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use mrt_core::{BuildParameters, BuildRequest};

/// JSON payload passed to dispatch commands via stdin.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DispatchPayload {
    /// Job the build is queued for.
    pub job: String,
    /// When the trigger decision was made.
    pub triggered_at: DateTime<Utc>,
    /// Stable identifier of this commit built into this job.
    pub fingerprint: String,
    /// Builds still queued for this merge request should be cancelled.
    pub cancel_pending: bool,
    pub parameters: BuildParameters,
}

impl DispatchPayload {
    /// Build a payload for a request, stamped with the current time.
    pub fn from_request(job: &str, request: &BuildRequest) -> Self {
        DispatchPayload {
            job: job.to_string(),
            triggered_at: Utc::now(),
            fingerprint: request.parameters.fingerprint(job),
            cancel_pending: request.cancel_pending,
            parameters: request.parameters.clone(),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
