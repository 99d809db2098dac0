// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Seam between the trigger engine and the downstream build scheduler.

use serde::Serialize;

use crate::params::BuildParameters;

/// A build the engine decided to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct BuildRequest {
    pub parameters: BuildParameters,
    /// The scheduler should cancel builds still queued for this merge request.
    pub cancel_pending: bool,
}

/// Receives trigger decisions and hands them to a scheduler.
///
/// Implementations must be reentrant: the engine may call `dispatch` from
/// several threads at once, including for the same job. Errors are returned to
/// the engine's caller unchanged.
pub trait BuildDispatcher {
    type Error;

    fn dispatch(&self, job: &str, request: &BuildRequest) -> Result<(), Self::Error>;
}

impl<D: BuildDispatcher + ?Sized> BuildDispatcher for &D {
    type Error = D::Error;

    fn dispatch(&self, job: &str, request: &BuildRequest) -> Result<(), Self::Error> {
        (**self).dispatch(job, request)
    }
}
