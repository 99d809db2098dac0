// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Types for JSON output structures.
//!
//! These are both serialized by the commands and used to derive JSON Schema
//! definitions via schemars.

pub mod check;
pub mod evaluate;

pub use check::CheckOutputJson;
pub use evaluate::{DecisionJson, Outcome};
