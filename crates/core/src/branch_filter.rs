// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branch policies deciding which source/target branch pairs may trigger.
//!
//! Branch names are compared in short form, so `refs/heads/main` and `main`
//! are the same branch.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Strip the `refs/heads/` prefix from a branch reference.
pub fn short_branch_name(branch: &str) -> &str {
    branch.strip_prefix(BRANCH_REF_PREFIX).unwrap_or(branch)
}

/// Which side of the merge request a name list applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BranchScope {
    #[default]
    Target,
    Source,
    Both,
}

impl BranchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchScope::Target => "target",
            BranchScope::Source => "source",
            BranchScope::Both => "both",
        }
    }
}

impl fmt::Display for BranchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BranchScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "target" => Ok(BranchScope::Target),
            "source" => Ok(BranchScope::Source),
            "both" => Ok(BranchScope::Both),
            _ => Err(Error::InvalidBranchScope(s.to_string())),
        }
    }
}

/// Policy over the branch pair of a merge request.
#[derive(Debug, Clone, Default)]
pub enum BranchFilter {
    /// Every branch pair is allowed.
    #[default]
    All,
    /// Exact branch names. A non-empty `include` list must contain the branch;
    /// any branch in `exclude` is rejected.
    NameList {
        include: BTreeSet<String>,
        exclude: BTreeSet<String>,
        scope: BranchScope,
    },
    /// Whole-name patterns per side. `None` matches every branch.
    Regex {
        source: Option<Regex>,
        target: Option<Regex>,
    },
}

impl BranchFilter {
    /// Build a name list filter. Names may be given in short or ref form.
    pub fn name_list<I, E>(include: I, exclude: E, scope: BranchScope) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        BranchFilter::NameList {
            include: normalize_names(include),
            exclude: normalize_names(exclude),
            scope,
        }
    }

    /// Build a regex filter. An empty pattern matches every branch on that side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBranchPattern`] if either pattern fails to compile.
    pub fn regex(source_pattern: &str, target_pattern: &str) -> Result<Self> {
        Ok(BranchFilter::Regex {
            source: compile_pattern(source_pattern)?,
            target: compile_pattern(target_pattern)?,
        })
    }

    /// Check whether the branch pair of a merge request is allowed.
    pub fn is_branch_allowed(&self, source_branch: &str, target_branch: &str) -> bool {
        let source = short_branch_name(source_branch);
        let target = short_branch_name(target_branch);

        match self {
            BranchFilter::All => true,
            BranchFilter::NameList {
                include,
                exclude,
                scope,
            } => {
                let allowed = |name: &str| {
                    (include.is_empty() || include.contains(name)) && !exclude.contains(name)
                };
                match scope {
                    BranchScope::Target => allowed(target),
                    BranchScope::Source => allowed(source),
                    BranchScope::Both => allowed(source) && allowed(target),
                }
            }
            BranchFilter::Regex {
                source: source_re,
                target: target_re,
            } => matches_pattern(source_re, source) && matches_pattern(target_re, target),
        }
    }
}

fn normalize_names<I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| short_branch_name(name.as_ref().trim()).to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Compile a pattern that must match the whole branch name.
fn compile_pattern(pattern: &str) -> Result<Option<Regex>> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(&format!("^(?:{})$", pattern))
        .map(Some)
        .map_err(|source| Error::InvalidBranchPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn matches_pattern(pattern: &Option<Regex>, branch: &str) -> bool {
    pattern.as_ref().is_none_or(|re| re.is_match(branch))
}

#[cfg(test)]
#[path = "branch_filter_tests.rs"]
mod tests;
