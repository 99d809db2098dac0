// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label policies deciding which merge requests may trigger.

use std::collections::BTreeSet;

/// Policy over the labels attached to a merge request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelFilter {
    /// No label policy configured; every merge request passes.
    #[default]
    All,
    /// The merge request must carry at least one `include` label (when any
    /// are configured) and none of the `exclude` labels.
    LabelList {
        include: BTreeSet<String>,
        exclude: BTreeSet<String>,
    },
}

impl LabelFilter {
    /// Build a label list filter. Blank entries are dropped.
    pub fn label_list<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        LabelFilter::LabelList {
            include: normalize_labels(include),
            exclude: normalize_labels(exclude),
        }
    }

    /// Check whether a merge request with these labels is allowed.
    pub fn is_label_allowed(&self, labels: &BTreeSet<String>) -> bool {
        match self {
            LabelFilter::All => true,
            LabelFilter::LabelList { include, exclude } => {
                (include.is_empty() || !include.is_disjoint(labels)) && exclude.is_disjoint(labels)
            }
        }
    }
}

fn normalize_labels<I>(labels: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| label.as_ref().trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "label_filter_tests.rs"]
mod tests;
