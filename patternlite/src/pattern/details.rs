// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Per-element metadata attached to pattern vertices and edges

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Hop range of a variable-length path expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathRange {
    pub offset: usize,
    pub fetch: usize,
}

impl PathRange {
    pub fn new(offset: usize, fetch: usize) -> Self {
        PathRange { offset, fetch }
    }
}

/// Selectivity estimate and optional path range of a pattern element
///
/// Orders by selectivity first, then by range, with an absent range before
/// any present one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElementDetails {
    selectivity: f64,
    #[serde(default)]
    range: Option<PathRange>,
}

impl ElementDetails {
    pub fn new(selectivity: f64, range: Option<PathRange>) -> Self {
        ElementDetails { selectivity, range }
    }

    pub fn with_selectivity(selectivity: f64) -> Self {
        ElementDetails {
            selectivity,
            range: None,
        }
    }

    pub fn with_range(range: PathRange) -> Self {
        ElementDetails {
            selectivity: 1.0,
            range: Some(range),
        }
    }

    pub fn selectivity(&self) -> f64 {
        self.selectivity
    }

    pub fn range(&self) -> Option<PathRange> {
        self.range
    }

    /// Whether the element stands for a variable-length path
    pub fn is_path_expansion(&self) -> bool {
        self.range.is_some()
    }
}

impl Default for ElementDetails {
    fn default() -> Self {
        ElementDetails {
            selectivity: 1.0,
            range: None,
        }
    }
}

impl Ord for ElementDetails {
    fn cmp(&self, other: &Self) -> Ordering {
        self.selectivity
            .total_cmp(&other.selectivity)
            .then_with(|| self.range.cmp(&other.range))
    }
}

impl PartialOrd for ElementDetails {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ElementDetails {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ElementDetails {}

impl Hash for ElementDetails {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.selectivity.to_bits().hash(state);
        self.range.hash(state);
    }
}
