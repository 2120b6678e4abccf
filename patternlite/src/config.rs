// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Planner-side configuration for pattern enumeration and ordering

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, PatternResult};
use crate::order::{CanonicalLabeling, GraphOrdering, PatternOrder};
use crate::pattern::Pattern;

/// Which `PatternOrder` implementation the driver keys its memo table on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingStrategy {
    /// Color refinement with individualization, groups symmetric vertices
    CanonicalLabeling,
    /// One sort by degree and types, not a canonical form
    GraphOrdering,
}

/// Limits applied while enumerating extend steps
///
/// Every limit defaults to `None` (unlimited).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendConfig {
    /// No extend steps once the pattern holds this many vertices
    pub max_pattern_vertices: Option<usize>,

    /// Skip target types that already appear on this many vertices
    pub same_type_vertex_limit: Option<usize>,

    /// Largest number of edges attaching the new vertex in one step
    pub max_extend_edges: Option<usize>,
}

/// Configuration for a pattern search session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub ordering: OrderingStrategy,
    pub extend: ExtendConfig,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            ordering: OrderingStrategy::CanonicalLabeling,
            extend: ExtendConfig::default(),
        }
    }
}

impl PatternConfig {
    /// Canonical labeling, no limits
    pub fn exact() -> Self {
        Self::default()
    }

    /// Degree ordering, no limits
    pub fn fast() -> Self {
        Self {
            ordering: OrderingStrategy::GraphOrdering,
            extend: ExtendConfig::default(),
        }
    }

    pub fn from_json_str(json: &str) -> PatternResult<Self> {
        let config: PatternConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that would make every pattern a dead end
    pub fn validate(&self) -> PatternResult<()> {
        let limits = [
            ("max_pattern_vertices", self.extend.max_pattern_vertices),
            ("same_type_vertex_limit", self.extend.same_type_vertex_limit),
            ("max_extend_edges", self.extend.max_extend_edges),
        ];
        for (name, limit) in limits {
            if limit == Some(0) {
                return Err(PatternError::InvalidConfig(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Build the configured ordering for `pattern`
    pub fn build_order(&self, pattern: &Pattern) -> Box<dyn PatternOrder> {
        match self.ordering {
            OrderingStrategy::CanonicalLabeling => Box::new(CanonicalLabeling::new(pattern)),
            OrderingStrategy::GraphOrdering => Box::new(GraphOrdering::new(pattern)),
        }
    }
}
